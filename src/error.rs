use derive_more::{Display, Error, From, IsVariant};

/// Returned by [`CList::pop_front`] and [`CList::pop_back`] when the list has
/// no element to take.
///
/// [`CList::pop_front`]: crate::CList::pop_front
/// [`CList::pop_back`]: crate::CList::pop_back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("cannot take an element from an empty list")]
pub struct EmptyError;

/// Returned when an index does not resolve to a position of the list.
///
/// `index` is the index exactly as the caller passed it (possibly negative),
/// `len` is the length of the list at the time of the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("index {index} out of range for list with {len} elements")]
pub struct OutOfRangeError {
    pub index: isize,
    pub len: usize,
}

/// Any error produced by a [`CList`](crate::CList) operation.
///
/// # Examples
///
/// ```
/// use clist::{CList, CListError};
///
/// fn first_and_second(list: &mut CList<&'static str>) -> Result<(&'static str, &'static str), CListError> {
///     let second = *list.nth(1)?;
///     let first = list.pop_front()?;
///     Ok((first, second))
/// }
///
/// let mut list = CList::from_iter(["a", "b"]);
/// assert_eq!(first_and_second(&mut list), Ok(("a", "b")));
/// assert!(first_and_second(&mut list).unwrap_err().is_out_of_range());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum CListError {
    Empty(#[error(not(source))] EmptyError),
    OutOfRange(#[error(not(source))] OutOfRangeError),
}
