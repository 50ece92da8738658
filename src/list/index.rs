use crate::error::OutOfRangeError;

/// How [`CList::nth`](crate::CList::nth) treats indices beyond the ends of the
/// list.
///
/// Only lookups are affected. Insertion and removal are always bounds-checked
/// strictly.
///
/// # Examples
///
/// ```
/// use clist::{CList, IndexPolicy};
///
/// let mut list = CList::with_policy(IndexPolicy::Circular);
/// list.append("a");
/// list.append("b");
///
/// assert_eq!(list.nth(2), Ok(&"a"));
/// assert_eq!(list.nth(-3), Ok(&"b"));
/// assert!(list.remove(2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndexPolicy {
    /// Indices outside `-len..len` are out of range.
    #[default]
    Strict,
    /// Any index on a non-empty list wraps around, modulo `len`.
    Circular,
}

/// Resolve a possibly negative `index` to a position in `0..len`.
pub(crate) fn resolve(index: isize, len: usize) -> Result<usize, OutOfRangeError> {
    let position = if index >= 0 {
        Some(index.unsigned_abs()).filter(|&at| at < len)
    } else {
        len.checked_sub(index.unsigned_abs())
    };
    position.ok_or(OutOfRangeError { index, len })
}

/// Resolve an index for lookup under `policy`.
pub(crate) fn resolve_lookup(
    index: isize,
    len: usize,
    policy: IndexPolicy,
) -> Result<usize, OutOfRangeError> {
    match policy {
        IndexPolicy::Strict => resolve(index, len),
        IndexPolicy::Circular if len == 0 => Err(OutOfRangeError { index, len }),
        IndexPolicy::Circular => {
            // A list never holds more than `isize::MAX` nodes, so `len` fits.
            let wrapped = index.rem_euclid(len as isize);
            Ok(wrapped.unsigned_abs())
        }
    }
}

/// Resolve an insertion index: the position the new element occupies once the
/// list has grown to `len + 1` elements.
pub(crate) fn resolve_insert(index: isize, len: usize) -> Result<usize, OutOfRangeError> {
    resolve(index, len + 1).map_err(|_| OutOfRangeError { index, len })
}
