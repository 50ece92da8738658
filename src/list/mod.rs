use std::fmt::{self, Debug, Display, Formatter};
use std::io::{self, Write};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;

use crate::error::{EmptyError, OutOfRangeError};
use crate::list::cursor::{Cursor, CursorMut};
use crate::list::index::{resolve, resolve_insert, resolve_lookup};
use crate::list::iterator::Iter;

pub use crate::list::index::IndexPolicy;

pub(crate) mod cursor;
pub(crate) mod index;
pub(crate) mod iterator;

mod algorithms;

/// The `CList` is an ordered sequence of payloads with indexed access,
/// implemented as a cyclic doubly-linked list with owned nodes.
///
/// Inserting or removing at either end takes constant time. Positional
/// operations walk from whichever end of the list is nearer to the index.
///
/// The `CList` contains:
/// - a pointer `ghost` that points to the ghost node, which carries no payload
///   and closes the cycle;
/// - a length field `len`;
/// - the [`IndexPolicy`] used by [`CList::nth`].
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `start..end`: a half-open range of list nodes, left inclusive and right
///   exclusive (probably the ghost node).
pub struct CList<T> {
    ghost: NonNull<Node<MaybeUninit<T>>>,
    /// the length of the list
    pub(crate) len: usize,
    policy: IndexPolicy,
    _marker: PhantomData<Box<Node<T>>>,
}

// The ghost node is allocated as a `Node<MaybeUninit<T>>` and viewed as a
// `Node<T>`. Both have the same size and alignment, and the ghost's `element`
// is never initialized nor read.
#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

/// Nodes fragment detached from a list, used in joining.
///
/// When detached from a list, reading of `front.prev` and `back.next`
/// is invalid.
pub(crate) struct DetachedNodes<T> {
    pub(crate) front: NonNull<Node<T>>,
    pub(crate) back: NonNull<Node<T>>,
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

/// Link `prev -> next` in both directions.
///
/// It is unsafe because both pointers must be live nodes (or ghost nodes).
pub(crate) unsafe fn connect<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    (*prev.as_ptr()).next = next;
    (*next.as_ptr()).prev = prev;
}

/// Read the `next` link of a live node (or ghost node).
pub(crate) unsafe fn next_of<T>(node: NonNull<Node<T>>) -> NonNull<Node<T>> {
    (*node.as_ptr()).next
}

/// Read the `prev` link of a live node (or ghost node).
pub(crate) unsafe fn prev_of<T>(node: NonNull<Node<T>>) -> NonNull<Node<T>> {
    (*node.as_ptr()).prev
}

/// Borrow the payload of a live, non-ghost node.
pub(crate) unsafe fn element_of<'a, T>(node: NonNull<Node<T>>) -> &'a T {
    &(*node.as_ptr()).element
}

// private methods
impl<T> CList<T> {
    pub(crate) fn ghost_node(&self) -> NonNull<Node<T>> {
        self.ghost.cast()
    }
    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.next` is always valid (either `ghost` itself, or the first element
        // in the list).
        unsafe { next_of(self.ghost_node()) }
    }
    pub(crate) fn back_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.prev` is always valid (either `ghost` itself, or the last element
        // in the list).
        unsafe { prev_of(self.ghost_node()) }
    }

    /// Detach a single node `node` from the list, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the list,
    /// or whether it is the ghost node.
    ///
    /// If the `node` does not belong to the list, this function call will make
    /// the list ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        self.len -= 1;
        let node = Box::from_raw(node.as_ptr());
        connect(node.prev, node.next);
        node
    }

    /// Attach a single node `node` to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belongs
    /// to the list, or whether the `prev` and `next` is adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    ///
    /// If the `prev` and `next` does not belong to the list, or they are not
    /// adjacent nodes, this function call will make the list ill-formed.
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, node);
        connect(node, next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, node);
            assert_adjacent(node, next);
        }
    }

    /// Detach a range of nodes `front..=back` from the list, and return the detached
    /// nodes.
    ///
    /// It is unsafe because it does not check whether `front..=back` is a valid range
    /// (i.e. `front` must **NOT** be at the right of `back`), whether it has `len`
    /// nodes, or whether it belongs to the list.
    ///
    /// If `front..=back` is not a valid range or it does not belong to the list,
    /// this function call will make the list ill-formed.
    pub(crate) unsafe fn detach_nodes(
        &mut self,
        front: NonNull<Node<T>>,
        back: NonNull<Node<T>>,
        len: usize,
    ) -> DetachedNodes<T> {
        self.len -= len;
        connect(prev_of(front), next_of(back));
        DetachedNodes::new(front, back, len)
    }

    /// Attach a range of detached nodes to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belongs
    /// to the list, or whether the `prev` and `next` is adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    ///
    /// If the `prev` and `next` does not belong to the list, or they are not
    /// adjacent nodes, this function call will make the list ill-formed.
    pub(crate) unsafe fn attach_nodes(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        detached: DetachedNodes<T>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, detached.front);
        connect(detached.back, next);
        self.len += detached.len;
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, detached.front);
            assert_adjacent(detached.back, next);
        }
    }

    /// Detach all nodes from the list, and return the detached nodes, or return
    /// `None` if the list is empty.
    ///
    /// It is safe because `self.front_node()..=self.back_node()` is a valid range.
    pub(crate) fn detach_all_nodes(&mut self) -> Option<DetachedNodes<T>> {
        if self.is_empty() {
            return None;
        }
        unsafe { Some(self.detach_nodes(self.front_node(), self.back_node(), self.len)) }
    }

    /// Provides a cursor at the first node.
    pub(crate) fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_node(), 0)
    }

    /// Provides a cursor with editing operations at the first node.
    pub(crate) fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let front = self.front_node();
        CursorMut::new(self, front, 0)
    }

    /// Provides a cursor with editing operations at the node with given index,
    /// which must be in `0..=len`.
    pub(crate) fn cursor_mut(&mut self, at: usize) -> CursorMut<'_, T> {
        let mut cursor = self.cursor_start_mut();
        let seeked = cursor.seek_to(at);
        debug_assert!(seeked.is_ok(), "Cannot create cursor at a nonexistent index");
        cursor
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<T> CList<T> {
    /// Create an empty `CList` with the [`IndexPolicy::Strict`] lookup policy.
    ///
    /// # Examples
    /// ```
    /// use clist::CList;
    /// let list: CList<&str> = CList::new();
    /// assert_eq!(list.len(), 0);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_policy(IndexPolicy::Strict)
    }

    /// Create an empty `CList` whose [`CList::nth`] follows `policy`.
    pub fn with_policy(policy: IndexPolicy) -> Self {
        Self {
            ghost: new_ghost(),
            len: 0,
            policy,
            _marker: PhantomData,
        }
    }

    /// Returns the lookup policy of the list.
    #[inline]
    pub fn policy(&self) -> IndexPolicy {
        self.policy
    }

    /// Returns `true` if the `CList` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.ghost_node()
    }

    /// Returns the length of the `CList`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use clist::CList;
    ///
    /// let mut list = CList::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.append(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `CList`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use clist::CList;
    ///
    /// let mut list = CList::new();
    ///
    /// list.push_front("alpha");
    /// list.push_front("bravo");
    /// assert_eq!(list.nth(0), Ok(&"bravo"));
    /// ```
    pub fn push_front(&mut self, item: T) {
        self.cursor_start_mut().insert(item);
    }

    /// Removes the first element and returns it, or [`EmptyError`] if the list
    /// is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use clist::{CList, EmptyError};
    ///
    /// let mut list = CList::new();
    /// assert_eq!(list.pop_front(), Err(EmptyError));
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Ok(3));
    /// assert_eq!(list.pop_front(), Ok(1));
    /// assert_eq!(list.pop_front(), Err(EmptyError));
    /// ```
    pub fn pop_front(&mut self) -> Result<T, EmptyError> {
        self.cursor_start_mut().remove().ok_or(EmptyError)
    }

    /// Appends an element to the back of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use clist::CList;
    ///
    /// let mut list = CList::new();
    /// list.append(1);
    /// list.append(3);
    /// assert_eq!(list.nth(-1), Ok(&3));
    /// ```
    pub fn append(&mut self, item: T) {
        let len = self.len;
        self.cursor_mut(len).insert(item);
    }

    /// Removes the last element and returns it, or [`EmptyError`] if the list
    /// is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_back(&mut self) -> Result<T, EmptyError> {
        match self.len.checked_sub(1) {
            Some(last) => self.cursor_mut(last).remove().ok_or(EmptyError),
            None => Err(EmptyError),
        }
    }

    /// Provides a reference to the element at `index`.
    ///
    /// Non-negative indices count from the front (`0` is the first element),
    /// negative indices count from the back (`-1` is the last element). Under
    /// [`IndexPolicy::Strict`], indices outside `-len..len` are out of range;
    /// under [`IndexPolicy::Circular`] every index of a non-empty list wraps.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(*i*, *n* - *i*)) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use clist::CList;
    ///
    /// let list = CList::from_iter(["zero", "one", "two"]);
    /// assert_eq!(list.nth(1), Ok(&"one"));
    /// assert_eq!(list.nth(-3), Ok(&"zero"));
    /// assert!(list.nth(3).is_err());
    /// assert!(list.nth(-4).is_err());
    /// ```
    pub fn nth(&self, index: isize) -> Result<&T, OutOfRangeError> {
        let at = resolve_lookup(index, self.len, self.policy)?;
        let out_of_range = OutOfRangeError {
            index,
            len: self.len,
        };
        let mut cursor = self.cursor_start();
        cursor.seek_to(at).map_err(|_| out_of_range)?;
        cursor.current().ok_or(out_of_range)
    }

    /// Inserts `item` so that it becomes the element at `index`.
    ///
    /// The index is resolved against the length the list has *after* the
    /// insertion: `0` (or `-(len + 1)`) prepends, `len` (or `-1`) appends.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(*i*, *n* - *i*)) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use clist::CList;
    ///
    /// let mut list = CList::from_iter(["bravo", "alpha"]);
    ///
    /// list.insert("delta", 2).unwrap();
    /// list.append("echo");
    /// list.insert("foxtrot", -2).unwrap();
    ///
    /// assert_eq!(list, CList::from_iter(["bravo", "alpha", "delta", "foxtrot", "echo"]));
    /// assert!(list.insert("golf", 6).is_err());
    /// ```
    pub fn insert(&mut self, item: T, index: isize) -> Result<(), OutOfRangeError> {
        let at = resolve_insert(index, self.len)?;
        self.cursor_mut(at).insert(item);
        Ok(())
    }

    /// Removes the element at `index` and returns it.
    ///
    /// The index is resolved like a [`IndexPolicy::Strict`] lookup, whatever the
    /// policy of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(*i*, *n* - *i*)) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use clist::CList;
    ///
    /// let mut list = CList::from_iter([1, 2, 3]);
    ///
    /// assert_eq!(list.remove(1), Ok(2));
    /// assert_eq!(list.remove(-1), Ok(3));
    /// assert!(list.remove(1).is_err());
    /// assert_eq!(list.remove(0), Ok(1));
    /// ```
    pub fn remove(&mut self, index: isize) -> Result<T, OutOfRangeError> {
        let len = self.len;
        let at = resolve(index, len)?;
        self.cursor_mut(at)
            .remove()
            .ok_or(OutOfRangeError { index, len })
    }

    /// Moves all elements from `other` to the end of the list.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`. After
    /// this operation, `other` becomes empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use clist::CList;
    ///
    /// let mut list1 = CList::from_iter(['a']);
    /// let mut list2 = CList::from_iter(['b', 'c']);
    ///
    /// list1.join(&mut list2);
    ///
    /// assert_eq!(list1, CList::from_iter(['a', 'b', 'c']));
    /// assert!(list2.is_empty());
    /// ```
    pub fn join(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // `self.back_node()` and `self.ghost_node()` are valid
            // nodes in the list and they are adjacent, so it is safe.
            unsafe { self.attach_nodes(self.back_node(), self.ghost_node(), detached) }
        }
    }

    /// Writes the list to `out` in its [`Display`] form, followed by a newline.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()>
    where
        T: Display,
    {
        writeln!(out, "{}", self)
    }

    /// Prints the list to the standard output, e.g. `[charlie, bravo, alpha]`.
    pub fn print(&self)
    where
        T: Display,
    {
        println!("{}", self);
    }
}

impl<T: Debug> Debug for CList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display> Display for CList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(element, f)?;
        }
        f.write_str("]")
    }
}

impl<T> Default for CList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a detached node with given element. Its links dangle until it is
    /// attached to a list.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        let node = Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            element,
        });
        NonNull::from(Box::leak(node))
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

impl<T> DetachedNodes<T> {
    /// If is unsafe because it must be guaranteed that `front..=back` is
    /// a valid range and its length must be equal to `len`.
    unsafe fn new(front: NonNull<Node<T>>, back: NonNull<Node<T>>, len: usize) -> Self {
        debug_assert!(len > 0, "Cannot detach nodes of length 0");
        Self {
            front,
            back,
            len,
            _marker: PhantomData,
        }
    }
}

fn new_ghost<T>() -> NonNull<Node<MaybeUninit<T>>> {
    let ghost = Node::new_detached(MaybeUninit::uninit());
    // SAFETY: `ghost` was just allocated and nothing else points to it.
    unsafe { connect(ghost, ghost) };
    ghost
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(next_of(prev), next);
        assert_eq!(prev_of(next), prev);
    }
}

impl<T> Drop for CList<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: the ghost was allocated by `new_ghost` as a
        // `Node<MaybeUninit<T>>` and no element node links to it any more.
        // Dropping it leaves the uninitialized `element` alone.
        unsafe { drop(Box::from_raw(self.ghost.as_ptr())) };
    }
}

unsafe impl<T: Send> Send for CList<T> {}

unsafe impl<T: Sync> Sync for CList<T> {}

// Ensure that `CList` and its read-only iterator are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: CList<&'static str>) -> CList<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{EmptyError, OutOfRangeError};
    use crate::list::{CList, IndexPolicy, Node};
    use std::cell::RefCell;

    #[derive(Debug)]
    struct DropChecker<'a, T: Copy> {
        value: T,
        dropped: &'a RefCell<Vec<T>>,
    }
    impl<'a, T: Copy> DropChecker<'a, T> {
        fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
            Self { value, dropped }
        }
    }
    impl<'a, T: Copy> Drop for DropChecker<'a, T> {
        fn drop(&mut self) {
            self.dropped.borrow_mut().push(self.value);
        }
    }

    fn contents<T: Clone>(list: &CList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn list_create() {
        let mut list = CList::<i32>::new();
        assert!(list.is_empty());
        assert_eq!(list.policy(), IndexPolicy::Strict);
        list.append(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Ok(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_drop() {
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = CList::new();
        list.append(DropChecker::new(1, &dropped));
        list.append(DropChecker::new(2, &dropped));
        list.append(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);

        drop(CList::<DropChecker<i32>>::new());
        assert_eq!(dropped.borrow().len(), 3);
    }

    #[test]
    fn list_remove_hands_back_ownership() {
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = CList::new();
        (0..4).for_each(|i| list.append(DropChecker::new(i, &dropped)));

        let taken = list.remove(1).map(|checker| checker.value);
        assert_eq!(taken, Ok(1));
        assert_eq!(dropped.borrow().as_slice(), &[1]);

        list.clear();
        assert_eq!(dropped.borrow().as_slice(), &[1, 0, 2, 3]);
        assert!(list.is_empty());
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = CList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.pop_front(), Err(EmptyError));
        assert_eq!(list.pop_back(), Err(EmptyError));

        list.append(1);
        assert_eq!(list.nth(-1), Ok(&1));
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.pop_back(), Err(EmptyError));
        assert!(list.is_empty());

        list.push_front(1);
        list.push_front(2);
        list.append(3);
        assert_eq!(contents(&list), vec![2, 1, 3]);
        assert_eq!(list.pop_front(), Ok(2));
        assert_eq!(list.pop_back(), Ok(3));
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_nth() {
        let list = CList::from_iter(0..10);
        for i in 0..10 {
            assert_eq!(list.nth(i), Ok(&i));
            assert_eq!(list.nth(i - 10), Ok(&i));
        }
        assert_eq!(list.nth(10), Err(OutOfRangeError { index: 10, len: 10 }));
        assert_eq!(
            list.nth(-11),
            Err(OutOfRangeError { index: -11, len: 10 })
        );
    }

    #[test]
    fn list_nth_circular() {
        let mut list = CList::with_policy(IndexPolicy::Circular);
        assert!(list.nth(0).is_err());
        list.extend(0..3);
        assert_eq!(list.nth(3), Ok(&0));
        assert_eq!(list.nth(-4), Ok(&2));
        assert_eq!(list.nth(10), Ok(&1));
        // insertion and removal stay strict
        assert!(list.insert(9, 5).is_err());
        assert!(list.remove(3).is_err());
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn list_insert_and_remove() {
        let mut list = CList::from_iter(0..10);
        list.insert(10, 5).unwrap();
        assert_eq!(contents(&list), vec![0, 1, 2, 3, 4, 10, 5, 6, 7, 8, 9]);

        assert_eq!(list.remove(10), Ok(9));
        assert_eq!(list.nth(-1), Ok(&8));

        list.insert(11, 0).unwrap();
        assert_eq!(list.nth(0), Ok(&11));
        assert_eq!(list.remove(0), Ok(11));

        list.insert(12, -1).unwrap();
        assert_eq!(list.nth(-1), Ok(&12));
        list.insert(13, -12).unwrap();
        assert_eq!(list.nth(0), Ok(&13));
        assert_eq!(
            contents(&list),
            vec![13, 0, 1, 2, 3, 4, 10, 5, 6, 7, 8, 12]
        );

        assert_eq!(
            list.insert(14, 13),
            Err(OutOfRangeError { index: 13, len: 12 })
        );
        assert_eq!(
            list.insert(14, -14),
            Err(OutOfRangeError { index: -14, len: 12 })
        );
        assert_eq!(
            list.remove(12),
            Err(OutOfRangeError { index: 12, len: 12 })
        );
        assert_eq!(list.len(), 12);
    }

    #[test]
    fn list_remove_empty() {
        let mut list = CList::<&str>::new();
        assert_eq!(list.remove(0), Err(OutOfRangeError { index: 0, len: 0 }));
        assert_eq!(list.remove(-1), Err(OutOfRangeError { index: -1, len: 0 }));
        list.insert("only", 0).unwrap();
        assert_eq!(list.remove(-1), Ok("only"));
        assert!(list.is_empty());
    }

    #[test]
    fn list_join() {
        fn test_list_join(list: Vec<i32>, other: Vec<i32>) {
            let mut joined = CList::from_iter(list.iter().copied());
            let mut source = CList::from_iter(other.iter().copied());
            joined.join(&mut source);

            assert!(source.is_empty());
            assert_eq!(source.len(), 0);
            assert_eq!(joined.len(), list.len() + other.len());
            let expected: Vec<i32> = list.iter().chain(other.iter()).copied().collect();
            assert_eq!(contents(&joined), expected);

            // the emptied source is still a working list
            source.append(42);
            assert_eq!(contents(&source), vec![42]);
        }
        test_list_join(vec![0, 1, 2], vec![3, 4]);
        test_list_join(vec![0], vec![]);
        test_list_join(vec![], vec![0, 1]);
        test_list_join(vec![], vec![]);
    }

    #[test]
    fn list_join_moves_nodes() {
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = CList::new();
        let mut other = CList::new();
        list.append(DropChecker::new(1, &dropped));
        other.append(DropChecker::new(2, &dropped));
        other.append(DropChecker::new(3, &dropped));

        list.join(&mut other);
        drop(other);
        assert!(dropped.borrow().is_empty());
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_print() {
        let mut out = Vec::new();
        CList::from_iter(["charlie", "bravo", "alpha"])
            .write_to(&mut out)
            .unwrap();
        assert_eq!(out, b"[charlie, bravo, alpha]\n");

        let mut out = Vec::new();
        CList::<i32>::new().write_to(&mut out).unwrap();
        assert_eq!(out, b"[]\n");
    }

    #[test]
    fn list_overaligned_payload() {
        #[derive(Debug, Clone, Copy, PartialEq)]
        #[repr(align(64))]
        struct Wide(u8);

        let mut list = CList::new();
        let ghost = list.ghost_node();
        assert_eq!(ghost.as_ptr() as usize % std::mem::align_of::<Node<Wide>>(), 0);

        list.extend([Wide(1), Wide(2), Wide(3)]);
        list.reverse();
        assert_eq!(contents(&list), vec![Wide(3), Wide(2), Wide(1)]);
        assert_eq!(list.remove(-2), Ok(Wide(2)));
        list.assert_well_formed();
    }

    #[test]
    fn list_zero_sized_payload() {
        let mut list = CList::from_iter([(), (), ()]);
        list.push_front(());
        assert_eq!(list.len(), 4);
        assert_eq!(list.pop_back(), Ok(()));
        list.assert_well_formed();
    }

    #[test]
    fn list_debug() {
        assert_eq!(format!("{:?}", CList::from_iter([1, 2])), "[1, 2]");
    }
}
