use crate::list::{element_of, next_of, prev_of, CList, Node};
use std::ptr::NonNull;

/// A cursor over a `CList`.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the cursor,
/// indexed by 0, 1, ..., *n*, where *n* is the ghost node of the list.
pub(crate) struct Cursor<'a, T: 'a> {
    index: usize,
    current: NonNull<Node<T>>,
    list: &'a CList<T>,
}

/// A cursor over a `CList` with editing operations.
///
/// The element references it yields borrow from the cursor itself, so the
/// list cannot be relinked while one of them is alive.
pub(crate) struct CursorMut<'a, T: 'a> {
    index: usize,
    current: NonNull<Node<T>>,
    list: &'a mut CList<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        impl<'a, T: 'a> $CURSOR<'a, T> {
            fn is_ghost_node(&self) -> bool {
                self.current == self.list.ghost_node()
            }
            fn next_node(&self) -> NonNull<Node<T>> {
                // SAFETY: `current.next` is always valid since it is a cyclic list.
                unsafe { next_of(self.current) }
            }
            fn prev_node(&self) -> NonNull<Node<T>> {
                // SAFETY: `current.prev` is always valid since it is a cyclic list.
                unsafe { prev_of(self.current) }
            }

            /// Move forward the cursor by given steps, without checking whether
            /// it will pass through the ghost node.
            ///
            /// It is unsafe because if the moving passes through the ghost node,
            /// the index will be invalid.
            unsafe fn seek_forward_fast(&mut self, steps: usize) {
                self.index = self.index.saturating_add(steps);
                (0..steps).for_each(|_| self.current = self.next_node());
            }

            /// Move backward the cursor by given steps, without checking whether
            /// it will pass through the ghost node.
            ///
            /// It is unsafe because if the moving passes through the ghost node,
            /// the index will be invalid.
            unsafe fn seek_backward_fast(&mut self, steps: usize) {
                self.index = self.index.saturating_sub(steps);
                (0..steps).for_each(|_| self.current = self.prev_node());
            }

            /// Move the cursor to the given position `target`, walking from whichever
            /// of the cursor, the front or the ghost node is nearest.
            ///
            /// Return `Err(target - len)` and leave the cursor where it is if
            /// `target` is beyond the ghost node.
            ///
            /// This operation should compute in *O*(min(*i*, *n* - *i*)) time.
            pub(crate) fn seek_to(&mut self, target: usize) -> Result<(), usize> {
                let len = self.list.len();
                if target > len {
                    return Err(target - len);
                }
                match target {
                    target if target == self.index => {}
                    0 => self.move_to_start(),
                    target if target == len => self.move_to_end(),
                    _ => unsafe {
                        // current=c, target=t, ghost=#
                        if target > self.index {
                            // target is at the right side of current: [   c----->t   #]
                            if target - self.index <= len - target {
                                // target is near the right side of current: [    c-->t     #]
                                self.seek_forward_fast(target - self.index);
                            } else {
                                // target is far from the right side of current: [ c     t<--#]
                                self.move_to_end();
                                self.seek_backward_fast(len - target);
                            }
                        } else {
                            // target is at the left side of current: [   t<-----c   #]
                            if self.index - target <= target {
                                // target is near the left side of current: [    t<--c     #]
                                self.seek_backward_fast(self.index - target);
                            } else {
                                // target is far from the left side of current: [-->t      c #]
                                self.move_to_start();
                                self.seek_forward_fast(target);
                            }
                        }
                    },
                }
                Ok(())
            }

            /// Set the cursor to the start of the list (i.e. the first node).
            #[inline]
            fn move_to_start(&mut self) {
                self.index = 0;
                self.current = self.list.front_node();
            }

            /// Set the cursor to the end of the list (i.e. the ghost node).
            #[inline]
            fn move_to_end(&mut self) {
                self.index = self.list.len();
                self.current = self.list.ghost_node();
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a CList<T>, current: NonNull<Node<T>>, index: usize) -> Self {
        Self {
            index,
            current,
            list,
        }
    }

    /// Return an immutable reference of current node of the cursor,
    /// or return `None` if it is located at the ghost node.
    pub(crate) fn current(&self) -> Option<&'a T> {
        if self.is_ghost_node() {
            return None;
        }
        // SAFETY: it is safe because non-ghost nodes must hold a
        // valid element.
        unsafe { Some(element_of(self.current)) }
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut CList<T>, current: NonNull<Node<T>>, index: usize) -> Self {
        Self {
            index,
            current,
            list,
        }
    }

    /// Return a reference of current node of the cursor, or return `None` if
    /// it is located at the ghost node.
    pub(crate) fn current(&self) -> Option<&T> {
        if self.is_ghost_node() {
            return None;
        }
        // SAFETY: it is safe because non-ghost nodes must hold a
        // valid element.
        unsafe { Some(element_of(self.current)) }
    }

    /// Move the cursor to the next position, unless it is at the ghost node.
    pub(crate) fn move_next(&mut self) {
        if !self.is_ghost_node() {
            self.index += 1;
            self.current = self.next_node();
        }
    }

    /// Add an element before the cursor position.
    ///
    /// After insertion, the cursor stays put but its `index` becomes
    /// `index + 1`.
    ///
    /// This operation should compute in *O*(1) time.
    pub(crate) fn insert(&mut self, item: T) {
        let node = Node::new_detached(item);
        // SAFETY: `self.current` is a valid node in the list, and its previous
        // node is adjacent to it, so it is safe.
        unsafe { self.list.attach_node(self.prev_node(), self.current, node) };
        self.index += 1;
    }

    /// Remove the element at the cursor and return it, or return `None`
    /// if the cursor is at the ghost node. After removal, the cursor
    /// is moved to the next node unless no removing is happened.
    ///
    /// This operation should compute in *O*(*1*) time.
    pub(crate) fn remove(&mut self) -> Option<T> {
        if self.is_ghost_node() {
            return None;
        }
        let next = self.next_node();
        // SAFETY: `self.current` is a valid non-ghost node in the list, so it is safe.
        let node = unsafe { self.list.detach_node(self.current) };
        self.current = next;
        Some(Node::into_element(node))
    }
}
