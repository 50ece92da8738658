use crate::list::CList;
use std::cmp::Ordering;
use std::mem;

mod sort;

/// Compares the elements only; the lookup policies of the lists are ignored.
impl<T: PartialEq> PartialEq for CList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CList<T> {}

impl<T: Clone> Clone for CList<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T> CList<T> {
    /// Creates an independent list holding the same elements in the same
    /// order, with the same lookup policy.
    ///
    /// No node is shared between the two lists, so mutating one never shows
    /// in the other.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use clist::CList;
    ///
    /// let list = CList::from_iter(["bravo", "alpha"]);
    /// let mut copy = list.copy();
    ///
    /// copy.push_front("charlie");
    /// assert_eq!(copy.len(), 3);
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn copy(&self) -> Self
    where
        T: Clone,
    {
        let mut list = CList::with_policy(self.policy());
        list.extend(self.iter().cloned());
        list
    }

    /// Reverses the order of the elements in place.
    ///
    /// Only the links of the nodes are rewritten; no element is moved or
    /// allocated.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use clist::CList;
    ///
    /// let mut list = CList::from_iter([1, 2, 3]);
    /// list.reverse();
    /// assert_eq!(list, CList::from_iter([3, 2, 1]));
    /// ```
    pub fn reverse(&mut self) {
        let ghost = self.ghost_node();
        let mut node = ghost;
        // Swapping the links of every node (the ghost included) turns the
        // cycle around.
        loop {
            // SAFETY: every node on the cycle, the ghost included, has valid links.
            unsafe {
                let links = node.as_ptr();
                mem::swap(&mut (*links).next, &mut (*links).prev);
                node = (*links).prev;
            }
            if node == ghost {
                break;
            }
        }
    }

    /// Returns `true` if the `CList` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use clist::CList;
    ///
    /// let list = CList::from_iter([0, 1, 2]);
    ///
    /// assert!(list.contains(&0));
    /// assert!(!list.contains(&10));
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Inserts `item` after every element that is less than or equal to it.
    ///
    /// On a sorted list, the list stays sorted and equal elements keep their
    /// insertion order.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use clist::CList;
    ///
    /// let mut list = CList::new();
    /// for word in ["Two", "Zero", "One", "Three"] {
    ///     list.insert_sorted(word);
    /// }
    /// assert_eq!(list, CList::from_iter(["One", "Three", "Two", "Zero"]));
    /// ```
    pub fn insert_sorted(&mut self, item: T)
    where
        T: Ord,
    {
        let mut cursor = self.cursor_start_mut();
        while matches!(cursor.current(), Some(current) if current <= &item) {
            cursor.move_next();
        }
        cursor.insert(item);
    }

    /// Sorts the list.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and *O*(1) memory.
    ///
    /// # Current Implementation
    ///
    /// The current algorithm is a bottom-up merge sort that relinks nodes in
    /// place. There is no extra temporary storage during merging.
    ///
    /// # Examples
    ///
    /// ```
    /// use clist::CList;
    /// let mut list = CList::from_iter([5, 2, 4, 3, 1]);
    ///
    /// list.sort();
    ///
    /// assert_eq!(list, CList::from_iter([1, 2, 3, 4, 5]));
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        sort::merge_sort(self, |a, b| a.lt(b));
    }

    /// Sorts the list with a comparator function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// The comparator function must define a total ordering for the
    /// elements in the list. If the ordering is not total, the order
    /// of the elements is unspecified.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use clist::CList;
    /// let mut v = CList::from_iter([5, 4, 1, 3, 2]);
    ///
    /// // reverse sorting
    /// v.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(v, CList::from_iter([5, 4, 3, 2, 1]));
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        sort::merge_sort(self, |a, b| compare(a, b) == Ordering::Less)
    }
}

#[cfg(test)]
impl<T> CList<T> {
    /// Walks the cycle and checks the link and length invariants.
    pub(crate) fn assert_well_formed(&self) {
        use crate::list::{next_of, prev_of};

        let ghost = self.ghost_node();
        let mut node = ghost;
        let mut count = 0;
        unsafe {
            loop {
                let next = next_of(node);
                assert_eq!(prev_of(next), node, "inconsistent links");
                node = next;
                if node == ghost {
                    break;
                }
                count += 1;
            }
        }
        assert_eq!(count, self.len(), "length does not match the nodes");
    }
}
