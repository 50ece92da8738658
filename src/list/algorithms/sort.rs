use crate::list::{connect, element_of, next_of, prev_of, CList, Node};
use std::ptr::NonNull;

/// Bottom-up merge sort: each pass merges neighbouring sorted runs of `width`
/// nodes, and `width` doubles until one run covers the whole list.
///
/// Only links are rewritten. A node of the right run moves in front of a node
/// of the left run only when it is strictly less, which keeps the sort stable.
pub(crate) fn merge_sort<T, F>(list: &mut CList<T>, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let (len, ghost) = (list.len(), list.ghost_node());
    let mut width = 1;
    while width < len {
        let mut left = list.front_node();
        // SAFETY: every run lies between `list.front_node()` and the ghost,
        // and `skip` never walks past the ghost.
        unsafe {
            while left != ghost {
                let right = skip(left, width, ghost);
                if right == ghost {
                    break;
                }
                let end = skip(right, width, ghost);
                merge_runs(left, right, end, &mut less);
                left = end;
            }
        }
        #[cfg(test)]
        list.assert_well_formed();
        width = width.saturating_mul(2);
    }
}

/// Walk `steps` nodes forward from `node`, stopping early at `end`.
unsafe fn skip<T>(
    mut node: NonNull<Node<T>>,
    steps: usize,
    end: NonNull<Node<T>>,
) -> NonNull<Node<T>> {
    for _ in 0..steps {
        if node == end {
            break;
        }
        node = next_of(node);
    }
    node
}

/// Merge the sorted runs `left..right` and `right..end` in place.
///
/// Moved nodes land in front of `left`, so `right` always marks where the
/// unmerged part of the left run stops. `end` itself is never relinked.
unsafe fn merge_runs<T, F>(
    mut left: NonNull<Node<T>>,
    mut right: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    less: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    while left != right && right != end {
        if less(element_of(right), element_of(left)) {
            let next = next_of(right);
            move_before(right, left);
            right = next;
        } else {
            left = next_of(left);
        }
    }
}

/// Unlink `node` and relink it right before `at`.
unsafe fn move_before<T>(node: NonNull<Node<T>>, at: NonNull<Node<T>>) {
    connect(prev_of(node), next_of(node));
    connect(prev_of(at), node);
    connect(node, at);
}
