//! This crate provides [`CList`], an ordered sequence container with list
//! semantics (push, pop, insert, remove, indexed lookup, copy, reverse and
//! join), implemented as a cyclic doubly-linked list with owned nodes.
//!
//! The container never looks into its payloads: it stores every element as
//! given and hands it back unchanged. `&'static str` payloads behave like the
//! opaque string references of a classic C list.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use clist::CList;
//!
//! let mut list = CList::new();
//!
//! list.push_front("alpha");
//! list.push_front("bravo");
//! list.push_front("charlie"); // list is now [charlie, bravo, alpha]
//! assert_eq!(list.to_string(), "[charlie, bravo, alpha]");
//!
//! assert_eq!(list.pop_front(), Ok("charlie"));
//! list.insert("delta", 1).unwrap(); // list is now [bravo, delta, alpha]
//!
//! assert_eq!(list.nth(1), Ok(&"delta"));
//! assert_eq!(list.nth(-1), Ok(&"alpha"));
//! assert!(list.nth(3).is_err());
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                     (Ghost) Node N  │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║ payload T ║           ║ payload T ║                        ┊No payload ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      Node 0                  Node 1                               ↑   ↑
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║   ghost   ║ ──────────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║    len    ║
//! ╟───────────╢
//! ║  policy   ║
//! ╚═══════════╝
//!     CList
//! ```
//!
//! Initially, there is a ghost node in an empty list, of which the `next` and
//! `prev` pointer point to itself. As elements are inserted, `ghost.next` points
//! to the first element and `ghost.prev` to the last one, so both ends are
//! reachable in constant time. Positional operations walk from the nearer end.
//!
//! # Indices
//!
//! Non-negative indices count from the front, negative indices count from the
//! back: `-1` is the last element. [`CList::insert`] resolves its index against
//! the length the list has after the insertion, so `-1` appends and `0`
//! prepends.
//!
//! Lookups through [`CList::nth`] follow the [`IndexPolicy`] of the list:
//! [`Strict`](IndexPolicy::Strict) by default, or
//! [`Circular`](IndexPolicy::Circular) to let indices wrap around.
//!
//! # Errors
//!
//! Fallible operations return a [`Result`]: [`EmptyError`] when popping from an
//! empty list, [`OutOfRangeError`] when an index does not resolve. Both convert
//! into [`CListError`].
//!
//! # Joining
//!
//! [`CList::join`] moves every node of another list to the end of this one in
//! constant time, leaving the other list empty.
//!
//! ```
//! use clist::CList;
//!
//! let mut list = CList::from_iter(["bravo", "alpha"]);
//! let mut other = list.copy();
//! other.reverse();
//!
//! list.join(&mut other);
//! assert_eq!(list.to_string(), "[bravo, alpha, alpha, bravo]");
//! assert!(other.is_empty());
//! ```

#[doc(inline)]
pub use error::{CListError, EmptyError, OutOfRangeError};
#[doc(inline)]
pub use list::{CList, IndexPolicy};

pub mod error;
pub mod list;
