//! This crate provides a doubly-linked sequence with indexed insertion and
//! removal, and a cursor built into the list itself.
//!
//! The [`List`] appends and removes at the back in constant time. Reaching an
//! arbitrary position walks the chain from the nearer end, so positional
//! access, insertion and removal take *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use cursor_list::List;
//!
//! let mut list = List::new();
//! list.insert(1);
//! list.insert(2);
//! list.insert(3);
//! assert_eq!(list.first(), Ok(&1));
//! assert_eq!(list.last(), Ok(&3));
//! assert_eq!(list.at(1), Ok(&2));
//!
//! list.insert_at(10, 1)?; // [1, 10, 2, 3]
//! assert_eq!(list.remove_at(0)?, 1); // [10, 2, 3]
//! assert_eq!(list.remove()?, 3); // [10, 2]
//! assert_eq!(list.size(), 2);
//! # Ok::<(), cursor_list::PreconditionViolation>(())
//! ```
//!
//! # Memory Layout
//!
//! Nodes live in an arena owned by the list and refer to each other through
//! stable handles:
//! ```text
//!       head                                              tail
//!        │     ╔═══════════╗    ╔═══════════╗    ╔═══════════╗   │
//!        └───→ ║   next    ║ ─→ ║   next    ║ ─→ ║ next=None ║ ←─┘
//!              ╟───────────╢    ╟───────────╢    ╟───────────╢
//!              ║ prev=None ║ ←─ ║   prev    ║ ←─ ║   prev    ║
//!              ╟───────────╢    ╟───────────╢    ╟───────────╢
//!              ║ value: T  ║    ║ value: T  ║    ║ value: T  ║
//!              ╚═══════════╝    ╚═══════════╝    ╚═══════════╝
//!                 index 0          index 1   ↑      index 2
//!                                            │
//!                               cursor: Positioned { index: 1 }
//! ```
//! Removed nodes leave vacant slots behind, which later insertions reuse.
//!
//! # Errors
//!
//! Every operation with a precondition (non-empty list, index in bounds,
//! positioned cursor) returns [`Result`], failing with the single error
//! [`PreconditionViolation`]. A failed call never changes the list.
//!
//! ```
//! use cursor_list::List;
//!
//! let mut list: List<i32> = List::new();
//! assert!(list.is_empty());
//! assert!(list.remove().is_err());
//! assert!(list.insert_at(1, 1).is_err());
//! assert!(list.advance(true).is_err());
//! ```
//!
//! # Cursor
//!
//! The list carries a cursor that is either unset or positioned on one
//! element. [`reset_cursor`] places it on the first or last element;
//! [`advance`] returns the element under the cursor and then steps in the
//! requested direction, unsetting the cursor when it walks off either end.
//!
//! ```
//! use cursor_list::List;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! list.reset_cursor(true);
//!
//! let mut seen = Vec::new();
//! while list.can_advance() {
//!     seen.push(*list.advance(true).unwrap());
//! }
//! assert_eq!(seen, vec![1, 2, 3]);
//! ```
//!
//! Removing the element under the cursor unsets it. Inserting or removing
//! elsewhere keeps the cursor on the same element and adjusts its index.
//!
//! ```
//! use cursor_list::List;
//!
//! let mut list = List::from_iter(['a', 'b', 'c']);
//! list.reset_cursor(false);
//! assert_eq!(list.cursor_index(), Some(2));
//!
//! list.insert_at('z', 0).unwrap();
//! assert_eq!(list.cursor_index(), Some(3));
//!
//! list.remove().unwrap();
//! assert!(!list.can_advance());
//! ```
//!
//! # Logging
//!
//! Structural mutations and cursor moves are reported through the [`log`]
//! facade at `trace` level, rejected calls at `debug` level. No logger is
//! installed by this crate.
//!
//! [`List`]: crate::List
//! [`reset_cursor`]: crate::List::reset_cursor
//! [`advance`]: crate::List::advance

#[doc(inline)]
pub use error::{PreconditionViolation, Result};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::List;

pub mod list;

mod error;
