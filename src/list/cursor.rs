//! The cursor built into every [`List`].
//!
//! The cursor is a small state machine owned by the list:
//!
//! ```text
//!                reset_cursor(true | false), list non-empty
//!   ┌───────┐ ─────────────────────────────────────────────→ ┌───────────────┐
//!   │ Unset │                                                │ Positioned(i) │ ─┐
//!   └───────┘ ←───────────────────────────────────────────── └───────────────┘  │ advance
//!                advance past either end,                          ↑           │
//!                removal of the cursor's node,                     └───────────┘
//!                clear, reset_cursor on an empty list
//! ```
//!
//! `advance` reads the current element, then steps. The value it returns is
//! always the one the cursor was on before the step.
//!
//! Since nodes are addressed by stable handles, mutations elsewhere in the
//! list leave the cursor on the same element. Its index is kept exact:
//! inserting at or before the cursor moves it up by one, removing before the
//! cursor moves it down by one.

use log::trace;

use crate::error::{PreconditionViolation, Result};
use crate::list::node::NodeRef;
use crate::list::List;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum CursorState {
    #[default]
    Unset,
    Positioned {
        node: NodeRef,
        index: usize,
    },
}

impl CursorState {
    pub(crate) fn index(&self) -> Option<usize> {
        match *self {
            CursorState::Unset => None,
            CursorState::Positioned { index, .. } => Some(index),
        }
    }

    /// A node was inserted at `at`, before the node previously at `at`.
    pub(crate) fn node_inserted(&mut self, at: usize) {
        if let CursorState::Positioned { node, index } = *self {
            if at <= index {
                *self = CursorState::Positioned {
                    node,
                    index: index + 1,
                };
            }
        }
    }

    /// The node `removed` at `at` is about to be released.
    pub(crate) fn node_removed(&mut self, removed: NodeRef, at: usize) {
        if let CursorState::Positioned { node, index } = *self {
            if node == removed {
                trace!("cursor node at {} removed, cursor unset", index);
                *self = CursorState::Unset;
            } else if at < index {
                *self = CursorState::Positioned {
                    node,
                    index: index - 1,
                };
            }
        }
    }
}

impl<T> List<T> {
    /// Returns `true` if the cursor is positioned, i.e. [`List::advance`]
    /// will succeed.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::from_iter([1, 2]);
    /// assert!(!list.can_advance());
    ///
    /// list.reset_cursor(true);
    /// assert!(list.can_advance());
    /// ```
    #[inline]
    pub fn can_advance(&self) -> bool {
        matches!(self.cursor, CursorState::Positioned { .. })
    }

    /// The index of the element under the cursor, or `None` if the cursor is
    /// unset.
    #[inline]
    pub fn cursor_index(&self) -> Option<usize> {
        self.cursor.index()
    }

    /// Returns the element under the cursor, then moves the cursor one step
    /// forward (`forward == true`) or backward.
    ///
    /// Stepping off either end of the list unsets the cursor.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Errors
    ///
    /// Fails without touching the list if the cursor is unset.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::from_iter(['A', 'B', 'C']);
    ///
    /// list.reset_cursor(false);
    /// assert_eq!(list.advance(false), Ok(&'C'));
    /// assert_eq!(list.advance(true), Ok(&'B'));
    /// assert_eq!(list.advance(true), Ok(&'C'));
    /// assert!(!list.can_advance());
    /// assert!(list.advance(true).is_err());
    /// ```
    pub fn advance(&mut self, forward: bool) -> Result<&T> {
        let CursorState::Positioned { node, index } = self.cursor else {
            return Err(PreconditionViolation::new("advance"));
        };
        let current = &self.nodes[node];
        let step = if forward {
            current.next.map(|next| (next, index + 1))
        } else {
            current.prev.map(|prev| (prev, index - 1))
        };
        self.cursor = match step {
            Some((node, index)) => CursorState::Positioned { node, index },
            None => CursorState::Unset,
        };
        trace!("cursor advanced from {} to {:?}", index, self.cursor.index());
        Ok(&self.nodes[node].value)
    }

    /// Moves the cursor to the first element (`to_front == true`) or the last
    /// element. On an empty list the cursor becomes unset.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// list.reset_cursor(true);
    /// assert!(!list.can_advance());
    ///
    /// list.insert(1);
    /// list.insert(2);
    /// list.reset_cursor(false);
    /// assert_eq!(list.cursor_index(), Some(1));
    /// assert_eq!(list.advance(true), Ok(&2));
    /// ```
    pub fn reset_cursor(&mut self, to_front: bool) {
        let target = if to_front {
            self.head.map(|node| (node, 0))
        } else {
            self.tail.map(|node| (node, self.len - 1))
        };
        self.cursor = match target {
            Some((node, index)) => CursorState::Positioned { node, index },
            None => CursorState::Unset,
        };
        trace!("cursor reset to {:?}", self.cursor.index());
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;

    #[test]
    fn cursor_starts_unset() {
        let mut list = List::from_iter([1, 2, 3]);
        assert!(!list.can_advance());
        assert_eq!(list.cursor_index(), None);
        let err = list.advance(true).unwrap_err();
        assert_eq!(err.operation(), "advance");
    }

    #[test]
    fn cursor_forward_traversal() {
        let mut list = List::from_iter(0..5);
        list.reset_cursor(true);
        let mut seen = Vec::new();
        while list.can_advance() {
            seen.push(*list.advance(true).unwrap());
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        assert!(!list.can_advance());
        assert_eq!(list.cursor_index(), None);
    }

    #[test]
    fn cursor_backward_traversal() {
        let mut list = List::from_iter(0..5);
        list.reset_cursor(false);
        assert_eq!(list.cursor_index(), Some(4));
        let mut seen = Vec::new();
        while list.can_advance() {
            seen.push(*list.advance(false).unwrap());
        }
        assert_eq!(seen, vec![4, 3, 2, 1, 0]);
        assert!(list.advance(false).is_err());
    }

    #[test]
    fn cursor_single_element() {
        let mut list = List::from_iter([42]);
        list.reset_cursor(true);
        assert_eq!(list.advance(false), Ok(&42));
        assert!(!list.can_advance());
        list.reset_cursor(false);
        assert_eq!(list.advance(true), Ok(&42));
        assert!(!list.can_advance());
    }

    #[test]
    fn cursor_reset_on_empty_list() {
        let mut list = List::from_iter([1]);
        list.reset_cursor(true);
        assert_eq!(list.remove(), Ok(1));
        list.reset_cursor(true);
        assert!(!list.can_advance());
        list.reset_cursor(false);
        assert!(!list.can_advance());
    }

    #[test]
    fn cursor_unset_when_its_node_is_removed() {
        let mut list = List::from_iter([1, 2, 3]);
        list.reset_cursor(false);
        assert_eq!(list.remove(), Ok(3));
        assert!(!list.can_advance());

        let mut list = List::from_iter([1, 2, 3]);
        list.reset_cursor(true);
        assert_eq!(list.advance(true), Ok(&1));
        assert_eq!(list.remove_at(1), Ok(2));
        assert!(!list.can_advance());
        assert_eq!(list.cursor_index(), None);
    }

    #[test]
    fn cursor_survives_removal_elsewhere() {
        let mut list = List::from_iter([1, 2, 3, 4]);
        list.reset_cursor(true);
        list.advance(true).unwrap();
        list.advance(true).unwrap();
        assert_eq!(list.cursor_index(), Some(2));

        // After the cursor: untouched.
        assert_eq!(list.remove(), Ok(4));
        assert_eq!(list.cursor_index(), Some(2));

        // Before the cursor: index follows the element.
        assert_eq!(list.remove_at(0), Ok(1));
        assert_eq!(list.cursor_index(), Some(1));
        assert_eq!(list.advance(false), Ok(&3));
        assert_eq!(list.advance(false), Ok(&2));
        assert!(!list.can_advance());
    }

    #[test]
    fn cursor_follows_insertion_before_it() {
        let mut list = List::from_iter([1, 2, 3]);
        list.reset_cursor(true);
        list.advance(true).unwrap();
        assert_eq!(list.cursor_index(), Some(1));

        // At the cursor's index: the new element goes before the cursor.
        list.insert_at(10, 1).unwrap();
        assert_eq!(list.cursor_index(), Some(2));

        // Before the cursor.
        list.insert_at(0, 0).unwrap();
        assert_eq!(list.cursor_index(), Some(3));

        // After the cursor, and appends.
        list.insert_at(20, 4).unwrap();
        list.insert(30);
        assert_eq!(list.cursor_index(), Some(3));

        assert_eq!(Vec::from_iter(list.iter().copied()), vec![0, 1, 10, 2, 20, 3, 30]);
        assert_eq!(list.at(3), Ok(&2));
        assert_eq!(list.advance(true), Ok(&2));
        assert_eq!(list.advance(true), Ok(&20));
    }

    #[test]
    fn cursor_unaffected_by_iteration_and_lookup() {
        let mut list = List::from_iter(0..4);
        list.reset_cursor(false);
        assert_eq!(list.iter().count(), 4);
        assert_eq!(list.at(0), Ok(&0));
        assert_eq!(list.first(), Ok(&0));
        assert_eq!(list.cursor_index(), Some(3));
    }

    #[test]
    fn clone_starts_with_unset_cursor() {
        let mut list = List::from_iter(0..3);
        list.reset_cursor(true);
        let mut copy = list.clone();
        assert!(!copy.can_advance());
        assert!(list.can_advance());
        copy.reset_cursor(true);
        assert_eq!(copy.advance(true), Ok(&0));
    }
}
