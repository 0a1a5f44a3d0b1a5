use std::fmt::{Debug, Formatter};

use log::trace;

use crate::error::{PreconditionViolation, Result};
use crate::list::cursor::CursorState;
use crate::list::node::{Node, NodeRef, Nodes};
use crate::Iter;

pub mod cursor;
pub mod iterator;

mod algorithms;
mod node;

/// The `List` is a doubly-linked sequence with indexed insertion and removal,
/// head and tail access, and a built-in cursor.
///
/// Nodes are kept in an arena and linked by stable handles, so relinking a
/// node is *O*(1) while reaching the node at a given index takes *O*(*n*)
/// time.
///
/// The `List` contains:
/// - the node arena;
/// - `head` and `tail` handles (both `None` iff the list is empty);
/// - the cursor, either unset or positioned at a node with its index;
/// - the length of the list.
///
/// The list is never implicitly copied. [`Clone`] makes a deep copy of the
/// elements, and the copy starts with an unset cursor.
pub struct List<T> {
    nodes: Nodes<T>,
    head: Option<NodeRef>,
    tail: Option<NodeRef>,
    cursor: CursorState,
    len: usize,
}

// private methods
impl<T> List<T> {
    /// Find the node at `index`, walking from whichever end is nearer.
    ///
    /// Returns `None` if `index >= len`.
    pub(crate) fn find_node(&self, index: usize) -> Option<NodeRef> {
        if index >= self.len {
            return None;
        }
        let mut current = self.head;
        if index <= self.len / 2 {
            for _ in 0..index {
                current = current.and_then(|node| self.nodes[node].next);
            }
        } else {
            current = self.tail;
            for _ in index + 1..self.len {
                current = current.and_then(|node| self.nodes[node].prev);
            }
        }
        current
    }

    /// Allocate a node holding `value` and link it between `prev` and `next`.
    ///
    /// `prev` and `next` must be adjacent (`None` standing for the ends of
    /// the list).
    fn attach_node(&mut self, prev: Option<NodeRef>, next: Option<NodeRef>, value: T) -> NodeRef {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        let node = self.nodes.alloc(Node { value, prev, next });
        match prev {
            Some(prev) => self.nodes[prev].next = Some(node),
            None => self.head = Some(node),
        }
        match next {
            Some(next) => self.nodes[next].prev = Some(node),
            None => self.tail = Some(node),
        }
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, Some(node));
            self.assert_adjacent(Some(node), next);
        }
        node
    }

    /// Unlink `node` from its neighbours, release it and return its value.
    fn detach_node(&mut self, node: NodeRef) -> T {
        let Node { value, prev, next } = self.nodes.release(node);
        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next].prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        value
    }

    /// Remove the node at `index`, keeping the cursor consistent.
    fn remove_node(&mut self, node: NodeRef, index: usize) -> T {
        self.cursor.node_removed(node, index);
        let value = self.detach_node(node);
        trace!("removed node at {}, len = {}", index, self.len);
        value
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: Option<NodeRef>, next: Option<NodeRef>) {
        let forward = match prev {
            Some(prev) => self.nodes[prev].next,
            None => self.head,
        };
        let backward = match next {
            Some(next) => self.nodes[next].prev,
            None => self.tail,
        };
        assert_eq!(forward, next);
        assert_eq!(backward, prev);
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use cursor_list::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty `List` with room for `capacity` nodes before the
    /// node arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Nodes::with_capacity(capacity),
            head: None,
            tail: None,
            cursor: CursorState::Unset,
            len: 0,
        }
    }

    /// Returns the number of elements in the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// list.insert(1);
    /// list.insert(2);
    /// assert_eq!(list.size(), 2);
    /// ```
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Same as [`List::size`].
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.insert("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes all elements from the `List`, front to back, and unsets the
    /// cursor.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn clear(&mut self) {
        while let Some(head) = self.head {
            self.detach_node(head);
        }
        self.nodes.clear();
        self.cursor = CursorState::Unset;
        trace!("cleared list");
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
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// list.insert(1);
    /// list.insert(3);
    /// assert_eq!(list.last(), Ok(&3));
    /// ```
    pub fn insert(&mut self, value: T) {
        self.attach_node(self.tail, None, value);
        trace!("appended node, len = {}", self.len);
    }

    /// Inserts an element before the element currently at `index`. Inserting
    /// at `index == len` appends.
    ///
    /// If the cursor sits at or after `index`, its index moves up by one so it
    /// keeps pointing at the same element.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Errors
    ///
    /// Fails without touching the list if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.insert_at(10, 1).unwrap();
    /// assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 10, 2, 3]);
    ///
    /// assert!(list.insert_at(0, 5).is_err());
    /// ```
    pub fn insert_at(&mut self, value: T, index: usize) -> Result<()> {
        if index == self.len {
            self.insert(value);
            return Ok(());
        }
        let next = self
            .find_node(index)
            .ok_or_else(|| PreconditionViolation::new("insert_at"))?;
        let prev = self.nodes[next].prev;
        self.attach_node(prev, Some(next), value);
        self.cursor.node_inserted(index);
        trace!("inserted node at {}, len = {}", index, self.len);
        Ok(())
    }

    /// Removes the last element and returns it.
    ///
    /// If the cursor was on the removed element, it becomes unset.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Errors
    ///
    /// Fails if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.remove().is_err());
    ///
    /// list.insert(1);
    /// list.insert(3);
    /// assert_eq!(list.remove(), Ok(3));
    /// assert_eq!(list.remove(), Ok(1));
    /// assert!(list.remove().is_err());
    /// ```
    pub fn remove(&mut self) -> Result<T> {
        let tail = self
            .tail
            .ok_or_else(|| PreconditionViolation::new("remove"))?;
        Ok(self.remove_node(tail, self.len - 1))
    }

    /// Removes the element at `index` and returns it.
    ///
    /// If the cursor was on the removed element, it becomes unset; if it sat
    /// after `index`, its index moves down by one.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Errors
    ///
    /// Fails without touching the list if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.remove_at(0), Ok(1));
    /// assert_eq!(Vec::from_iter(list.iter().copied()), vec![2, 3]);
    /// assert!(list.remove_at(2).is_err());
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let node = self
            .find_node(index)
            .ok_or_else(|| PreconditionViolation::new("remove_at"))?;
        Ok(self.remove_node(node, index))
    }

    /// Provides a reference to the first element.
    ///
    /// # Errors
    ///
    /// Fails if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.first().is_err());
    ///
    /// list.insert(1);
    /// assert_eq!(list.first(), Ok(&1));
    /// ```
    pub fn first(&self) -> Result<&T> {
        self.head
            .map(|node| &self.nodes[node].value)
            .ok_or_else(|| PreconditionViolation::new("first"))
    }

    /// Provides a mutable reference to the first element.
    pub fn first_mut(&mut self) -> Result<&mut T> {
        let head = self
            .head
            .ok_or_else(|| PreconditionViolation::new("first_mut"))?;
        Ok(&mut self.nodes[head].value)
    }

    /// Provides a reference to the last element.
    ///
    /// # Errors
    ///
    /// Fails if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.last().is_err());
    ///
    /// list.insert(1);
    /// list.insert(2);
    /// assert_eq!(list.last(), Ok(&2));
    /// ```
    pub fn last(&self) -> Result<&T> {
        self.tail
            .map(|node| &self.nodes[node].value)
            .ok_or_else(|| PreconditionViolation::new("last"))
    }

    /// Provides a mutable reference to the last element.
    pub fn last_mut(&mut self) -> Result<&mut T> {
        let tail = self
            .tail
            .ok_or_else(|| PreconditionViolation::new("last_mut"))?;
        Ok(&mut self.nodes[tail].value)
    }

    /// Provides a reference to the element at `index`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Errors
    ///
    /// Fails if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.at(1), Ok(&2));
    /// assert!(list.at(3).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<&T> {
        self.find_node(index)
            .map(|node| &self.nodes[node].value)
            .ok_or_else(|| PreconditionViolation::new("at"))
    }

    /// Provides a mutable reference to the element at `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// *list.at_mut(2).unwrap() *= 5;
    /// assert_eq!(list.at(2), Ok(&15));
    /// ```
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let node = self
            .find_node(index)
            .ok_or_else(|| PreconditionViolation::new("at_mut"))?;
        Ok(&mut self.nodes[node].value)
    }

    /// Provides a forward iterator. Iterating does not move the cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let list = List::from_iter([0, 1, 2]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next_back(), Some(&2));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
