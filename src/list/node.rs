use std::mem;
use std::ops::{Index, IndexMut};

/// A stable handle to a node stored in [`Nodes`].
///
/// Handles stay valid until the node is released, no matter how the
/// surrounding nodes are relinked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeRef(usize);

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: Option<NodeRef>,
    pub(crate) next: Option<NodeRef>,
}

enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

/// Slot arena owning every node of a list.
///
/// Vacant slots are chained into a free list and reused before the arena
/// grows, so allocating and releasing a node are both *O*(1).
pub(crate) struct Nodes<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
}

impl<T> Nodes<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: None,
        }
    }

    /// Store `node` and return its handle.
    pub(crate) fn alloc(&mut self, node: Node<T>) -> NodeRef {
        match self.free {
            Some(slot) => {
                let vacant = mem::replace(&mut self.slots[slot], Slot::Occupied(node));
                self.free = match vacant {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free list points to an occupied slot"),
                };
                NodeRef(slot)
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeRef(self.slots.len() - 1)
            }
        }
    }

    /// Take the node out of the arena, leaving its slot vacant.
    ///
    /// The handle must not be used again afterwards.
    pub(crate) fn release(&mut self, node: NodeRef) -> Node<T> {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match mem::replace(&mut self.slots[node.0], vacant) {
            Slot::Occupied(released) => {
                self.free = Some(node.0);
                released
            }
            Slot::Vacant { .. } => unreachable!("released a vacant slot"),
        }
    }

    /// Drop every slot and forget the free list.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
    }
}

impl<T> Index<NodeRef> for Nodes<T> {
    type Output = Node<T>;

    fn index(&self, node: NodeRef) -> &Node<T> {
        match &self.slots[node.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling node handle"),
        }
    }
}

impl<T> IndexMut<NodeRef> for Nodes<T> {
    fn index_mut(&mut self, node: NodeRef) -> &mut Node<T> {
        match &mut self.slots[node.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling node handle"),
        }
    }
}
