use std::ops::Deref;

use super::{BaseNode, Detail};

/// A stable handle to a node inside a [`NodeManager`](super::NodeManager). Keys stand in for
/// pointers; once the node is destroyed its key never resolves again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKey {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

pub type Link = Option<NodeKey>;

/// A [`BaseNode`] plus its pointer fields. Singly linked nodes never have `prev` set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<D> {
    pub(crate) base: BaseNode<D>,
    pub(crate) next: Link,
    pub(crate) prev: Link,
}

impl<D> Node<D> {
    pub(crate) fn detached(detail: Detail<D>) -> Node<D> {
        Node {
            base: detail.into(),
            next: None,
            prev: None,
        }
    }

    pub const fn next(&self) -> Link {
        self.next
    }

    pub const fn prev(&self) -> Link {
        self.prev
    }

    pub const fn base(&self) -> &BaseNode<D> {
        &self.base
    }
}

impl<D> Deref for Node<D> {
    type Target = BaseNode<D>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}
