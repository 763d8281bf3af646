use std::iter::FusedIterator;

use super::arena::Arena;
use super::{DetailRef, Link, Node, NodeKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Forward,
    Backward,
}

/// One step of a [`Traversal`].
#[derive(Debug)]
pub struct Visit<'a, D> {
    pub index: usize,
    pub key: NodeKey,
    pub node: &'a Node<D>,
}

impl<'a, D> Visit<'a, D> {
    pub fn detail(&self) -> DetailRef<'a, D> {
        self.node.base.detail()
    }
}

impl<D> Clone for Visit<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Visit<'_, D> {}

/// A lazy walk along one pointer field, starting from an anchor. It ends at an empty pointer, or
/// when the walk comes back around to the node it started on.
///
/// Every call to [`forward`](super::NodeManager::forward) or
/// [`backward`](super::NodeManager::backward) builds a new one, so walks never share a cursor.
#[derive(Debug)]
pub struct Traversal<'a, D> {
    arena: &'a Arena<D>,
    start: Link,
    curr: Link,
    index: usize,
    direction: Direction,
}

impl<'a, D> Traversal<'a, D> {
    pub(crate) const fn new(arena: &'a Arena<D>, start: Link, direction: Direction) -> Self {
        Traversal {
            arena,
            start,
            curr: start,
            index: 0,
            direction,
        }
    }
}

impl<'a, D> Iterator for Traversal<'a, D> {
    type Item = Visit<'a, D>;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.curr?;
        let Some(node) = self.arena.get(key) else {
            // Dangling link, stop rather than yield garbage.
            self.curr = None;
            return None;
        };

        let step = match self.direction {
            Direction::Forward => node.next,
            Direction::Backward => node.prev,
        };
        self.curr = step.filter(|next| Some(*next) != self.start);

        let visit = Visit {
            index: self.index,
            key,
            node,
        };
        self.index += 1;
        Some(visit)
    }
}

impl<D> FusedIterator for Traversal<'_, D> {}

impl<D> Clone for Traversal<'_, D> {
    fn clone(&self) -> Self {
        Traversal {
            arena: self.arena,
            start: self.start,
            curr: self.curr,
            index: self.index,
            direction: self.direction,
        }
    }
}
