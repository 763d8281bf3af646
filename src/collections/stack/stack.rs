use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::Options;
use crate::collections::traits::Linked;
use crate::node::ids::IdSequence;
use crate::node::{Anchor, Detail, DetailRef, NodeManager, Singly, reachable};
use crate::size::{CapacityOverflow, CapacityUnderflow, MaxSize, SizeController, SizeMessages};
use crate::util::fmt::write_chain;
use crate::util::result::ResultExtension;

/// A last in, first out stack of singly linked nodes. The only anchor is `head`, the top of the
/// stack.
///
/// Callers hand over plain data; each element gets an id from a counter owned by the stack
/// (`"0"`, `"1"`, ...), which comes back with the data when it's popped.
///
/// | Method | Complexity |
/// |-|-|
/// | `push/pop/peek` | `O(1)` |
/// | `len` | `O(1)` cached, `O(n)` after a mutation |
/// | `get`, `has`, `find` | `O(n)` |
#[derive(Clone)]
pub struct Stack<D> {
    nodes: NodeManager<D, Singly>,
    size: SizeController<NodeManager<D, Singly>>,
    ids: IdSequence,
}

impl<D> Stack<D> {
    /// Creates an empty, unbounded stack.
    pub fn new() -> Stack<D> {
        Stack::with_options(Options::default())
    }

    pub fn with_max_size(max_size: impl Into<MaxSize>) -> Stack<D> {
        Stack::with_options(Options::with_max_size(max_size))
    }

    pub fn with_options(options: Options) -> Stack<D> {
        Stack {
            nodes: NodeManager::new(&[Anchor::Head], Anchor::Head),
            size: options.controller(reachable::<D, Singly, Anchor>),
            ids: IdSequence::new(),
        }
    }

    /// Pushes `data` onto the top of the stack.
    ///
    /// # Panics
    /// Panics if the stack is full.
    pub fn push(&mut self, data: D) -> &mut Stack<D> {
        self.try_push(data).throw()
    }

    pub fn try_push(&mut self, data: D) -> Result<&mut Stack<D>, CapacityOverflow> {
        self.size.assert_not_full(&self.nodes)?;

        let detail = Detail::new(self.ids.next_id(), data);
        self.size.mutate(&mut self.nodes, |nodes| {
            let top = nodes.anchors().get(Anchor::Head);
            let node = nodes.create_node(detail);
            nodes.set_next(node, top);
            nodes.anchors_mut().set(Anchor::Head, Some(node));
        });
        Ok(self)
    }

    /// Removes the top of the stack, if there is one.
    pub fn pop(&mut self) -> Option<Detail<D>> {
        let top = self.nodes.anchors().primary()?;

        self.size.mutate(&mut self.nodes, |nodes| {
            let below = nodes.next(top);
            nodes.anchors_mut().set(Anchor::Head, below);
            nodes.destroy(top)
        })
    }

    /// Like [`pop`](Stack::pop), but an empty stack is an error.
    pub fn try_pop(&mut self) -> Result<Detail<D>, CapacityUnderflow> {
        self.size.assert_not_empty(&self.nodes)?;
        self.pop().ok_or_else(|| self.size.underflow())
    }

    pub fn peek(&self) -> Option<DetailRef<'_, D>> {
        let top = self.nodes.anchors().primary()?;
        Some(self.nodes.node(top)?.detail())
    }

    /// Drops every element. Calling it on an empty stack does nothing.
    pub fn reset(&mut self) {
        self.size.mutate(&mut self.nodes, NodeManager::clear);
    }

    pub fn set_max_size(&mut self, max_size: impl Into<MaxSize>) {
        self.size.set_max_size(max_size);
    }

    pub fn set_messages(&mut self, messages: SizeMessages) {
        self.size.set_messages(messages);
    }

    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        self.nodes.verify_links(None);
    }
}

impl<D> Linked for Stack<D> {
    type Data = D;
    type Family = Singly;

    fn nodes(&self) -> &NodeManager<D, Singly> {
        &self.nodes
    }

    fn size_controller(&self) -> &SizeController<NodeManager<D, Singly>> {
        &self.size
    }
}

impl<D> Default for Stack<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pushes in iteration order, so the last item ends up on top.
impl<D> FromIterator<D> for Stack<D> {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<D> Extend<D> for Stack<D> {
    /// # Panics
    /// Panics if the stack fills up.
    fn extend<I: IntoIterator<Item = D>>(&mut self, iter: I) {
        for data in iter {
            self.push(data);
        }
    }
}

impl<D: PartialEq> PartialEq for Stack<D> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<D: Eq> Eq for Stack<D> {}

impl<D: Debug> Debug for Stack<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("size", &self.size())
            .finish()
    }
}

impl<D: Debug> Display for Stack<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_chain(f, self.iter())
    }
}
