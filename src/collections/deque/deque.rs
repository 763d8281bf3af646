use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::Options;
use crate::collections::traits::{Details, Linked};
use crate::node::ids::IdSequence;
use crate::node::{Anchor, Detail, DetailRef, Doubly, NodeManager, reachable};
use crate::size::{CapacityOverflow, CapacityUnderflow, MaxSize, SizeController, SizeMessages};
use crate::util::fmt::write_chain;
use crate::util::result::ResultExtension;

/// A double ended queue of doubly linked nodes, anchored at `head` and `tail`. Elements can join
/// and leave at either end in `O(1)`.
///
/// Every push and pop updates both directions of the links it touches, so walking from either
/// anchor always sees the same elements.
#[derive(Clone)]
pub struct Deque<D> {
    nodes: NodeManager<D, Doubly>,
    size: SizeController<NodeManager<D, Doubly>>,
    ids: IdSequence,
}

impl<D> Deque<D> {
    pub fn new() -> Deque<D> {
        Deque::with_options(Options::default())
    }

    pub fn with_max_size(max_size: impl Into<MaxSize>) -> Deque<D> {
        Deque::with_options(Options::with_max_size(max_size))
    }

    pub fn with_options(options: Options) -> Deque<D> {
        Deque {
            nodes: NodeManager::new(&[Anchor::Head, Anchor::Tail], Anchor::Head),
            size: options.controller(reachable::<D, Doubly, Anchor>),
            ids: IdSequence::new(),
        }
    }

    /// # Panics
    /// Panics if the deque is full.
    pub fn push_head(&mut self, data: D) -> &mut Deque<D> {
        self.try_push_head(data).throw()
    }

    pub fn try_push_head(&mut self, data: D) -> Result<&mut Deque<D>, CapacityOverflow> {
        self.try_push(Anchor::Head, data)
    }

    /// # Panics
    /// Panics if the deque is full.
    pub fn push_tail(&mut self, data: D) -> &mut Deque<D> {
        self.try_push_tail(data).throw()
    }

    pub fn try_push_tail(&mut self, data: D) -> Result<&mut Deque<D>, CapacityOverflow> {
        self.try_push(Anchor::Tail, data)
    }

    pub fn pop_head(&mut self) -> Option<Detail<D>> {
        self.pop(Anchor::Head)
    }

    pub fn try_pop_head(&mut self) -> Result<Detail<D>, CapacityUnderflow> {
        self.size.assert_not_empty(&self.nodes)?;
        self.pop_head().ok_or_else(|| self.size.underflow())
    }

    pub fn pop_tail(&mut self) -> Option<Detail<D>> {
        self.pop(Anchor::Tail)
    }

    pub fn try_pop_tail(&mut self) -> Result<Detail<D>, CapacityUnderflow> {
        self.size.assert_not_empty(&self.nodes)?;
        self.pop_tail().ok_or_else(|| self.size.underflow())
    }

    pub fn peek_head(&self) -> Option<DetailRef<'_, D>> {
        self.peek(Anchor::Head)
    }

    pub fn peek_tail(&self) -> Option<DetailRef<'_, D>> {
        self.peek(Anchor::Tail)
    }

    /// Iterates from tail to head.
    pub fn iter_rev(&self) -> Details<'_, D> {
        Details(self.nodes.backward(Anchor::Tail))
    }

    /// Drops every element. Calling it on an empty deque does nothing.
    pub fn reset(&mut self) {
        self.size.mutate(&mut self.nodes, NodeManager::clear);
    }

    pub fn set_max_size(&mut self, max_size: impl Into<MaxSize>) {
        self.size.set_max_size(max_size);
    }

    pub fn set_messages(&mut self, messages: SizeMessages) {
        self.size.set_messages(messages);
    }

    fn try_push(&mut self, end: Anchor, data: D) -> Result<&mut Deque<D>, CapacityOverflow> {
        self.size.assert_not_full(&self.nodes)?;

        let detail = Detail::new(self.ids.next_id(), data);
        self.size.mutate(&mut self.nodes, |nodes| {
            let node = nodes.create_node(detail);
            let Some(old) = nodes.anchors().get(end) else {
                nodes.anchors_mut().set(Anchor::Head, Some(node));
                nodes.anchors_mut().set(Anchor::Tail, Some(node));
                return;
            };

            match end {
                Anchor::Head => {
                    nodes.set_next(node, Some(old));
                    nodes.set_prev(old, Some(node));
                },
                Anchor::Tail => {
                    nodes.set_prev(node, Some(old));
                    nodes.set_next(old, Some(node));
                },
            }
            nodes.anchors_mut().set(end, Some(node));
        });
        Ok(self)
    }

    fn pop(&mut self, end: Anchor) -> Option<Detail<D>> {
        let node = self.nodes.anchors().get(end)?;

        self.size.mutate(&mut self.nodes, |nodes| {
            let inward = match end {
                Anchor::Head => nodes.next(node),
                Anchor::Tail => nodes.prev(node),
            };

            match inward {
                Some(inward) => {
                    match end {
                        Anchor::Head => nodes.set_prev(inward, None),
                        Anchor::Tail => nodes.set_next(inward, None),
                    }
                    nodes.anchors_mut().set(end, Some(inward));
                },
                None => nodes.anchors_mut().clear(),
            }
            nodes.destroy(node)
        })
    }

    fn peek(&self, end: Anchor) -> Option<DetailRef<'_, D>> {
        let node = self.nodes.anchors().get(end)?;
        Some(self.nodes.node(node)?.detail())
    }

    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        self.nodes.verify_links(Some(Anchor::Tail));
    }
}

impl<D> Linked for Deque<D> {
    type Data = D;
    type Family = Doubly;

    fn nodes(&self) -> &NodeManager<D, Doubly> {
        &self.nodes
    }

    fn size_controller(&self) -> &SizeController<NodeManager<D, Doubly>> {
        &self.size
    }
}

impl<D> Default for Deque<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pushes onto the tail in iteration order.
impl<D> FromIterator<D> for Deque<D> {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        let mut deque = Deque::new();
        deque.extend(iter);
        deque
    }
}

impl<D> Extend<D> for Deque<D> {
    /// # Panics
    /// Panics if the deque fills up.
    fn extend<I: IntoIterator<Item = D>>(&mut self, iter: I) {
        for data in iter {
            self.push_tail(data);
        }
    }
}

impl<D: PartialEq> PartialEq for Deque<D> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<D: Eq> Eq for Deque<D> {}

impl<D: Debug> Debug for Deque<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deque")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("size", &self.size())
            .finish()
    }
}

impl<D: Debug> Display for Deque<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_chain(f, self.iter())
    }
}
