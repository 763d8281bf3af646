use std::fmt::{self, Debug, Display, Formatter};

use derive_more::{Display, IsVariant};

use crate::collections::Options;
use crate::collections::traits::Linked;
use crate::node::ids::IdSequence;
use crate::node::{Anchor, Detail, DetailRef, NodeManager, Singly, reachable};
use crate::size::{CapacityOverflow, CapacityUnderflow, MaxSize, SizeController, SizeMessages};
use crate::util::fmt::write_chain;
use crate::util::result::ResultExtension;

/// How the tail of a [`Queue`] is linked.
#[derive(Debug, Display, Default, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum QueueKind {
    /// The tail's `next` is empty.
    #[default]
    #[display("queue")]
    Linear,
    /// The tail's `next` always points back at the head.
    #[display("circular queue")]
    Circular,
}

/// A first in, first out queue of singly linked nodes, anchored at `head` (the front, where
/// elements leave) and `tail` (the back, where they join).
///
/// A [`QueueKind::Circular`] queue closes the chain into a ring. Reads still visit each element
/// once, starting from the head.
///
/// As with [`Stack`](crate::collections::stack::Stack), ids are assigned by the queue.
#[derive(Clone)]
pub struct Queue<D> {
    kind: QueueKind,
    nodes: NodeManager<D, Singly>,
    size: SizeController<NodeManager<D, Singly>>,
    ids: IdSequence,
}

impl<D> Queue<D> {
    /// Creates an empty, unbounded, linear queue.
    pub fn new() -> Queue<D> {
        Queue::with_options(QueueKind::Linear, Options::default())
    }

    /// Creates an empty, unbounded, circular queue.
    pub fn circular() -> Queue<D> {
        Queue::with_options(QueueKind::Circular, Options::default())
    }

    pub fn with_max_size(kind: QueueKind, max_size: impl Into<MaxSize>) -> Queue<D> {
        Queue::with_options(kind, Options::with_max_size(max_size))
    }

    pub fn with_options(kind: QueueKind, options: Options) -> Queue<D> {
        Queue {
            kind,
            nodes: NodeManager::new(&[Anchor::Head, Anchor::Tail], Anchor::Head),
            size: options.controller(reachable::<D, Singly, Anchor>),
            ids: IdSequence::new(),
        }
    }

    pub const fn kind(&self) -> QueueKind {
        self.kind
    }

    /// Adds `data` to the back of the queue.
    ///
    /// # Panics
    /// Panics if the queue is full.
    pub fn enqueue(&mut self, data: D) -> &mut Queue<D> {
        self.try_enqueue(data).throw()
    }

    pub fn try_enqueue(&mut self, data: D) -> Result<&mut Queue<D>, CapacityOverflow> {
        self.size.assert_not_full(&self.nodes)?;

        let detail = Detail::new(self.ids.next_id(), data);
        let circular = self.kind.is_circular();
        self.size.mutate(&mut self.nodes, |nodes| {
            let node = nodes.create_node(detail);
            match nodes.anchors().get(Anchor::Tail) {
                Some(tail) => nodes.set_next(tail, Some(node)),
                None => nodes.anchors_mut().set(Anchor::Head, Some(node)),
            }
            nodes.anchors_mut().set(Anchor::Tail, Some(node));

            if circular {
                let head = nodes.anchors().get(Anchor::Head);
                nodes.set_next(node, head);
            }
        });
        Ok(self)
    }

    /// Removes the front of the queue, if there is one.
    pub fn dequeue(&mut self) -> Option<Detail<D>> {
        let head = self.nodes.anchors().get(Anchor::Head)?;
        let circular = self.kind.is_circular();

        self.size.mutate(&mut self.nodes, |nodes| {
            if nodes.anchors().get(Anchor::Tail) == Some(head) {
                nodes.anchors_mut().clear();
            } else {
                let next = nodes.next(head);
                nodes.anchors_mut().set(Anchor::Head, next);
                match nodes.anchors().get(Anchor::Tail) {
                    Some(tail) if circular => nodes.set_next(tail, next),
                    _ => {},
                }
            }
            nodes.destroy(head)
        })
    }

    /// Like [`dequeue`](Queue::dequeue), but an empty queue is an error.
    pub fn try_dequeue(&mut self) -> Result<Detail<D>, CapacityUnderflow> {
        self.size.assert_not_empty(&self.nodes)?;
        self.dequeue().ok_or_else(|| self.size.underflow())
    }

    /// The next element to be dequeued.
    pub fn peek(&self) -> Option<DetailRef<'_, D>> {
        let head = self.nodes.anchors().get(Anchor::Head)?;
        Some(self.nodes.node(head)?.detail())
    }

    /// The most recently enqueued element.
    pub fn peek_tail(&self) -> Option<DetailRef<'_, D>> {
        let tail = self.nodes.anchors().get(Anchor::Tail)?;
        Some(self.nodes.node(tail)?.detail())
    }

    /// Drops every element. Calling it on an empty queue does nothing.
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
        self.nodes.verify_links(Some(Anchor::Tail));

        let tail = self.nodes.anchors().get(Anchor::Tail);
        let tail_next = tail.and_then(|tail| self.nodes.next(tail));
        match self.kind {
            QueueKind::Linear => assert_eq!(tail_next, None, "tail should end the chain"),
            QueueKind::Circular => assert_eq!(
                tail_next,
                self.nodes.anchors().get(Anchor::Head),
                "tail should point back at head"
            ),
        }
    }
}

impl<D> Linked for Queue<D> {
    type Data = D;
    type Family = Singly;

    fn nodes(&self) -> &NodeManager<D, Singly> {
        &self.nodes
    }

    fn size_controller(&self) -> &SizeController<NodeManager<D, Singly>> {
        &self.size
    }
}

impl<D> Default for Queue<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a linear queue, enqueuing in iteration order.
impl<D> FromIterator<D> for Queue<D> {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<D> Extend<D> for Queue<D> {
    /// # Panics
    /// Panics if the queue fills up.
    fn extend<I: IntoIterator<Item = D>>(&mut self, iter: I) {
        for data in iter {
            self.enqueue(data);
        }
    }
}

/// Queues are equal when they hold the same details in the same order, whatever their kind.
impl<D: PartialEq> PartialEq for Queue<D> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<D: Eq> Eq for Queue<D> {}

impl<D: Debug> Debug for Queue<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("kind", &self.kind)
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("size", &self.size())
            .finish()
    }
}

impl<D: Debug> Display for Queue<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_chain(f, self.iter())?;
        if self.kind.is_circular() && !self.is_empty() {
            write!(f, " -> ...")?;
        }
        Ok(())
    }
}
