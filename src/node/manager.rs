use std::marker::PhantomData;

use super::arena::Arena;
use super::iter::{Direction, Traversal};
use super::{Anchor, AnchorKey, Anchors, Detail, Doubly, Family, Link, Node, NodeKey, NodeKind, Pointer};

/// A pointer update for [`NodeManager::set_pointers`]. Fields left as `None` are not touched;
/// `Some(None)` clears the pointer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Pointers {
    pub next: Option<Link>,
    pub prev: Option<Link>,
}

impl Pointers {
    pub const fn next(next: Link) -> Pointers {
        Pointers {
            next: Some(next),
            prev: None,
        }
    }

    pub const fn prev(prev: Link) -> Pointers {
        Pointers {
            next: None,
            prev: Some(prev),
        }
    }

    pub const fn both(next: Link, prev: Link) -> Pointers {
        Pointers {
            next: Some(next),
            prev: Some(prev),
        }
    }
}

/// Creates nodes of one [`Family`] and tracks a fixed set of named anchors pointing into them.
///
/// The manager is a primitive. It writes exactly the pointer it is asked to write and never
/// maintains the inverse link of a doubly linked pair, nor does it keep anchors in sync with
/// destroyed nodes. Structures built on top of it own those invariants.
///
/// Every node lives in an arena owned by the manager and is addressed by a [`NodeKey`]. Keys from
/// one manager mean nothing to another.
#[derive(Debug, Clone)]
pub struct NodeManager<D, F: Family, K: AnchorKey = Anchor> {
    arena: Arena<D>,
    anchors: Anchors<K>,
    _family: PhantomData<F>,
}

impl<D, F: Family, K: AnchorKey> NodeManager<D, F, K> {
    /// Creates a manager with every anchor in `anchor_keys` empty.
    ///
    /// # Panics
    /// Panics if `anchor_keys` is empty or doesn't contain `primary`.
    pub fn new(anchor_keys: &[K], primary: K) -> NodeManager<D, F, K> {
        NodeManager {
            arena: Arena::new(),
            anchors: Anchors::new(anchor_keys, primary),
            _family: PhantomData,
        }
    }

    pub const fn kind(&self) -> NodeKind {
        F::KIND
    }

    pub const fn pointer_keys(&self) -> &'static [Pointer] {
        F::POINTERS
    }

    /// Builds a node with empty pointers. It isn't placed in any anchor.
    pub fn create_node(&mut self, detail: Detail<D>) -> NodeKey {
        self.arena.insert(Node::detached(detail))
    }

    pub fn node(&self, key: NodeKey) -> Option<&Node<D>> {
        self.arena.get(key)
    }

    pub fn contains(&self, key: NodeKey) -> bool {
        self.arena.get(key).is_some()
    }

    pub fn data_mut(&mut self, key: NodeKey) -> Option<&mut D> {
        Some(self.arena.get_mut(key)?.base.data_mut())
    }

    /// Replaces a node's payload, returning the old one.
    pub fn set_data(&mut self, key: NodeKey, data: D) -> Option<D> {
        Some(self.arena.get_mut(key)?.base.set_data(data))
    }

    pub fn next(&self, key: NodeKey) -> Link {
        self.arena.get(key)?.next
    }

    pub fn prev(&self, key: NodeKey) -> Link {
        self.arena.get(key)?.prev
    }

    /// Does nothing if `key` doesn't resolve to a live node.
    pub fn set_next(&mut self, key: NodeKey, next: Link) {
        self.set_pointers(key, Pointers::next(next));
    }

    /// Singly linked nodes have no `prev` field, so this does nothing for them.
    pub fn set_prev(&mut self, key: NodeKey, prev: Link) {
        self.set_pointers(key, Pointers::prev(prev));
    }

    pub fn set_pointers(&mut self, key: NodeKey, pointers: Pointers) {
        let Some(node) = self.arena.get_mut(key) else {
            return;
        };
        if let Some(next) = pointers.next {
            node.next = next;
        }
        if let (true, Some(prev)) = (F::HAS_PREV, pointers.prev) {
            node.prev = prev;
        }
    }

    /// Removes the node from the arena and hands back its detail. Its key, and any pointer or
    /// anchor still holding that key, stops resolving.
    pub fn destroy(&mut self, key: NodeKey) -> Option<Detail<D>> {
        Some(self.arena.remove(key)?.base.destroy())
    }

    pub const fn anchors(&self) -> &Anchors<K> {
        &self.anchors
    }

    pub const fn anchors_mut(&mut self) -> &mut Anchors<K> {
        &mut self.anchors
    }

    /// Walks `next` pointers from the node in `anchor`.
    pub fn forward(&self, anchor: K) -> Traversal<'_, D> {
        self.forward_from(self.anchors.get(anchor))
    }

    pub fn forward_from(&self, start: Link) -> Traversal<'_, D> {
        Traversal::new(&self.arena, start, Direction::Forward)
    }

    /// Walks forward from the primary anchor.
    pub fn walk(&self) -> Traversal<'_, D> {
        self.forward_from(self.anchors.primary())
    }

    /// Returns the first node reachable from the primary anchor with the given id.
    pub fn find(&self, id: &str) -> Option<NodeKey> {
        self.walk().find(|visit| visit.node.id() == id).map(|visit| visit.key)
    }

    /// The number of live nodes, whether reachable or not.
    pub const fn len(&self) -> usize {
        self.arena.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    /// Empties every anchor and drops every node.
    pub fn clear(&mut self) {
        self.anchors.clear();
        self.arena.clear();
    }

    /// Panics unless every live node is reachable from the primary anchor, `tail` (if given) holds
    /// the last of them, and for doubly linked nodes each `prev` points back at its predecessor.
    #[cfg(test)]
    pub(crate) fn verify_links(&self, tail: Option<K>) {
        let mut prev = None;
        let mut count = 0;
        for visit in self.walk() {
            if F::HAS_PREV {
                assert_eq!(visit.node.prev, prev, "prev should point back at the previous node");
            }
            prev = Some(visit.key);
            count += 1;
        }
        assert_eq!(count, self.len(), "every live node should be reachable");
        if let Some(tail) = tail {
            assert_eq!(self.anchors.get(tail), prev, "tail should hold the last reachable node");
        }
    }
}

impl<D, K: AnchorKey> NodeManager<D, Doubly, K> {
    /// Walks `prev` pointers from the node in `anchor`.
    pub fn backward(&self, anchor: K) -> Traversal<'_, D> {
        self.backward_from(self.anchors.get(anchor))
    }

    pub fn backward_from(&self, start: Link) -> Traversal<'_, D> {
        Traversal::new(&self.arena, start, Direction::Backward)
    }
}

/// Counts the nodes reachable from the primary anchor. This is the size calculation every
/// structure in this crate starts with.
pub fn reachable<D, F: Family, K: AnchorKey>(nodes: &NodeManager<D, F, K>) -> usize {
    nodes.walk().count()
}

/// Reads the manager's live node counter instead of walking.
pub fn live<D, F: Family, K: AnchorKey>(nodes: &NodeManager<D, F, K>) -> usize {
    nodes.len()
}
