//! Splicing helpers shared by every list operation that rewires nodes. They keep `next`, `prev`
//! and both anchors consistent; callers wrap them in the size controller's `mutate`.

use crate::node::{Anchor, Family, Link, NodeKey, NodeManager, Pointers};

/// The node whose `next` is `key`. Doubly linked nodes already know it, singly linked ones need a
/// walk from the head.
pub(super) fn predecessor<D, F: Family>(nodes: &NodeManager<D, F>, key: NodeKey) -> Link {
    if F::HAS_PREV {
        nodes.prev(key)
    } else if nodes.anchors().get(Anchor::Head) == Some(key) {
        None
    } else {
        nodes
            .walk()
            .find(|visit| visit.node.next() == Some(key))
            .map(|visit| visit.key)
    }
}

/// Places a detached node between `prev` and `next`, which must be adjacent. An empty side makes
/// the node that end of the list.
pub(super) fn link_between<D, F: Family>(
    nodes: &mut NodeManager<D, F>,
    prev: Link,
    key: NodeKey,
    next: Link,
) {
    nodes.set_pointers(key, Pointers::both(next, prev));

    match prev {
        Some(prev) => nodes.set_next(prev, Some(key)),
        None => nodes.anchors_mut().set(Anchor::Head, Some(key)),
    }
    match next {
        Some(next) => nodes.set_prev(next, Some(key)),
        None => nodes.anchors_mut().set(Anchor::Tail, Some(key)),
    }
}

/// Detaches a node and joins its neighbours around it. The node itself stays alive.
pub(super) fn unlink<D, F: Family>(nodes: &mut NodeManager<D, F>, key: NodeKey) {
    let prev = predecessor(nodes, key);
    let next = nodes.next(key);

    match prev {
        Some(prev) => nodes.set_next(prev, next),
        None => nodes.anchors_mut().set(Anchor::Head, next),
    }
    match next {
        Some(next) => nodes.set_prev(next, prev),
        None => nodes.anchors_mut().set(Anchor::Tail, prev),
    }

    nodes.set_pointers(key, Pointers::both(None, None));
}
