#![cfg(test)]

use super::*;
use crate::util::panic::assert_panics;

fn ids<D>(visits: Traversal<'_, D>) -> Vec<String> {
    visits.map(|visit| visit.node.id().to_owned()).collect()
}

/// Links `a <-> b <-> c` by hand, with head on `a` and tail on `c`.
fn chain() -> (NodeManager<u32, Doubly>, [NodeKey; 3]) {
    let mut nodes = NodeManager::new(&[Anchor::Head, Anchor::Tail], Anchor::Head);
    let a = nodes.create_node(Detail::new("a", 1));
    let b = nodes.create_node(Detail::new("b", 2));
    let c = nodes.create_node(Detail::new("c", 3));

    nodes.set_pointers(a, Pointers::both(Some(b), None));
    nodes.set_pointers(b, Pointers::both(Some(c), Some(a)));
    nodes.set_pointers(c, Pointers::both(None, Some(b)));
    nodes.anchors_mut().set(Anchor::Head, Some(a));
    nodes.anchors_mut().set(Anchor::Tail, Some(c));

    (nodes, [a, b, c])
}

#[test]
fn test_base_node() {
    let mut node = BaseNode::new("n", vec![1]);
    assert_eq!(node.id(), "n");
    node.data_mut().push(2);
    assert_eq!(node.set_data(vec![3]), vec![1, 2], "set_data should hand back the old data.");
    assert_eq!(node.detail(), Detail::new("n", vec![3]));
    assert_eq!(
        node.destroy(),
        Detail::new("n", vec![3]),
        "Destroying should give up the id and data."
    );
}

#[test]
fn test_family() {
    let singly = NodeManager::<(), Singly>::new(&[Anchor::Head], Anchor::Head);
    let doubly = NodeManager::<(), Doubly>::new(&[Anchor::Head], Anchor::Head);

    assert_eq!(singly.kind(), NodeKind::Singly);
    assert_eq!(singly.pointer_keys(), &[Pointer::Next]);
    assert_eq!(doubly.kind(), NodeKind::Doubly);
    assert_eq!(doubly.pointer_keys(), &[Pointer::Next, Pointer::Prev]);
    assert_eq!(doubly.kind().to_string(), "doubly");
}

#[test]
fn test_create_node() {
    let mut nodes = NodeManager::<u32, Singly>::new(&[Anchor::Head], Anchor::Head);
    let key = nodes.create_node(Detail::new("a", 1));

    let node = nodes.node(key).expect("node should exist after creation");
    assert_eq!((node.id(), *node.data()), ("a", 1));
    assert_eq!((node.next(), node.prev()), (None, None), "New nodes have empty pointers.");
    assert!(
        nodes.anchors().is_empty(),
        "Creating a node shouldn't place it in an anchor."
    );
    assert_eq!(reachable(&nodes), 0, "An unanchored node isn't reachable.");
    assert_eq!(live(&nodes), 1, "An unanchored node is still live.");
}

#[test]
fn test_anchors() {
    let mut anchors = Anchors::new(&[Anchor::Head, Anchor::Tail], Anchor::Tail);
    assert_eq!(anchors.primary_key(), Anchor::Tail);
    assert_eq!(anchors.keys().collect::<Vec<_>>(), [Anchor::Head, Anchor::Tail]);

    let mut nodes = NodeManager::<(), Singly>::new(&[Anchor::Head], Anchor::Head);
    let key = nodes.create_node(Detail::new("x", ()));

    anchors.set(Anchor::Head, Some(key));
    anchors.set(Anchor::Tail, Some(key));
    assert_eq!(anchors.primary(), Some(key));
    assert!(anchors.holds(key), "One node may sit in several anchors.");

    anchors.clear();
    assert!(anchors.is_empty());

    let mut heads = Anchors::new(&[Anchor::Head], Anchor::Head);
    assert_eq!(heads.get(Anchor::Tail), None, "Unknown keys read as empty.");
    assert!(!heads.contains(Anchor::Tail));
    assert_panics!({ heads.set(Anchor::Tail, None) }, "Unknown keys can't be written.");
    assert_panics!({ Anchors::<Anchor>::new(&[], Anchor::Head) });
    assert_panics!({ Anchors::new(&[Anchor::Head], Anchor::Tail) });
}

#[test]
fn test_custom_anchor_keys() {
    let mut nodes = NodeManager::<u8, Singly, &str>::new(&["top", "mark"], "mark");
    let key = nodes.create_node(Detail::new("only", 0));
    nodes.anchors_mut().set("mark", Some(key));

    assert_eq!(nodes.anchors().primary_key(), "mark");
    assert_eq!(ids(nodes.walk()), ["only"]);
    assert_eq!(nodes.forward("top").count(), 0);
}

#[test]
fn test_set_pointer_is_one_sided() {
    let mut nodes = NodeManager::<u32, Doubly>::new(&[Anchor::Head], Anchor::Head);
    let a = nodes.create_node(Detail::new("a", 1));
    let b = nodes.create_node(Detail::new("b", 2));

    nodes.set_next(a, Some(b));
    assert_eq!(nodes.next(a), Some(b));
    assert_eq!(
        nodes.prev(b),
        None,
        "The manager shouldn't maintain the inverse pointer."
    );

    nodes.set_pointers(b, Pointers::prev(Some(a)));
    assert_eq!(nodes.prev(b), Some(a));
    assert_eq!(nodes.next(b), None, "Untouched pointers should be left alone.");
}

#[test]
fn test_singly_has_no_prev() {
    let mut nodes = NodeManager::<u32, Singly>::new(&[Anchor::Head], Anchor::Head);
    let a = nodes.create_node(Detail::new("a", 1));
    let b = nodes.create_node(Detail::new("b", 2));

    nodes.set_pointers(b, Pointers::both(None, Some(a)));
    assert_eq!(nodes.prev(b), None, "Prev writes are ignored for singly nodes.");
}

#[test]
fn test_traversal() {
    let (nodes, [a, _, c]) = chain();

    let visits: Vec<_> = nodes.forward(Anchor::Head).map(|v| (v.index, v.key)).collect();
    assert_eq!(visits.len(), 3);
    assert_eq!(visits[0], (0, a));
    assert_eq!(visits[2], (2, c));

    assert_eq!(ids(nodes.forward(Anchor::Head)), ["a", "b", "c"]);
    assert_eq!(ids(nodes.backward(Anchor::Tail)), ["c", "b", "a"]);
    assert_eq!(ids(nodes.forward(Anchor::Tail)), ["c"]);

    let walk = nodes.walk();
    assert_eq!(ids(walk.clone()), ids(walk), "Traversals should be restartable.");
    assert_eq!(reachable(&nodes), 3);
}

#[test]
fn test_traversal_stops_on_ring() {
    let mut nodes = NodeManager::<u32, Singly>::new(&[Anchor::Head, Anchor::Tail], Anchor::Head);
    let a = nodes.create_node(Detail::new("a", 1));
    let b = nodes.create_node(Detail::new("b", 2));
    nodes.set_next(a, Some(b));
    nodes.set_next(b, Some(a));
    nodes.anchors_mut().set(Anchor::Head, Some(a));

    assert_eq!(ids(nodes.walk()), ["a", "b"], "A ring should be walked once.");

    nodes.set_next(a, Some(a));
    assert_eq!(ids(nodes.walk()), ["a"], "A node pointing at itself is a ring of one.");
}

#[test]
fn test_destroy() {
    let (mut nodes, [a, b, c]) = chain();

    let detail = nodes.destroy(b);
    assert_eq!(detail, Some(Detail::new("b", 2)));
    assert!(!nodes.contains(b), "Destroyed keys shouldn't resolve.");
    assert_eq!(nodes.destroy(b), None, "Destroying twice is a miss.");
    assert_eq!(
        ids(nodes.walk()),
        ["a"],
        "A walk should stop at a pointer to a destroyed node."
    );

    let d = nodes.create_node(Detail::new("d", 4));
    assert_eq!(d.index, b.index, "Freed slots should be reused.");
    assert_ne!(d, b, "A reused slot should get a fresh key.");
    assert!(!nodes.contains(b));

    nodes.set_next(b, Some(c));
    assert_eq!(nodes.next(d), None, "Writes through a stale key should do nothing.");
    assert_eq!(nodes.len(), 3);
    assert!(nodes.contains(a));
}

#[test]
fn test_data_access() {
    let (mut nodes, [a, _, _]) = chain();

    *nodes.data_mut(a).expect("a is live") += 10;
    assert_eq!(nodes.set_data(a, 100), Some(11));
    assert_eq!(nodes.node(a).map(|node| *node.data()), Some(100));
    assert_eq!(nodes.find("c").and_then(|key| nodes.node(key)).map(|n| *n.data()), Some(3));
    assert_eq!(nodes.find("zzz"), None);
}

#[test]
fn test_clear() {
    let (mut nodes, [a, _, _]) = chain();
    nodes.clear();

    assert!(nodes.anchors().is_empty());
    assert!(nodes.is_empty());
    assert_eq!(nodes.walk().count(), 0);
    assert_eq!(nodes.node(a), None);

    let fresh = nodes.create_node(Detail::new("d", 4));
    assert_ne!(fresh, a, "Cleared slots should be reused under a new generation.");
    assert_eq!(nodes.node(a), None, "Keys from before a clear should stay dead.");
    assert_eq!(nodes.len(), 1);
}
