#![cfg(test)]

use super::*;
use crate::collections::traits::Linked;
use crate::node::{Anchor, Detail, Family, NodeKind, Singly};
use crate::size::MaxSize;
use crate::util::alloc::CountedDrop;
use crate::util::error::{DuplicateId, InsertError, MissingNode};
use crate::util::panic::assert_panics;

fn ids<D, F: Family>(list: &LinkedList<D, F>) -> Vec<&str> {
    list.iter().map(|detail| detail.id).collect()
}

fn abc() -> LinkedList<u32> {
    [("a", 1_u32), ("b", 2), ("c", 3)].into_iter().collect()
}

#[test]
fn test_insert_before() {
    let mut list = LinkedList::<u32>::new();
    list.insert_tail(("a", 1)).insert_tail(("b", 2));
    list.insert_before(("c", 3), "b");
    list.verify_links();

    assert_eq!(ids(&list), ["a", "c", "b"]);
    assert_eq!(
        list.backward().map(|d| d.id).collect::<Vec<_>>(),
        ["b", "c", "a"],
        "Backward traversal should mirror the forward one."
    );
    assert_eq!(list.forward().map(|d| *d.data).collect::<Vec<_>>(), [1, 3, 2]);
}

#[test]
fn test_insert_ends() {
    let mut list = LinkedList::<char>::new();
    list.insert_head(("b", 'b')).insert_head(("a", 'a')).insert_tail(("c", 'c'));
    list.verify_links();
    assert_eq!(ids(&list), ["a", "b", "c"]);

    list.insert_after(("d", 'd'), "c");
    list.insert_before(("z", 'z'), "a");
    list.verify_links();
    assert_eq!(ids(&list), ["z", "a", "b", "c", "d"], "New ends should update the anchors.");
}

#[test]
fn test_insert_at() {
    let mut list = abc();
    list.insert_at(("x", 0), 0).insert_at(("y", 0), 2).insert_at(("z", 0), 5);
    list.verify_links();
    assert_eq!(ids(&list), ["x", "a", "y", "b", "c", "z"]);

    let error = list.try_insert_at(("w", 0), 7).unwrap_err();
    assert!(error.is_index_out_of_bounds());
    assert_eq!(list.len(), 6, "A failed insert shouldn't change the list.");
}

#[test]
fn test_round_trip() {
    let mut list = LinkedList::<Vec<u8>>::new();
    let detail = Detail::new("k", vec![1_u8, 2]);
    list.insert_tail(detail.clone());

    assert_eq!(list.get_by_id("k").map(|d| d.cloned()), Some(detail.clone()));
    assert_eq!(list.extract("k"), Some(detail), "Extracting should hand back the same detail.");
    assert!(list.is_empty());
}

#[test]
fn test_insert_errors() {
    let mut list = abc();

    assert_eq!(
        list.try_insert_tail(("b", 9)).unwrap_err(),
        InsertError::DuplicateId(DuplicateId { id: String::from("b") })
    );
    assert_eq!(
        list.try_insert_before(("d", 4), "q").unwrap_err(),
        InsertError::MissingNode(MissingNode { id: String::from("q") })
    );
    assert!(list.try_insert_after(("d", 4), "q").is_err());
    assert_eq!(ids(&list), ["a", "b", "c"], "Failed inserts shouldn't change the list.");

    list.set_max_size(MaxSize::Limited(3));
    let error = list.try_insert_before(("b", 9), "q").unwrap_err();
    assert!(error.is_capacity_overflow(), "Capacity is checked before ids and targets.");

    assert_panics!({ list.insert_head(("d", 4)); }, "insert_head should panic on a full list.");
    assert_panics!({ abc().insert_head(("a", 4)); }, "insert_head should panic on a duplicate.");
}

#[test]
fn test_append_prepend() {
    let mut list = abc();
    list.append([("d", 4), ("e", 5)]);
    list.prepend([("x", 0), ("y", 0)]);
    list.verify_links();
    assert_eq!(ids(&list), ["x", "y", "a", "b", "c", "d", "e"]);

    assert!(list.try_append([("f", 6), ("f", 7)]).unwrap_err().is_duplicate_id());
    assert!(list.try_prepend([("g", 6), ("a", 7)]).unwrap_err().is_duplicate_id());
    assert_eq!(list.len(), 7, "A rejected batch shouldn't insert anything.");

    list.set_max_size(MaxSize::Limited(8));
    assert!(list.try_append([("f", 6), ("g", 7)]).unwrap_err().is_capacity_overflow());
    assert!(list.try_append(Vec::<Detail<u32>>::new()).is_ok());
    assert!(list.try_append([("f", 6)]).is_ok());
    assert_eq!(list.len(), 8);
}

#[test]
fn test_pop() {
    let mut list = abc();

    assert_eq!(list.pop_tail().map(|d| d.data), Some(3));
    assert_eq!(list.pop_head().map(|d| d.data), Some(1));
    list.verify_links();
    assert_eq!(list.try_pop_tail().map(|d| d.data), Ok(2));
    assert!(list.nodes().anchors().is_empty(), "Both anchors should be cleared.");

    assert_eq!(list.pop_head(), None);
    assert!(list.try_pop_head().is_err());
    assert!(list.try_pop_tail().is_err());
}

#[test]
fn test_extract() {
    let mut list = abc();

    assert_eq!(list.extract(1_usize).map(|d| d.id), Some(String::from("b")));
    list.verify_links();
    assert_eq!(list.extract("b"), None, "Extracting a missing id is a miss.");
    assert_eq!(list.extract(5_usize), None, "Extracting past the end is a miss.");

    assert_eq!(list.extract_where(|d| *d.data > 2).map(|d| d.data), Some(3));
    assert_eq!(list.extract_where(|d| *d.data > 2), None);
    list.verify_links();
    assert_eq!(ids(&list), ["a"]);
    let anchors = list.nodes().anchors();
    assert_eq!(
        anchors.get(Anchor::Head),
        anchors.get(Anchor::Tail),
        "One element is both head and tail."
    );
}

#[test]
fn test_move_node() {
    let mut list = abc();
    assert!(list.move_node("a", "b", Position::After));
    list.verify_links();
    assert_eq!(ids(&list), ["b", "a", "c"]);

    assert!(list.move_node("b", "c", Position::After), "Moving to the tail should work.");
    list.verify_links();
    assert_eq!(ids(&list), ["a", "c", "b"]);

    assert!(list.move_node("b", 0_usize, Position::Before), "Locators can be indices.");
    list.verify_links();
    assert_eq!(ids(&list), ["b", "a", "c"]);

    assert!(!list.move_node("a", "a", Position::Before), "Moving onto itself is a no-op.");
    assert!(!list.move_node("q", "a", Position::Before), "A missing source is a no-op.");
    assert!(!list.move_node("a", "q", Position::Before), "A missing target is a no-op.");
    assert_eq!(ids(&list), ["b", "a", "c"]);
    assert_eq!(list.len(), 3, "No-op moves shouldn't lose nodes.");
}

#[test]
fn test_set_data() {
    let mut list = abc();

    assert_eq!(list.set_data("b", 20), Some(2));
    assert_eq!(list.set_data(5_usize, 0), None);
    if let Some(data) = list.data_mut(0_usize) {
        *data += 10;
    }
    assert_eq!(list.map(|d| *d.data), [11, 20, 3]);
    assert_eq!(ids(&list), ["a", "b", "c"], "Ids and order should stay put.");
}

#[test]
fn test_singly() {
    let mut list = LinkedList::<char, Singly>::default();
    assert_eq!(list.kind(), NodeKind::Singly);

    list.insert_tail(("a", 'a')).insert_tail(("c", 'c'));
    list.insert_before(("b", 'b'), "c");
    list.insert_at(("z", 'z'), 0);
    list.verify_links();
    assert_eq!(ids(&list), ["z", "a", "b", "c"]);

    assert!(list.move_node("z", "c", Position::After));
    list.verify_links();
    assert_eq!(ids(&list), ["a", "b", "c", "z"]);

    assert_eq!(list.pop_tail().map(|d| d.data), Some('z'));
    assert_eq!(list.extract("b").map(|d| d.data), Some('b'));
    list.verify_links();
    assert_eq!(list.to_string(), "(a: 'a') -> (c: 'c')");
}

#[test]
fn test_reset() {
    let counter = CountedDrop::counter();
    let mut list = LinkedList::<CountedDrop>::new();
    for id in ["a", "b", "c"] {
        list.insert_tail((id, CountedDrop::new(&counter)));
    }

    drop(list.extract("b"));
    assert_eq!(counter.get(), 1, "An extracted detail should be dropped with its owner.");

    list.reset();
    assert_eq!(counter.get(), 3, "Reset should drop every element.");
    assert!(list.is_empty());
    list.reset();
    assert!(list.is_empty(), "Resetting twice should be the same as once.");

    list.insert_tail(("a", CountedDrop::new(&counter)));
    list.verify_links();
    assert_eq!(list.len(), 1, "Ids should be free again after a reset.");
}

#[test]
fn test_iteration_and_format() {
    let list = abc();

    assert_eq!(list.to_string(), "(a: 1) -> (b: 2) -> (c: 3)");
    assert_eq!(list.clone(), list);
    assert_ne!(list, [("a", 1), ("b", 2)].into_iter().collect::<LinkedList<u32>>());
    assert_eq!((&list).into_iter().count(), 3);

    let mut owned = list.into_iter();
    assert_eq!(owned.len(), 3);
    assert_eq!(owned.next_back().map(|d| d.data), Some(3));
    assert_eq!(owned.map(|d| d.data).collect::<Vec<_>>(), [1, 2]);
}
