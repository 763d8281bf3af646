use std::fmt::Debug;

use derive_more::{Display, IsVariant};

use super::{Link, NodeKey};

/// Anything usable as the name of an anchor slot.
pub trait AnchorKey: Copy + Eq + Debug {}

impl<K: Copy + Eq + Debug> AnchorKey for K {}

/// The anchor names used by the structures in this crate.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Anchor {
    #[display("head")]
    Head,
    #[display("tail")]
    Tail,
}

/// A fixed, ordered set of named slots, each holding a node or nothing. The same node may sit in
/// several slots at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchors<K: AnchorKey> {
    slots: Box<[(K, Link)]>,
    primary: usize,
}

impl<K: AnchorKey> Anchors<K> {
    /// Creates an empty anchor set.
    ///
    /// # Panics
    /// Panics if `keys` is empty or doesn't contain `primary`.
    pub fn new(keys: &[K], primary: K) -> Anchors<K> {
        assert!(!keys.is_empty(), "an anchor set needs at least one key");
        let slots: Box<[(K, Link)]> = keys.iter().map(|key| (*key, None)).collect();
        let primary = slots
            .iter()
            .position(|(key, _)| *key == primary)
            .unwrap_or_else(|| panic!("primary anchor {primary:?} is not one of {keys:?}"));

        Anchors { slots, primary }
    }

    /// Returns the node in the slot, or `None` if it is empty or `key` isn't one of this set's
    /// keys.
    pub fn get(&self, key: K) -> Link {
        self.slots
            .iter()
            .find(|(slot, _)| *slot == key)
            .and_then(|(_, link)| *link)
    }

    /// # Panics
    /// Panics if `key` isn't one of this set's keys. The keys are fixed at creation.
    pub fn set(&mut self, key: K, link: Link) {
        match self.slots.iter_mut().find(|(slot, _)| *slot == key) {
            Some((_, slot_link)) => *slot_link = link,
            None => panic!("{key:?} is not an anchor of this set"),
        }
    }

    pub fn primary(&self) -> Link {
        self.slots[self.primary].1
    }

    pub fn primary_key(&self) -> K {
        self.slots[self.primary].0
    }

    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.slots.iter().map(|(key, _)| *key)
    }

    pub fn contains(&self, key: K) -> bool {
        self.slots.iter().any(|(slot, _)| *slot == key)
    }

    /// Returns true if `node` occupies any slot.
    pub fn holds(&self, node: NodeKey) -> bool {
        self.slots.iter().any(|(_, link)| *link == Some(node))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|(_, link)| link.is_none())
    }

    pub fn clear(&mut self) {
        for (_, link) in self.slots.iter_mut() {
            *link = None;
        }
    }
}
