use std::mem;

use super::{Node, NodeKey};

/// Slot storage for nodes. Removed slots are threaded into a free list and reused, with the
/// generation bumped so that old keys stop resolving.
#[derive(Debug, Clone)]
pub(crate) struct Arena<D> {
    slots: Vec<Slot<D>>,
    free: Option<usize>,
    len: usize,
}

#[derive(Debug, Clone)]
enum Slot<D> {
    Occupied {
        generation: u32,
        node: Node<D>,
    },
    Vacant {
        generation: u32,
        next_free: Option<usize>,
    },
}

impl<D> Arena<D> {
    pub const fn new() -> Arena<D> {
        Arena {
            slots: Vec::new(),
            free: None,
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub fn insert(&mut self, node: Node<D>) -> NodeKey {
        self.len += 1;

        let reused = self.free.and_then(|index| match self.slots.get(index) {
            Some(Slot::Vacant { generation, next_free }) => Some((index, *generation, *next_free)),
            _ => None,
        });

        if let Some((index, generation, next_free)) = reused {
            self.free = next_free;
            self.slots[index] = Slot::Occupied { generation, node };
            return NodeKey { index, generation };
        }

        let index = self.slots.len();
        self.slots.push(Slot::Occupied { generation: 0, node });
        NodeKey { index, generation: 0 }
    }

    pub fn get(&self, key: NodeKey) -> Option<&Node<D>> {
        match self.slots.get(key.index) {
            Some(Slot::Occupied { generation, node }) if *generation == key.generation => {
                Some(node)
            },
            _ => None,
        }
    }

    pub fn get_mut(&mut self, key: NodeKey) -> Option<&mut Node<D>> {
        match self.slots.get_mut(key.index) {
            Some(Slot::Occupied { generation, node }) if *generation == key.generation => {
                Some(node)
            },
            _ => None,
        }
    }

    pub fn remove(&mut self, key: NodeKey) -> Option<Node<D>> {
        self.get(key)?;

        let vacant = Slot::Vacant {
            generation: key.generation.wrapping_add(1),
            next_free: self.free,
        };
        match mem::replace(&mut self.slots[key.index], vacant) {
            Slot::Occupied { node, .. } => {
                self.free = Some(key.index);
                self.len -= 1;
                Some(node)
            },
            // Checked by the lookup above.
            Slot::Vacant { .. } => None,
        }
    }

    /// Vacates every slot. Generations still move on, so keys from before the clear stay dead.
    pub fn clear(&mut self) {
        let mut free = None;
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            let generation = match slot {
                Slot::Occupied { generation, .. } => generation.wrapping_add(1),
                Slot::Vacant { generation, .. } => *generation,
            };
            *slot = Slot::Vacant {
                generation,
                next_free: free,
            };
            free = Some(index);
        }
        self.free = free;
        self.len = 0;
    }
}

impl<D> Default for Arena<D> {
    fn default() -> Self {
        Self::new()
    }
}
