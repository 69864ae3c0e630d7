// Bucket chain: a doubly linked list of key/value pairs kept in a slot arena

use std::collections::TryReserveError;
use std::fmt;
use std::iter::FusedIterator;

/// Key/value pair stored in a chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Pair<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Pair { key, value }
    }
}

/// Index of a slot in the chain's arena
type SlotId = usize;

/// Chain node structure
struct Node<K, V> {
    pair: Pair<K, V>,
    /// Previous node in chain order
    prev: Option<SlotId>,
    /// Next node in chain order
    next: Option<SlotId>,
}

enum Slot<K, V> {
    Occupied(Node<K, V>),
    /// Released slot, threaded onto the free list
    Vacant { next_free: Option<SlotId> },
}

/// Ordered sequence of pairs sharing one bucket
///
/// Nodes live in a `Vec` of slots and link to each other by slot index.
/// Removing a node relinks its neighbours and pushes the slot onto a free
/// list, which the next append reuses before growing the arena.
///
/// The chain does not reject duplicate keys; the owning table checks
/// for them before appending.
pub struct Chain<K, V> {
    slots: Vec<Slot<K, V>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
    free: Option<SlotId>,
    length: usize,
}

impl<K, V> Chain<K, V> {
    /// Create a new empty chain
    pub fn new() -> Self {
        Chain {
            slots: Vec::new(),
            head: None,
            tail: None,
            free: None,
            length: 0,
        }
    }

    /// Number of pairs in the chain
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Add `pair` as the new last entry
    ///
    /// Fails only if the arena cannot grow.
    pub fn append(&mut self, pair: Pair<K, V>) -> Result<(), TryReserveError> {
        let node = Node {
            pair,
            prev: self.tail,
            next: None,
        };

        let id = match self.pop_free() {
            Some(id) => {
                self.slots[id] = Slot::Occupied(node);
                id
            }
            None => {
                self.slots.try_reserve(1)?;
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        };

        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.length += 1;
        Ok(())
    }

    /// Iterate over the pairs from first to last
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            chain: self,
            front: self.head,
            back: self.tail,
            remaining: self.length,
        }
    }

    pub fn first(&self) -> Option<&Pair<K, V>> {
        self.head.map(|id| &self.node(id).pair)
    }

    pub fn last(&self) -> Option<&Pair<K, V>> {
        self.tail.map(|id| &self.node(id).pair)
    }

    /// Drop every pair and release the arena
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.free = None;
        self.length = 0;
    }

    /// Number of arena slots, occupied or vacant
    #[cfg(test)]
    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn pop_free(&mut self) -> Option<SlotId> {
        let id = self.free?;
        if let Slot::Vacant { next_free } = self.slots[id] {
            self.free = next_free;
        }
        Some(id)
    }

    fn node(&self, id: SlotId) -> &Node<K, V> {
        match &self.slots[id] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("chain link points at vacant slot {}", id),
        }
    }

    fn node_mut(&mut self, id: SlotId) -> &mut Node<K, V> {
        match &mut self.slots[id] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("chain link points at vacant slot {}", id),
        }
    }

    /// Detach the node in slot `id` and return its pair
    fn unlink(&mut self, id: SlotId) -> Pair<K, V> {
        let slot = std::mem::replace(&mut self.slots[id], Slot::Vacant { next_free: self.free });
        let node = match slot {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("unlinking vacant slot {}", id),
        };

        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }

        self.free = Some(id);
        self.length -= 1;
        node.pair
    }
}

impl<K: Eq, V> Chain<K, V> {
    /// Find the pair whose key equals `key`
    pub fn find_by_key(&self, key: &K) -> Option<&Pair<K, V>> {
        self.iter().find(|pair| pair.key == *key)
    }

    /// Mutable access to the value stored under `key`
    pub fn find_value_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.position(key)?;
        Some(&mut self.node_mut(id).pair.value)
    }

    /// Unlink the pair whose key equals `key`
    ///
    /// Returns false and leaves the chain untouched if no pair matches.
    pub fn remove_by_key(&mut self, key: &K) -> bool {
        self.take_by_key(key).is_some()
    }

    /// Unlink the pair whose key equals `key` and hand it back
    pub fn take_by_key(&mut self, key: &K) -> Option<Pair<K, V>> {
        let id = self.position(key)?;
        Some(self.unlink(id))
    }

    fn position(&self, key: &K) -> Option<SlotId> {
        let mut current = self.head;
        while let Some(id) = current {
            let node = self.node(id);
            if node.pair.key == *key {
                return Some(id);
            }
            current = node.next;
        }
        None
    }
}

impl<K, V> Default for Chain<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Chain<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|pair| (&pair.key, &pair.value)))
            .finish()
    }
}

impl<'a, K, V> IntoIterator for &'a Chain<K, V> {
    type Item = &'a Pair<K, V>;
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Bidirectional iterator over a chain
pub struct Iter<'a, K, V> {
    chain: &'a Chain<K, V>,
    front: Option<SlotId>,
    back: Option<SlotId>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Pair<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.chain.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.chain.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.pair)
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
