//! Buckets: fixed-length slot storage for the open-addressing table.
//!
//! A slot is a three-state tag. `Empty` slots terminate probe scans,
//! `Live` slots hold the current value for their key, and `Tombstone`
//! slots keep a removed entry around so that later probes continue past
//! them. Tombstones are only reclaimed when the whole table is rebuilt.

use core::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<V> {
    pub key: String,
    pub value: V,
}

impl<V> Entry<V> {
    pub fn new(key: String, value: V) -> Self {
        Entry { key, value }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot<V> {
    Empty,
    Live(Entry<V>),
    Tombstone(Entry<V>),
}

impl<V> Slot<V> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn is_tombstone(&self) -> bool {
        matches!(self, Slot::Tombstone(_))
    }

    /// The entry if this slot is live; tombstones never answer lookups.
    #[inline]
    pub fn live(&self) -> Option<&Entry<V>> {
        match self {
            Slot::Live(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn live_mut(&mut self) -> Option<&mut Entry<V>> {
        match self {
            Slot::Live(e) => Some(e),
            _ => None,
        }
    }

    /// Whether this slot holds a live entry for `key`.
    #[inline]
    pub fn holds(&self, key: &str) -> bool {
        self.live().map(|e| e.key == key).unwrap_or(false)
    }

    /// Turn a live slot into a tombstone in place. Returns false for
    /// empty or already tombstoned slots.
    pub fn bury(&mut self) -> bool {
        match core::mem::replace(self, Slot::Empty) {
            Slot::Live(e) => {
                *self = Slot::Tombstone(e);
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }
}

impl<V: fmt::Display> fmt::Display for Slot<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Empty => f.write_str("None"),
            Slot::Live(e) => write!(f, "K: {} V: {} TS: false", e.key, e.value),
            Slot::Tombstone(e) => write!(f, "K: {} V: {} TS: true", e.key, e.value),
        }
    }
}

/// Ordered, indexable slot container. The length is fixed once built;
/// appends only happen while constructing a fresh table.
#[derive(Clone, Debug)]
pub struct Buckets<V> {
    slots: Vec<Slot<V>>,
}

impl<V> Buckets<V> {
    /// A table of `len` empty slots.
    pub fn empty(len: usize) -> Self {
        let mut slots = Vec::with_capacity(len);
        for _ in 0..len {
            slots.push(Slot::Empty);
        }
        Buckets { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Slot<V>> {
        self.slots.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Slot<V>> {
        self.slots.get_mut(index)
    }

    /// Store `slot` at `index`, returning what was there before.
    ///
    /// Panics if `index` is out of range; callers only pass indices
    /// reduced modulo the table length.
    pub fn set(&mut self, index: usize, slot: Slot<V>) -> Slot<V> {
        core::mem::replace(&mut self.slots[index], slot)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Slot<V>> {
        self.slots.iter()
    }
}

impl<V> IntoIterator for Buckets<V> {
    type Item = Slot<V>;
    type IntoIter = std::vec::IntoIter<Slot<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter()
    }
}
