//! HashMap: open-addressing table with quadratic probing and tombstones.

use crate::error::CapacityError;
use crate::hash::{KeyHasher, SumHash};
use crate::probe::Probe;
use crate::storage::{Buckets, Entry, Slot};
use core::fmt;
use log::{debug, trace, warn};

/// `put` doubles the capacity first when the load factor is at or above this.
pub const MAX_LOAD_FACTOR: f64 = 0.5;

/// Map from `String` keys to `V`, stored directly in a fixed-length slot
/// table and resolved with the probe sequence `(hash + j^2) mod capacity`.
///
/// Removal leaves a tombstone behind. `put` never reuses tombstoned slots;
/// they are only reclaimed when the table is rebuilt by `resize_table`.
#[derive(Clone)]
pub struct HashMap<V, H = SumHash> {
    buckets: Buckets<V>,
    size: usize,
    hasher: H,
}

// Outcome of the insertion scan.
enum Scan {
    Occupied(usize),
    Vacant(usize),
    Exhausted,
}

impl<V> HashMap<V> {
    /// A map using [`SumHash`]. Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(capacity, SumHash)
    }
}

/// Iterator over live entries in slot order.
pub struct Iter<'a, V> {
    it: core::slice::Iter<'a, Slot<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it
            .by_ref()
            .find_map(|s| s.live().map(|e| (e.key.as_str(), &e.value)))
    }
}

impl<V, H> HashMap<V, H> {
    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.size
    }
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Live entries over slot count, recomputed on every call.
    pub fn table_load(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    /// Slots not holding a live entry. Tombstoned slots are counted even
    /// though `put` cannot fill them.
    pub fn empty_buckets(&self) -> usize {
        self.capacity() - self.size
    }

    /// Tombstoned slots awaiting the next rebuild.
    pub fn tombstones(&self) -> usize {
        self.buckets.iter().filter(|s| s.is_tombstone()).count()
    }

    /// Live keys in slot order, as an owned snapshot.
    pub fn get_keys(&self) -> Vec<String> {
        self.iter().map(|(k, _)| k.to_owned()).collect()
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            it: self.buckets.iter(),
        }
    }

    /// Drop every entry, keeping the current capacity.
    pub fn clear(&mut self) {
        debug!(
            "clearing {} entries, capacity stays {}",
            self.size,
            self.capacity()
        );
        self.buckets = Buckets::empty(self.capacity());
        self.size = 0;
    }

    fn grown_capacity(&self) -> usize {
        self.capacity().checked_mul(2).expect("capacity overflow")
    }
}

impl<V, H> HashMap<V, H>
where
    H: KeyHasher,
{
    /// Panics if `capacity` is zero; see [`HashMap::try_new`].
    pub fn new(capacity: usize, hasher: H) -> Self {
        match Self::try_new(capacity, hasher) {
            Ok(map) => map,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_new(capacity: usize, hasher: H) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError::Zero);
        }
        Ok(Self {
            buckets: Buckets::empty(capacity),
            size: 0,
            hasher,
        })
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    // Index of the live slot holding `key`. An empty slot ends the walk:
    // inserts always land on the first empty slot of a sequence, so the
    // key cannot sit past one.
    fn find(&self, key: &str) -> Option<usize> {
        let hash = self.hasher.hash_key(key);
        for i in Probe::new(hash, self.capacity()) {
            match self.buckets.get(i)? {
                Slot::Empty => return None,
                slot if slot.holds(key) => return Some(i),
                _ => {}
            }
        }
        None
    }

    // Tombstones are stepped over whatever key they carry.
    fn scan_for_put(&self, key: &str) -> Scan {
        let hash = self.hasher.hash_key(key);
        for i in Probe::new(hash, self.capacity()) {
            match self.buckets.get(i) {
                Some(Slot::Empty) => return Scan::Vacant(i),
                Some(slot) if slot.holds(key) => return Scan::Occupied(i),
                _ => {}
            }
        }
        Scan::Exhausted
    }

    /// Insert `key`, or overwrite its value if it is already live.
    pub fn put(&mut self, key: impl Into<String>, value: V) {
        self.put_entry(Entry::new(key.into(), value));
    }

    fn put_entry(&mut self, entry: Entry<V>) {
        if self.table_load() >= MAX_LOAD_FACTOR {
            let target = self.grown_capacity();
            trace!(
                "load {:.3} reached, growing {} -> {}",
                self.table_load(),
                self.capacity(),
                target
            );
            self.resize_table(target);
        }

        loop {
            match self.scan_for_put(&entry.key) {
                Scan::Occupied(i) => {
                    if let Some(live) = self.buckets.get_mut(i).and_then(Slot::live_mut) {
                        live.value = entry.value;
                    }
                    return;
                }
                Scan::Vacant(i) => {
                    self.buckets.set(i, Slot::Live(entry));
                    self.size += 1;
                    return;
                }
                Scan::Exhausted => {
                    // Purge tombstones first; grow only if the live entries
                    // themselves block every reachable slot.
                    let tombstones = self.tombstones();
                    let target = if tombstones > 0 && self.capacity() > 1 {
                        self.capacity()
                    } else {
                        self.grown_capacity()
                    };
                    warn!(
                        "probe exhausted for key {:?} (capacity {}, {} live, {} tombstones), rebuilding at {}",
                        entry.key,
                        self.capacity(),
                        self.size,
                        tombstones,
                        target
                    );
                    self.resize_table(target);
                }
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        let i = self.find(key)?;
        self.buckets.get(i)?.live().map(|e| &e.value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let i = self.find(key)?;
        self.buckets
            .get_mut(i)?
            .live_mut()
            .map(|e| &mut e.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Tombstone the live entry for `key`. Returns whether one existed.
    pub fn remove(&mut self, key: &str) -> bool {
        let Some(i) = self.find(key) else {
            return false;
        };
        let buried = self.buckets.get_mut(i).map(Slot::bury).unwrap_or(false);
        if buried {
            self.size -= 1;
        }
        buried
    }

    /// Rebuild the table with `new_capacity` slots, re-inserting every live
    /// entry in slot order and dropping tombstones. Targets `<= 1` or below
    /// the live count are ignored.
    ///
    /// Re-insertion goes through `put`, so the table may grow past
    /// `new_capacity` while rehashing.
    pub fn resize_table(&mut self, new_capacity: usize) {
        if new_capacity <= 1 || new_capacity < self.size {
            return;
        }

        let old_capacity = self.capacity();
        let live = self.size;
        let old = core::mem::replace(&mut self.buckets, Buckets::empty(new_capacity));
        self.size = 0;

        let mut dropped = 0usize;
        for slot in old {
            match slot {
                Slot::Live(entry) => self.put_entry(entry),
                Slot::Tombstone(_) => dropped += 1,
                Slot::Empty => {}
            }
        }

        debug!(
            "resized {} -> {} (requested {}): {} entries rehashed, {} tombstones dropped",
            old_capacity,
            self.capacity(),
            new_capacity,
            live,
            dropped
        );
        debug_assert_eq!(self.size, live, "rehash lost live entries");
    }
}

impl<'a, V, H> IntoIterator for &'a HashMap<V, H> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, H> Extend<(K, V)> for HashMap<V, H>
where
    K: Into<String>,
    H: KeyHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

/// One line per slot: `index: None` or `index: K: key V: value TS: bool`.
impl<V: fmt::Display, H> fmt::Display for HashMap<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.buckets.iter().enumerate() {
            writeln!(f, "{}: {}", i, slot)?;
        }
        Ok(())
    }
}

impl<V: fmt::Debug, H> fmt::Debug for HashMap<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
