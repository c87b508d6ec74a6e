// Quadratic probe sequence.
//
// Attempt `j` visits slot `(hash + j^2) mod capacity`. Every operation walks
// attempts `0..=capacity`, so a sequence yields `capacity + 1` indices. The
// walk does not reach every slot for every capacity; callers must handle
// exhaustion.
pub struct Probe {
    // The hash of the key being probed for.
    hash: u128,
    // Table length the indices are reduced against.
    capacity: u128,
    // The next attempt number.
    attempt: u128,
}

impl Probe {
    #[inline]
    pub fn new(hash: u64, capacity: usize) -> Probe {
        debug_assert!(capacity > 0, "probing an empty table");
        Probe {
            hash: u128::from(hash),
            capacity: capacity as u128,
            attempt: 0,
        }
    }
}

impl Iterator for Probe {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.capacity == 0 || self.attempt > self.capacity {
            return None;
        }
        let j = self.attempt;
        self.attempt += 1;
        Some(((self.hash + j * j) % self.capacity) as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.capacity + 1).saturating_sub(self.attempt) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Probe {}
