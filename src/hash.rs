//! Key hashing strategies.
//!
//! The map never hashes keys itself. It holds a `KeyHasher` chosen at
//! construction and calls it on every probing operation; the output is
//! reduced modulo the capacity, so hashers may return any `u64`.

use core::hash::BuildHasher;

/// Maps a key to a non-negative integer. Must be pure: the same key
/// always hashes to the same value for the lifetime of the map.
pub trait KeyHasher {
    fn hash_key(&self, key: &str) -> u64;
}

impl<F> KeyHasher for F
where
    F: Fn(&str) -> u64,
{
    #[inline]
    fn hash_key(&self, key: &str) -> u64 {
        self(key)
    }
}

/// Sum of the key's Unicode scalar values.
pub fn sum_hash(key: &str) -> u64 {
    key.chars()
        .fold(0u64, |acc, c| acc.wrapping_add(u64::from(c)))
}

/// Sum of `(position + 1) * scalar` over the key's characters.
pub fn positional_hash(key: &str) -> u64 {
    key.chars().enumerate().fold(0u64, |acc, (i, c)| {
        acc.wrapping_add((i as u64 + 1).wrapping_mul(u64::from(c)))
    })
}

/// `KeyHasher` for [`sum_hash`]. Anagrams collide.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SumHash;

impl KeyHasher for SumHash {
    #[inline]
    fn hash_key(&self, key: &str) -> u64 {
        sum_hash(key)
    }
}

/// `KeyHasher` for [`positional_hash`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionalHash;

impl KeyHasher for PositionalHash {
    #[inline]
    fn hash_key(&self, key: &str) -> u64 {
        positional_hash(key)
    }
}

/// Adapts any `BuildHasher` (e.g. `RandomState`) into a `KeyHasher`.
#[derive(Clone, Debug, Default)]
pub struct BuildKeyHasher<S>(pub S);

impl<S: BuildHasher> KeyHasher for BuildKeyHasher<S> {
    #[inline]
    fn hash_key(&self, key: &str) -> u64 {
        self.0.hash_one(key)
    }
}
