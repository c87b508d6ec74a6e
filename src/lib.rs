//! oa-hashmap: a single-threaded open-addressing map from text keys to
//! values, using quadratic probing and tombstone deletion.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small associative array whose whole structure lives in one
//!   fixed-length slot table, with growth and deletion behavior that is
//!   easy to predict from the outside.
//! - Layers:
//!   - `Buckets<V>`: fixed-length slot storage. Each slot is a
//!     three-state tag: `Empty`, `Live(entry)` or `Tombstone(entry)`.
//!   - `Probe`: the quadratic walk `(hash + j^2) mod capacity` for
//!     `j = 0..=capacity`, shared by every operation.
//!   - `HashMap<V, H>`: put/get/remove/contains on top of the two, plus
//!     load reporting and table rebuilds.
//! - Hashing is a pluggable `KeyHasher` strategy held by the map. Any
//!   `Fn(&str) -> u64` works; `SumHash` and `PositionalHash` are the two
//!   reference strategies and `BuildKeyHasher` adapts a `BuildHasher`.
//!
//! Growth and deletion
//! - Before every `put`, a load factor of 0.5 or more doubles the
//!   capacity. Load is the live count over the slot count and is never
//!   cached.
//! - `remove` marks the slot as a tombstone. `put` steps over tombstones
//!   and only fills truly empty slots, so tombstones pile up until the
//!   next rebuild (`resize_table`) drops them.
//! - `resize_table` re-inserts live entries through `put`, so a rebuild
//!   can itself trigger further growth.
//! - If a `put` walk finds neither its key nor an empty slot, the table
//!   is rebuilt (at the same size when tombstones exist, otherwise at
//!   double size) and the walk retried. This is logged as a warning; the
//!   pair is never dropped.
//!
//! Constraints
//! - Single-threaded; no interior mutability. Share behind one external
//!   lock if needed, since any `put` may replace the entire table.
//! - Keys are `String`. Lookups take `&str`.
//! - Lookups on absent keys and invalid resize targets are soft no-ops,
//!   not errors. The only construction error is a zero capacity.
//!
//! Logging
//! - Uses the `log` facade: `debug` for rebuilds and clears, `trace` for
//!   load-triggered growth, `warn` for exhausted probe walks.

mod error;
pub mod hash;
pub mod hash_map;
mod hash_map_proptest;
mod probe;
#[cfg(feature = "serde")]
mod serde_impls;
pub mod storage;

// Public surface
pub use error::CapacityError;
pub use hash::{BuildKeyHasher, KeyHasher, PositionalHash, SumHash};
pub use hash_map::{HashMap, Iter, MAX_LOAD_FACTOR};
