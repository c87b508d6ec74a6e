#![cfg(test)]

// Property tests for HashMap kept inside the crate so they can inspect
// tombstone counts without widening the public surface.

use crate::hash::{KeyHasher, PositionalHash, SumHash};
use crate::hash_map::HashMap;
use hashbrown::HashMap as Model;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::collections::BTreeSet;

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(String),
    Resize(usize),
    Clear,
    Keys,
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<String>, Vec<OpI>)> {
    (1usize..=16, proptest::collection::vec("[a-z]{0,5}", 1..=8)).prop_flat_map(
        |(capacity, pool)| {
            let idxs: Vec<usize> = (0..pool.len()).collect();
            let idx = proptest::sample::select(idxs);
            let contains_pool = proptest::sample::select(pool.clone());
            let op = prop_oneof![
                4 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Put(i, v)),
                2 => idx.clone().prop_map(OpI::Remove),
                2 => idx.clone().prop_map(OpI::Get),
                1 => prop_oneof![
                    contains_pool.prop_map(|s: String| s),
                    "[a-z]{0,5}".prop_map(|s| s)
                ]
                .prop_map(OpI::Contains),
                1 => (0usize..48).prop_map(OpI::Resize),
                1 => Just(OpI::Clear),
                1 => Just(OpI::Keys),
            ];
            proptest::collection::vec(op, 1..80)
                .prop_map(move |ops| (capacity, pool.clone(), ops))
        },
    )
}

// State-machine equivalence against hashbrown::HashMap.
// Invariants exercised across random operation sequences:
// - `get` returns the most recent `put` for live keys and `None` otherwise.
// - `remove` reports presence exactly when the model held the key.
// - Invalid resize targets change nothing; valid ones keep every live pair.
// - `get_keys` matches the model's key set with no duplicates.
// - After each op: `len` parity, `empty_buckets == capacity - len`, and the
//   load never exceeds what a single insert past the 0.5 threshold allows.
fn run<H: KeyHasher>(
    mut sut: HashMap<i32, H>,
    pool: &[String],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut model: Model<String, i32> = Model::new();

    for op in ops {
        match op {
            OpI::Put(i, v) => {
                sut.put(pool[i].as_str(), v);
                model.insert(pool[i].clone(), v);
                prop_assert_eq!(sut.get(&pool[i]), Some(&v));
            }
            OpI::Remove(i) => {
                let removed = sut.remove(&pool[i]);
                prop_assert_eq!(removed, model.remove(&pool[i]).is_some());
                prop_assert!(!sut.contains_key(&pool[i]));
            }
            OpI::Get(i) => {
                prop_assert_eq!(sut.get(&pool[i]), model.get(&pool[i]));
            }
            OpI::Contains(s) => {
                prop_assert_eq!(sut.contains_key(&s), model.contains_key(&s));
            }
            OpI::Resize(c) => {
                let before_cap = sut.capacity();
                let before_tombs = sut.tombstones();
                sut.resize_table(c);
                if c <= 1 || c < model.len() {
                    prop_assert_eq!(sut.capacity(), before_cap);
                    prop_assert_eq!(sut.tombstones(), before_tombs);
                } else {
                    prop_assert!(sut.capacity() >= c);
                    prop_assert_eq!(sut.tombstones(), 0);
                }
                for (k, v) in &model {
                    prop_assert_eq!(sut.get(k), Some(v));
                }
            }
            OpI::Clear => {
                let cap = sut.capacity();
                sut.clear();
                model.clear();
                prop_assert_eq!(sut.capacity(), cap);
                prop_assert_eq!(sut.tombstones(), 0);
            }
            OpI::Keys => {
                let keys = sut.get_keys();
                let unique: BTreeSet<_> = keys.iter().cloned().collect();
                prop_assert_eq!(unique.len(), keys.len(), "duplicate key in snapshot");
                let m_keys: BTreeSet<_> = model.keys().cloned().collect();
                prop_assert_eq!(unique, m_keys);
            }
        }

        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        prop_assert_eq!(sut.empty_buckets(), sut.capacity() - sut.len());
        if sut.len() > 0 {
            prop_assert!(
                2 * (sut.len() - 1) <= sut.capacity(),
                "load {} too high at capacity {}",
                sut.table_load(),
                sut.capacity()
            );
        }
    }

    for (k, v) in &model {
        prop_assert_eq!(sut.get(k), Some(v));
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_sum_hash((capacity, pool, ops) in arb_scenario()) {
        run(HashMap::new(capacity, SumHash), &pool, ops)?;
    }

    #[test]
    fn prop_state_machine_positional_hash((capacity, pool, ops) in arb_scenario()) {
        run(HashMap::new(capacity, PositionalHash), &pool, ops)?;
    }
}

// Same invariants under worst-case collisions: every key shares one probe
// sequence, so tombstone build-up and probe exhaustion are routine.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((capacity, pool, ops) in arb_scenario()) {
        let constant: fn(&str) -> u64 = |_| 0;
        run(HashMap::new(capacity, constant), &pool, ops)?;
    }
}
