// HashMap property tests (public API).
//
// Property 1: last write wins.
//  - Model: BTreeMap of the most recent value per key.
//  - Invariant: get(k) == model[k] for every key ever touched, None for
//    keys never inserted or removed since; len() == model.len().
//  - Growth: after every put, at most one insert has landed past the 0.5
//    load threshold, i.e. 2 * (len - 1) <= capacity.
//
// Property 2: enumeration order.
//  - Invariant: get_keys() lists exactly the live slots of the dump
//    (`TS: false` lines), in ascending slot index.
use oa_hashmap::{HashMap, PositionalHash, SumHash};
use proptest::prelude::*;
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
enum Op {
    Put(String, i32),
    Remove(String),
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        3 => ("[a-d]{1,3}", any::<i32>()).prop_map(|(k, v)| Op::Put(k, v)),
        1 => "[a-d]{1,3}".prop_map(Op::Remove),
    ];
    proptest::collection::vec(op, 1..120)
}

proptest! {
    #[test]
    fn prop_last_write_wins(capacity in 1usize..=32, ops in arb_ops()) {
        let mut m = HashMap::new(capacity, SumHash);
        let mut model: BTreeMap<String, i32> = BTreeMap::new();
        let mut touched: Vec<String> = Vec::new();

        for op in ops {
            match op {
                Op::Put(k, v) => {
                    m.put(k.as_str(), v);
                    model.insert(k.clone(), v);
                    touched.push(k);
                    prop_assert!(2 * (m.len() - 1) <= m.capacity());
                }
                Op::Remove(k) => {
                    m.remove(&k);
                    model.remove(&k);
                    touched.push(k);
                }
            }
            prop_assert_eq!(m.len(), model.len());
        }

        for k in &touched {
            prop_assert_eq!(m.get(k), model.get(k));
            prop_assert_eq!(m.contains_key(k), model.contains_key(k));
        }
        prop_assert_eq!(m.get("never-inserted"), None);
    }
}

fn live_keys_from_dump(dump: &str) -> Vec<String> {
    dump.lines()
        .filter(|l| l.ends_with("TS: false"))
        .filter_map(|l| {
            let rest = l.split_once(": K: ")?.1;
            Some(rest.split_once(" V: ")?.0.to_string())
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_keys_follow_slot_order(capacity in 1usize..=32, ops in arb_ops()) {
        let mut m = HashMap::new(capacity, PositionalHash);
        for op in ops {
            match op {
                Op::Put(k, v) => m.put(k, v),
                Op::Remove(k) => { m.remove(&k); }
            }
        }
        let keys = m.get_keys();
        prop_assert_eq!(keys.len(), m.len());
        prop_assert_eq!(keys, live_keys_from_dump(&m.to_string()));
    }
}
