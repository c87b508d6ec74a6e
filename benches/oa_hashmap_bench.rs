use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use oa_hashmap::{BuildKeyHasher, HashMap, SumHash};
use std::collections::hash_map::RandomState;
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

type Map = HashMap<u64, BuildKeyHasher<RandomState>>;

fn filled(n: usize, seed: u64) -> (Map, Vec<String>) {
    let mut m = HashMap::new(16, BuildKeyHasher(RandomState::new()));
    let keys: Vec<_> = lcg(seed).take(n).map(key).collect();
    for (i, k) in keys.iter().enumerate() {
        m.put(k.as_str(), i as u64);
    }
    (m, keys)
}

fn bench_put(c: &mut Criterion) {
    let keys: Vec<_> = lcg(1).take(10_000).map(key).collect();
    c.bench_function("oa_hashmap_put_10k", |b| {
        b.iter_batched(
            || HashMap::new(16, BuildKeyHasher(RandomState::new())),
            |mut m: Map| {
                for (i, k) in keys.iter().enumerate() {
                    m.put(k.as_str(), i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("hashbrown_insert_10k", |b| {
        b.iter_batched(
            hashbrown::HashMap::<String, u64>::new,
            |mut m| {
                for (i, k) in keys.iter().enumerate() {
                    m.insert(k.clone(), i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_put_sum_hash(c: &mut Criterion) {
    // Sum hashing clusters these keys heavily; this tracks probe cost
    // under collisions rather than raw throughput.
    let keys: Vec<_> = lcg(3).take(1_000).map(key).collect();
    c.bench_function("oa_hashmap_put_1k_sum_hash", |b| {
        b.iter_batched(
            || HashMap::new(16, SumHash),
            |mut m| {
                for (i, k) in keys.iter().enumerate() {
                    m.put(k.as_str(), i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit(c: &mut Criterion) {
    let (m, keys) = filled(20_000, 7);
    c.bench_function("oa_hashmap_get_hit", |b| {
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(m.get(k));
        })
    });

    let hb: hashbrown::HashMap<String, u64> = keys
        .iter()
        .cloned()
        .enumerate()
        .map(|(i, k)| (k, i as u64))
        .collect();
    c.bench_function("hashbrown_get_hit", |b| {
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(hb.get(k));
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    let (m, _) = filled(10_000, 11);
    c.bench_function("oa_hashmap_get_miss", |b| {
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            // generate keys unlikely in map
            let k = key(miss.next().unwrap());
            black_box(m.get(&k));
        })
    });
}

fn bench_remove_reinsert(c: &mut Criterion) {
    c.bench_function("oa_hashmap_remove_reinsert_1k", |b| {
        b.iter_batched(
            || filled(1_000, 13),
            |(mut m, keys)| {
                for (i, k) in keys.iter().enumerate() {
                    m.remove(k);
                    m.put(k.as_str(), i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_put, bench_put_sum_hash, bench_get_hit, bench_get_miss, bench_remove_reinsert
}
criterion_main!(benches);
