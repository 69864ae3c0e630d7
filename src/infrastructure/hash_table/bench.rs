use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linked_hash_map::LinkedHashMap;
use std::collections::HashMap;

use chainstore::{HashAlgorithm, HashTable, StrHasher};

// Test configuration
const OPERATIONS: u32 = 10_000;
const BUCKET_COUNTS: [usize; 3] = [16, 1024, 16_384];

// Insert, read back, then remove every key
pub fn bench_single_threaded(c: &mut Criterion) {
    let mut group = c.benchmark_group("SingleThreaded");

    for buckets in BUCKET_COUNTS {
        group.bench_with_input(BenchmarkId::new("HashTable", buckets), &buckets, |b, &buckets| {
            b.iter(|| {
                let mut table = HashTable::new(buckets).unwrap();
                for i in 0..OPERATIONS {
                    table.insert(i, "test_value").unwrap();
                }
                for i in 0..OPERATIONS {
                    assert!(table.get(&i).is_some());
                }
                for i in 0..OPERATIONS {
                    table.delete(&i);
                }
            });
        });
    }

    group.bench_function("StdHashMap", |b| {
        b.iter(|| {
            let mut map = HashMap::new();
            for i in 0..OPERATIONS {
                map.entry(i).or_insert("test_value");
            }
            for i in 0..OPERATIONS {
                assert!(map.get(&i).is_some());
            }
            for i in 0..OPERATIONS {
                map.remove(&i);
            }
        });
    });

    group.bench_function("LinkedHashMap", |b| {
        b.iter(|| {
            let mut map = LinkedHashMap::new();
            for i in 0..OPERATIONS {
                map.entry(i).or_insert("test_value");
            }
            for i in 0..OPERATIONS {
                assert!(map.get(&i).is_some());
            }
            for i in 0..OPERATIONS {
                map.remove(&i);
            }
        });
    });

    group.finish();
}

// Lookups against a pre-populated table, 90% hits
pub fn bench_read_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("ReadHeavy");

    for buckets in BUCKET_COUNTS {
        let mut table = HashTable::new(buckets).unwrap();
        for i in 0..OPERATIONS {
            table.insert(i, i).unwrap();
        }

        group.bench_with_input(BenchmarkId::new("HashTable", buckets), &table, |b, table| {
            b.iter(|| {
                let mut hits = 0u32;
                for i in 0..OPERATIONS + OPERATIONS / 9 {
                    if table.contains_key(black_box(&i)) {
                        hits += 1;
                    }
                }
                hits
            });
        });
    }

    group.finish();
}

// String keys routed by each hash algorithm
pub fn bench_string_keys(c: &mut Criterion) {
    let keys: Vec<String> = (0..OPERATIONS).map(|i| format!("user_{:05}", i)).collect();
    let mut group = c.benchmark_group("StringKeys");

    for algorithm in [
        HashAlgorithm::Fnv1a,
        HashAlgorithm::Djb2,
        HashAlgorithm::Murmur3,
        HashAlgorithm::Xxh64,
        HashAlgorithm::Crc32,
    ] {
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| {
                let mut table = HashTable::with_hasher(1024, StrHasher::new(algorithm)).unwrap();
                for (score, key) in keys.iter().enumerate() {
                    table.insert(key.clone(), score).unwrap();
                }
                table.size()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_threaded, bench_read_heavy, bench_string_keys);
criterion_main!(benches);
