use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use chainstore::infrastructure::hash::HashAlgorithm;

const ALGORITHMS: [HashAlgorithm; 5] = [
    HashAlgorithm::Fnv1a,
    HashAlgorithm::Djb2,
    HashAlgorithm::Murmur3,
    HashAlgorithm::Xxh64,
    HashAlgorithm::Crc32,
];

// Generate a random string of specified length
fn generate_random_string(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();

    (0..length)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}

fn bench_strings(c: &mut Criterion, group_name: &str, length: usize) {
    let s = generate_random_string(length);
    let mut group = c.benchmark_group(group_name);

    for algorithm in ALGORITHMS {
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| algorithm.hash(black_box(&s)))
        });
    }

    group.finish();
}

pub fn bench_short_strings(c: &mut Criterion) {
    bench_strings(c, "ShortStrings", 10);
}

pub fn bench_medium_strings(c: &mut Criterion) {
    bench_strings(c, "MediumStrings", 100);
}

pub fn bench_long_strings(c: &mut Criterion) {
    bench_strings(c, "LongStrings", 1000);
}

criterion_group!(benches, bench_short_strings, bench_medium_strings, bench_long_strings);
criterion_main!(benches);
