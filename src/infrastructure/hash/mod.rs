// Hash functions and the key hashers used to route keys to buckets

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{BuildHasher, BuildHasherDefault, Hash};

use serde::{Deserialize, Serialize};

/// FNV-1a hash implementation for strings
/// Returns a 64-bit integer hash value
pub fn fnv1a_hash(s: &str) -> u64 {
    const FNV_OFFSET_BASIS: u64 = 14695981039346656037;
    const FNV_PRIME: u64 = 1099511628211;

    s.as_bytes().iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(FNV_PRIME)
    })
}

/// djb2 hash implementation for strings
pub fn djb2_hash(s: &str) -> u64 {
    const DJB2_MAGIC_NUMBER: u64 = 5381;

    s.as_bytes().iter().fold(DJB2_MAGIC_NUMBER, |hash, byte| {
        // hash * 33 + c
        hash.wrapping_shl(5)
            .wrapping_add(hash)
            .wrapping_add(u64::from(*byte))
    })
}

/// MurmurHash3 x64/128 for strings, seed 0
/// Returns the first 64 bits of the 128-bit result
pub fn murmur3_hash(s: &str) -> u64 {
    const C1: u64 = 0x87c37b91114253d5;
    const C2: u64 = 0x4cf5ad432745937f;

    let data = s.as_bytes();
    let mut h1: u64 = 0;
    let mut h2: u64 = 0;

    let blocks = data.chunks_exact(16);
    let tail = blocks.remainder();

    for block in blocks {
        let (lo, hi) = block.split_at(8);
        let k1 = u64::from_le_bytes(lo.try_into().unwrap_or([0; 8]));
        let k2 = u64::from_le_bytes(hi.try_into().unwrap_or([0; 8]));

        h1 ^= k1.wrapping_mul(C1).rotate_left(31).wrapping_mul(C2);
        h1 = h1.rotate_left(27).wrapping_add(h2);
        h1 = h1.wrapping_mul(5).wrapping_add(0x52dce729);

        h2 ^= k2.wrapping_mul(C2).rotate_left(33).wrapping_mul(C1);
        h2 = h2.rotate_left(31).wrapping_add(h1);
        h2 = h2.wrapping_mul(5).wrapping_add(0x38495ab5);
    }

    if tail.len() > 8 {
        let k2 = tail[8..]
            .iter()
            .enumerate()
            .fold(0u64, |k, (i, byte)| k ^ (u64::from(*byte) << (i * 8)));
        h2 ^= k2.wrapping_mul(C2).rotate_left(33).wrapping_mul(C1);
    }

    if !tail.is_empty() {
        let k1 = tail
            .iter()
            .take(8)
            .enumerate()
            .fold(0u64, |k, (i, byte)| k ^ (u64::from(*byte) << (i * 8)));
        h1 ^= k1.wrapping_mul(C1).rotate_left(31).wrapping_mul(C2);
    }

    let len = data.len() as u64;
    h1 ^= len;
    h2 ^= len;
    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);
    h1 = fmix64(h1);
    h2 = fmix64(h2);
    h1.wrapping_add(h2)
}

fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51afd7ed558ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ceb9fe1a85ec53);
    k ^ (k >> 33)
}

/// XXH64 (seed 0) for strings
pub fn xxh64_hash(s: &str) -> u64 {
    xxhash_rust::xxh64::xxh64(s.as_bytes(), 0)
}

/// CRC32 (IEEE) for strings, widened to 64 bits
pub fn crc32_hash(s: &str) -> u64 {
    u64::from(crc32fast::hash(s.as_bytes()))
}

/// Hash a string and return an integer
/// Uses FNV-1a as the default hash algorithm
pub fn hash_string(s: &str) -> u64 {
    fnv1a_hash(s)
}

/// Selectable string hash algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// FNV-1a (default)
    #[default]
    Fnv1a,
    /// djb2
    Djb2,
    /// MurmurHash3 x64/128, low half
    Murmur3,
    /// XXH64
    Xxh64,
    /// CRC32
    Crc32,
}

impl HashAlgorithm {
    /// Hash `s` with this algorithm
    pub fn hash(self, s: &str) -> u64 {
        match self {
            HashAlgorithm::Fnv1a => fnv1a_hash(s),
            HashAlgorithm::Djb2 => djb2_hash(s),
            HashAlgorithm::Murmur3 => murmur3_hash(s),
            HashAlgorithm::Xxh64 => xxh64_hash(s),
            HashAlgorithm::Crc32 => crc32_hash(s),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Fnv1a => "fnv1a",
            HashAlgorithm::Djb2 => "djb2",
            HashAlgorithm::Murmur3 => "murmur3",
            HashAlgorithm::Xxh64 => "xxh64",
            HashAlgorithm::Crc32 => "crc32",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps a key to a 64-bit hash value
///
/// A hash table reduces this value modulo its bucket count to pick the bucket
/// a key lives in. Any closure `Fn(&K) -> u64` is a key hasher, so callers can
/// inject deterministic (or deliberately colliding) functions:
///
/// ```
/// use chainstore::HashTable;
///
/// let mut table = HashTable::with_hasher(10, |key: &i32| (*key % 10) as u64).unwrap();
/// assert!(table.insert(10, "Ten").unwrap());
/// assert!(table.insert(20, "Twenty").unwrap());
/// assert_eq!(table.bucket_index(&10), table.bucket_index(&20));
/// ```
pub trait KeyHasher<K: ?Sized> {
    /// Hash `key`
    fn hash_key(&self, key: &K) -> u64;
}

impl<K: ?Sized, F> KeyHasher<K> for F
where
    F: Fn(&K) -> u64,
{
    fn hash_key(&self, key: &K) -> u64 {
        self(key)
    }
}

/// Default key hasher built on the standard library's `DefaultHasher`
///
/// Unseeded, so the same key hashes to the same bucket across table instances.
#[derive(Debug, Clone, Default)]
pub struct DefaultKeyHasher {
    build: BuildHasherDefault<DefaultHasher>,
}

impl<K: Hash + ?Sized> KeyHasher<K> for DefaultKeyHasher {
    fn hash_key(&self, key: &K) -> u64 {
        self.build.hash_one(key)
    }
}

/// Key hasher for string-like keys driven by a [`HashAlgorithm`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrHasher {
    algorithm: HashAlgorithm,
}

impl StrHasher {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        StrHasher { algorithm }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }
}

impl<K: AsRef<str> + ?Sized> KeyHasher<K> for StrHasher {
    fn hash_key(&self, key: &K) -> u64 {
        self.algorithm.hash(key.as_ref())
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
