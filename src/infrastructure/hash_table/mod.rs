// Hash table implementation with separate chaining

use std::fmt;

use log::{debug, trace, warn};

use crate::infrastructure::hash::{DefaultKeyHasher, KeyHasher};

pub mod chain;
pub mod error;

pub use chain::{Chain, Pair};
pub use error::{TableError, TableResult};

/// Hash table structure
///
/// The bucket count is fixed at construction; the table never rehashes.
/// Every keyed operation touches only the bucket at
/// `hash(key) % bucket_count`. Inserting a key that is already present is
/// rejected and leaves the stored value as it was.
pub struct HashTable<K, V, H = DefaultKeyHasher> {
    /// One chain per bucket
    buckets: Box<[Chain<K, V>]>,
    /// Hash function applied to every key
    hasher: H,
    /// Number of pairs across all buckets
    size: usize,
}

impl<K, V> HashTable<K, V>
where
    K: Eq + std::hash::Hash,
{
    /// Create a new hash table with the specified number of buckets,
    /// hashing keys with [`DefaultKeyHasher`]
    pub fn new(bucket_count: usize) -> TableResult<Self> {
        Self::with_hasher(bucket_count, DefaultKeyHasher::default())
    }
}

impl<K, V, H> HashTable<K, V, H> {
    /// Create a new hash table with the specified number of buckets and hash function
    pub fn with_hasher(bucket_count: usize, hasher: H) -> TableResult<Self> {
        if bucket_count == 0 {
            return Err(TableError::InvalidBucketCount(bucket_count));
        }

        let mut buckets = Vec::new();
        if let Err(err) = buckets.try_reserve_exact(bucket_count) {
            warn!("failed to allocate {} buckets: {}", bucket_count, err);
            return Err(err.into());
        }
        buckets.resize_with(bucket_count, Chain::new);

        debug!("created hash table with {} buckets", bucket_count);

        Ok(HashTable {
            buckets: buckets.into_boxed_slice(),
            hasher,
            size: 0,
        })
    }

    /// Get the number of elements in the hash table
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if the hash table is empty
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// The chain stored in bucket `index`, if the index is in range
    pub fn bucket(&self, index: usize) -> Option<&Chain<K, V>> {
        self.buckets.get(index)
    }

    pub fn buckets(&self) -> &[Chain<K, V>] {
        &self.buckets
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Iterate over every pair, bucket by bucket
    ///
    /// Pairs within one bucket come out in insertion order; the order across
    /// buckets follows bucket indices and carries no other meaning.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets
            .iter()
            .flat_map(Chain::iter)
            .map(|pair| (&pair.key, &pair.value))
    }

    /// Remove every pair, keeping the bucket count
    pub fn clear(&mut self) {
        for chain in self.buckets.iter_mut() {
            chain.clear();
        }
        self.size = 0;
    }
}

impl<K, V, H> HashTable<K, V, H>
where
    K: Eq,
    H: KeyHasher<K>,
{
    /// Calculate the bucket index for a given key
    pub fn bucket_index(&self, key: &K) -> usize {
        (self.hasher.hash_key(key) % self.buckets.len() as u64) as usize
    }

    /// Insert a key-value pair into the hash table
    ///
    /// Returns `Ok(false)` without touching the table if `key` is already
    /// present; the stored value is not replaced. Allocation failure is
    /// reported as [`TableError::AllocFailed`].
    pub fn insert(&mut self, key: K, value: V) -> TableResult<bool> {
        let index = self.bucket_index(&key);
        let chain = &mut self.buckets[index];

        if chain.find_by_key(&key).is_some() {
            trace!("insert rejected: duplicate key in bucket {}", index);
            return Ok(false);
        }

        if let Err(err) = chain.append(Pair::new(key, value)) {
            warn!("failed to allocate entry in bucket {}: {}", index, err);
            return Err(err.into());
        }

        self.size += 1;
        trace!("inserted into bucket {} (size {})", index, self.size);
        Ok(true)
    }

    /// Copy the value stored under `key` into `value`
    ///
    /// Returns false and leaves `value` untouched if `key` is absent.
    pub fn search(&self, key: &K, value: &mut V) -> bool
    where
        V: Clone,
    {
        match self.get(key) {
            Some(found) => {
                value.clone_from(found);
                true
            }
            None => false,
        }
    }

    /// Get a reference to the value associated with a key
    pub fn get(&self, key: &K) -> Option<&V> {
        let index = self.bucket_index(key);
        trace!("lookup in bucket {}", index);
        self.buckets[index].find_by_key(key).map(|pair| &pair.value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.bucket_index(key);
        self.buckets[index].find_value_mut(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Delete the pair stored under `key`
    ///
    /// Other pairs in the same bucket stay linked and reachable.
    pub fn delete(&mut self, key: &K) -> bool {
        let index = self.bucket_index(key);
        let removed = self.buckets[index].remove_by_key(key);
        if removed {
            self.size -= 1;
            trace!("deleted from bucket {} (size {})", index, self.size);
        }
        removed
    }

    /// Remove a key-value pair from the hash table, returning the value
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.bucket_index(key);
        let pair = self.buckets[index].take_by_key(key)?;
        self.size -= 1;
        trace!("removed from bucket {} (size {})", index, self.size);
        Some(pair.value)
    }
}

impl<K: fmt::Debug, V: fmt::Debug, H> fmt::Debug for HashTable<K, V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("bucket_count", &self.buckets.len())
            .field("size", &self.size)
            .field("buckets", &self.buckets)
            .finish()
    }
}
