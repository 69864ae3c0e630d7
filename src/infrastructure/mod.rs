//! Building blocks: key hashing and the separate-chaining hash table

pub mod hash;
pub mod hash_table;
