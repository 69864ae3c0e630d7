//! Chainstore: a fixed-size, separate-chaining hash table
//!
//! Each bucket is a doubly linked chain of key/value pairs. The bucket count
//! is chosen at construction and never changes, the hash function is a value
//! supplied by the caller, and inserting an existing key is rejected rather
//! than overwriting it.
//!
//! ```
//! use chainstore::HashTable;
//!
//! let mut table = HashTable::new(10).unwrap();
//! assert!(table.insert(1, "One".to_string()).unwrap());
//! assert!(!table.insert(1, "Uno".to_string()).unwrap());
//!
//! let mut value = String::new();
//! assert!(table.search(&1, &mut value));
//! assert_eq!(value, "One");
//!
//! assert!(table.delete(&1));
//! assert_eq!(table.size(), 0);
//! ```

// Global type definitions
pub mod types;

pub mod config;
pub mod infrastructure;
pub mod logger;
pub mod scores;

// Re-export the table for easier access
pub use infrastructure::hash::{DefaultKeyHasher, HashAlgorithm, KeyHasher, StrHasher};
pub use infrastructure::hash_table::{Chain, HashTable, Pair, TableError, TableResult};

pub use config::{ConfigError, TableConfig};
pub use scores::{ScoreBoard, ScoreError, ScoreRecord};
