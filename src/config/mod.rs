//! Table configuration
//!
//! A [`TableConfig`] picks the bucket count and string hash algorithm for a
//! table keyed by strings. It is usually read from a JSON file:
//!
//! ```json
//! { "bucket_count": 64, "hash": "xxh64" }
//! ```
//!
//! Missing fields fall back to their defaults.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::infrastructure::hash::{HashAlgorithm, StrHasher};
use crate::infrastructure::hash_table::{HashTable, TableResult};
use crate::types::DEFAULT_BUCKET_COUNT;

pub mod error;
pub use error::{ConfigError, ConfigResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    /// Number of buckets, fixed for the table's lifetime
    pub bucket_count: usize,
    /// Hash algorithm applied to string keys
    pub hash: HashAlgorithm,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            bucket_count: DEFAULT_BUCKET_COUNT,
            hash: HashAlgorithm::default(),
        }
    }
}

impl TableConfig {
    pub fn new(bucket_count: usize, hash: HashAlgorithm) -> Self {
        TableConfig { bucket_count, hash }
    }

    /// Parse and validate a config from JSON text
    pub fn from_json_str(text: &str) -> ConfigResult<Self> {
        let config: TableConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        info!(
            "loaded table config from {}: {} buckets, {} hash",
            path.display(),
            config.bucket_count,
            config.hash
        );
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.bucket_count == 0 {
            return Err(ConfigError::InvalidArgument(
                "bucket_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build an empty string-keyed table from this config
    pub fn build_table<V>(&self) -> TableResult<HashTable<String, V, StrHasher>> {
        HashTable::with_hasher(self.bucket_count, StrHasher::new(self.hash))
    }
}
