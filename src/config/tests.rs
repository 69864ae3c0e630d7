use super::*;

use std::io::Write;

use crate::infrastructure::hash_table::TableError;

#[test]
fn test_default_config() {
    let config = TableConfig::default();
    assert_eq!(config.bucket_count, 10);
    assert_eq!(config.hash, HashAlgorithm::Fnv1a);
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_json_str_full() {
    let config = TableConfig::from_json_str(r#"{ "bucket_count": 64, "hash": "xxh64" }"#).unwrap();
    assert_eq!(config, TableConfig::new(64, HashAlgorithm::Xxh64));
}

#[test]
fn test_from_json_str_missing_fields_use_defaults() {
    let config = TableConfig::from_json_str(r#"{ "hash": "djb2" }"#).unwrap();
    assert_eq!(config.bucket_count, 10);
    assert_eq!(config.hash, HashAlgorithm::Djb2);

    let config = TableConfig::from_json_str("{}").unwrap();
    assert_eq!(config, TableConfig::default());
}

#[test]
fn test_zero_buckets_rejected() {
    let err = TableConfig::from_json_str(r#"{ "bucket_count": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidArgument(_)));
}

#[test]
fn test_unknown_algorithm_rejected() {
    let err = TableConfig::from_json_str(r#"{ "hash": "sha256" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn test_unknown_field_rejected() {
    let err = TableConfig::from_json_str(r#"{ "buckets": 3 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn test_json_round_trip() {
    let config = TableConfig::new(17, HashAlgorithm::Murmur3);
    let text = config.to_json().unwrap();
    assert_eq!(TableConfig::from_json_str(&text).unwrap(), config);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "bucket_count": 5, "hash": "crc32" }}"#).unwrap();

    let config = TableConfig::load(file.path()).unwrap();
    assert_eq!(config, TableConfig::new(5, HashAlgorithm::Crc32));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = TableConfig::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, ConfigError::IoError(_)));
}

#[test]
fn test_build_table() {
    let config = TableConfig::new(3, HashAlgorithm::Djb2);
    let mut table = config.build_table::<u32>().unwrap();
    assert_eq!(table.bucket_count(), 3);
    assert_eq!(table.hasher().algorithm(), HashAlgorithm::Djb2);
    assert!(table.insert("alice".to_string(), 1).unwrap());
}

#[test]
fn test_build_table_with_unvalidated_zero_buckets() {
    let config = TableConfig::new(0, HashAlgorithm::Fnv1a);
    let result = config.build_table::<u32>();
    assert!(matches!(result, Err(TableError::InvalidBucketCount(0))));
}
