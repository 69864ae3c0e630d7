//! Hash table error definitions

use std::collections::TryReserveError;
use std::error::Error;
use std::fmt;

/// Hash table error types
///
/// Ordinary outcomes such as a duplicate or missing key are reported through
/// `bool`/`Option` returns, not through this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A table needs at least one bucket
    InvalidBucketCount(usize),
    /// Memory for a bucket array or chain entry could not be allocated
    AllocFailed(TryReserveError),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::InvalidBucketCount(count) => {
                write!(f, "Invalid bucket count: {} (must be at least 1)", count)
            }
            TableError::AllocFailed(err) => write!(f, "Allocation failed: {}", err),
        }
    }
}

impl Error for TableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TableError::AllocFailed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TryReserveError> for TableError {
    fn from(err: TryReserveError) -> Self {
        TableError::AllocFailed(err)
    }
}

/// Result type for hash table operations
pub type TableResult<T> = Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn reserve_error() -> TryReserveError {
        let mut v: Vec<u64> = Vec::new();
        match v.try_reserve(usize::MAX) {
            Err(err) => err,
            Ok(()) => panic!("reserving usize::MAX elements succeeded"),
        }
    }

    #[test]
    fn test_table_error_display() {
        let err = TableError::InvalidBucketCount(0);
        assert_eq!(err.to_string(), "Invalid bucket count: 0 (must be at least 1)");

        let err = TableError::AllocFailed(reserve_error());
        assert!(err.to_string().starts_with("Allocation failed: "));
    }

    #[test]
    fn test_table_error_from_reserve() {
        let err: TableError = reserve_error().into();
        assert!(matches!(err, TableError::AllocFailed(_)));
        assert!(err.source().is_some());
        assert!(TableError::InvalidBucketCount(0).source().is_none());
    }
}
