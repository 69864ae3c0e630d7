//! Score loading error definitions

use std::error::Error;
use std::fmt;

use crate::infrastructure::hash_table::TableError;

/// Score loading error types
#[derive(Debug)]
pub enum ScoreError {
    /// I/O error while reading a score file
    IoError(std::io::Error),
    /// The backing table could not be built or grown
    Table(TableError),
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::IoError(err) => write!(f, "I/O error: {}", err),
            ScoreError::Table(err) => write!(f, "Table error: {}", err),
        }
    }
}

impl Error for ScoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ScoreError::IoError(err) => Some(err),
            ScoreError::Table(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ScoreError {
    fn from(err: std::io::Error) -> Self {
        ScoreError::IoError(err)
    }
}

impl From<TableError> for ScoreError {
    fn from(err: TableError) -> Self {
        ScoreError::Table(err)
    }
}

/// Result type for score loading
pub type ScoreResult<T> = Result<T, ScoreError>;
