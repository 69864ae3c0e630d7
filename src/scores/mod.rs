//! Score board: user scores kept in a string-keyed hash table
//!
//! Score files hold one `score username` record per line. Reading stops at
//! the first line that does not parse; records after it are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, warn};
use serde::Serialize;

use crate::config::TableConfig;
use crate::infrastructure::hash::StrHasher;
use crate::infrastructure::hash_table::HashTable;

pub mod error;
pub use error::{ScoreError, ScoreResult};

/// One user's score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreRecord {
    pub username: String,
    pub score: i64,
}

/// Scores keyed by username
///
/// A username recorded twice keeps its first score; later records for it
/// are counted as rejected.
pub struct ScoreBoard {
    table: HashTable<String, i64, StrHasher>,
    rejected: Vec<ScoreRecord>,
    stopped_at: Option<usize>,
}

impl ScoreBoard {
    pub fn new(config: &TableConfig) -> ScoreResult<Self> {
        Ok(ScoreBoard {
            table: config.build_table()?,
            rejected: Vec::new(),
            stopped_at: None,
        })
    }

    /// Load scores from a file
    pub fn load(path: impl AsRef<Path>, config: &TableConfig) -> ScoreResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let board = Self::from_reader(BufReader::new(file), config)?;
        info!(
            "loaded {} scores from {} ({} rejected)",
            board.len(),
            path.display(),
            board.rejected.len()
        );
        Ok(board)
    }

    /// Load scores from any buffered reader
    pub fn from_reader<R: BufRead>(reader: R, config: &TableConfig) -> ScoreResult<Self> {
        let mut board = Self::new(config)?;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let Some(record) = parse_line(&line) else {
                warn!("stopped reading scores at malformed line {}: {:?}", index + 1, line);
                board.stopped_at = Some(index + 1);
                break;
            };
            board.record(record)?;
        }

        Ok(board)
    }

    /// Record a score; returns false if the username already has one
    pub fn record(&mut self, record: ScoreRecord) -> ScoreResult<bool> {
        let inserted = self.table.insert(record.username.clone(), record.score)?;
        if !inserted {
            warn!("duplicate score for {} ignored", record.username);
            self.rejected.push(record);
        }
        Ok(inserted)
    }

    pub fn score(&self, username: &str) -> Option<i64> {
        self.table.get(&username.to_string()).copied()
    }

    /// Drop a user's score; returns false if the user had none
    pub fn forget(&mut self, username: &str) -> bool {
        self.table.delete(&username.to_string())
    }

    pub fn len(&self) -> usize {
        self.table.size()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Records rejected as duplicates, in file order
    pub fn rejected(&self) -> &[ScoreRecord] {
        &self.rejected
    }

    /// 1-based line number where reading stopped, if a line failed to parse
    pub fn stopped_at(&self) -> Option<usize> {
        self.stopped_at
    }

    pub fn table(&self) -> &HashTable<String, i64, StrHasher> {
        &self.table
    }

    /// All records sorted by username
    pub fn records(&self) -> Vec<ScoreRecord> {
        let mut records: Vec<ScoreRecord> = self
            .table
            .iter()
            .map(|(username, score)| ScoreRecord {
                username: username.clone(),
                score: *score,
            })
            .collect();
        records.sort_by(|a, b| a.username.cmp(&b.username));
        records
    }
}

/// Parse `score username`; extra fields after the username are ignored
fn parse_line(line: &str) -> Option<ScoreRecord> {
    let mut fields = line.split_whitespace();
    let score = fields.next()?.parse().ok()?;
    let username = fields.next()?.to_string();
    Some(ScoreRecord { username, score })
}
