//! core/dataset.rs — Recorded move counts, one record per game.
//!
//! Input is a JSON array of arrays of integers:
//! `[[12, 30, 28], [15, 31], ...]` where `data[game][step]` is the number of
//! moves available at that step.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::{ProfileError, Result};

/// Per-step values of one recorded game.
pub type Record = Vec<i64>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Open and decode `path`. Non-integer values are decode errors.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let records: Vec<Record> =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                ProfileError::Json {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
        Ok(Self { records })
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let records: Vec<Record> =
            serde_json::from_str(text).map_err(|source| ProfileError::Json {
                path: PathBuf::from("<memory>"),
                source,
            })?;
        Ok(Self { records })
    }

    #[inline]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of steps in the longest record (0 when empty).
    pub fn longest_record(&self) -> usize {
        self.records.iter().map(Vec::len).max().unwrap_or(0)
    }
}
