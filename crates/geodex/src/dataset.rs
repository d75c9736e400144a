//! Loading a [`StaticDataset`] from a JSON array of building records.
//!
//! Rating labels outside the scale are kept and sort ahead of every grade.
//! Ids must be unique, because cursors resume on the `(sort value, id)` pair.

use geodex_core::{db::StaticDataset, model::building::Building};
use std::{collections::BTreeSet, fs::File, io::Read, path::Path};
use thiserror::Error as ThisError;

///
/// DatasetError
///

#[derive(Debug, ThisError)]
pub enum DatasetError {
    #[error("failed to read dataset '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate building id '{id}'")]
    DuplicateId { id: String },
}

/// Parse a JSON array of records.
pub fn from_json_str(input: &str) -> Result<StaticDataset, DatasetError> {
    let records: Vec<Building> = serde_json::from_str(input)?;

    from_records(records)
}

/// Parse a JSON array of records from any reader.
pub fn from_reader(reader: impl Read) -> Result<StaticDataset, DatasetError> {
    let records: Vec<Building> = serde_json::from_reader(reader)?;

    from_records(records)
}

/// Build a dataset from already-parsed records, rejecting repeated ids.
pub fn from_records(records: Vec<Building>) -> Result<StaticDataset, DatasetError> {
    let mut seen = BTreeSet::new();
    if let Some(repeat) = records.iter().find(|&b| !seen.insert(b.id.as_str())) {
        return Err(DatasetError::DuplicateId {
            id: repeat.id.clone(),
        });
    }
    tracing::debug!(records = records.len(), "dataset loaded");

    Ok(StaticDataset::from(records))
}

/// Read and parse a JSON dataset file.
pub fn from_path(path: impl AsRef<Path>) -> Result<StaticDataset, DatasetError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;

    from_reader(std::io::BufReader::new(file))
}

///
/// TESTS
///
