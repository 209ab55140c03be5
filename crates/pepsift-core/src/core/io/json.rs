use crate::core::seq::record::SequenceRecord;
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Wire shape of the data-access collaborator: a JSON array of objects with
/// optional `header`/`sequence` members. Missing members default to empty.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    header: String,
    #[serde(default)]
    sequence: String,
}

/// Reads a collaborator JSON array into normalized records.
pub fn read_records(reader: impl Read) -> Result<Vec<SequenceRecord>, JsonError> {
    let raw: Vec<RawRecord> = serde_json::from_reader(reader)?;
    Ok(raw
        .into_iter()
        .map(|record| SequenceRecord::new(&record.header, &record.sequence))
        .collect())
}

pub fn read_records_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<SequenceRecord>, JsonError> {
    let file = File::open(path)?;
    read_records(BufReader::new(file))
}
