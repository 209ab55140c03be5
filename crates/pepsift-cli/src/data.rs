use crate::error::Result;
use pepsift::core::io::fasta::FastaFile;
use pepsift::core::io::json;
use pepsift::core::io::traits::SequenceFile;
use pepsift::core::seq::record::SequenceRecord;
use std::path::Path;
use tracing::{info, warn};

/// Upper bound the data-access layer enforces on one bulk load.
pub const MAX_RECORDS: usize = 200_000;

/// Loads a collection from disk: `.json` files are read as the collaborator
/// record array, everything else as a FASTA-like flat file. Oversized
/// collections are truncated to [`MAX_RECORDS`].
pub fn load_collection(path: &Path) -> Result<Vec<SequenceRecord>> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let mut records = if is_json {
        json::read_records_from_path(path)?
    } else {
        FastaFile::read_from_path(path)?
    };

    if records.len() > MAX_RECORDS {
        warn!(
            loaded = records.len(),
            cap = MAX_RECORDS,
            "Collection exceeds the load cap; truncating."
        );
        records.truncate(MAX_RECORDS);
    }

    info!(records = records.len(), path = %path.display(), "Collection loaded.");
    Ok(records)
}
