use crate::core::seq::record::SequenceRecord;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing sequence file formats.
///
/// This trait provides a common API for sequence collection I/O. Implementors
/// handle format-specific parsing and serialization; records are normalized
/// on construction, so every reader yields canonical sequences and
/// single-line headers.
pub trait SequenceFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a sequence collection from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<SequenceRecord>, Self::Error>;

    /// Writes a sequence collection to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(records: &[SequenceRecord], writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads a sequence collection from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<SequenceRecord>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a sequence collection to a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(records: &[SequenceRecord], path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(records, &mut writer)
    }
}
