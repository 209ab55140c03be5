use super::traits::SequenceFile;
use crate::core::seq::record::SequenceRecord;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// FASTA-like flat files, in the two layouts the fallback store uses.
///
/// If any non-blank line starts with `>`, the file is parsed as multi-line
/// FASTA: a `>` line opens a record and the following lines accumulate into
/// its sequence. Otherwise the file is read as alternating header/sequence
/// line pairs. Blank lines are skipped in both modes.
pub struct FastaFile;

impl FastaFile {
    fn parse_lines(lines: Vec<String>) -> Vec<SequenceRecord> {
        if lines.iter().any(|line| line.starts_with('>')) {
            Self::parse_headed(lines)
        } else {
            Self::parse_pairs(lines)
        }
    }

    fn parse_headed(lines: Vec<String>) -> Vec<SequenceRecord> {
        let mut records = Vec::new();
        let mut header: Option<String> = None;
        let mut body = String::new();

        for line in lines {
            if line.starts_with('>') {
                if let Some(header) = header.take() {
                    records.push(SequenceRecord::new(&header, &body));
                }
                header = Some(line.trim().to_string());
                body.clear();
            } else {
                body.push_str(line.trim());
            }
        }
        if let Some(header) = header {
            records.push(SequenceRecord::new(&header, &body));
        }
        records
    }

    fn parse_pairs(lines: Vec<String>) -> Vec<SequenceRecord> {
        lines
            .chunks(2)
            .map(|pair| {
                let header = pair[0].trim();
                let sequence = pair.get(1).map(String::as_str).unwrap_or("");
                SequenceRecord::new(header, sequence)
            })
            .collect()
    }
}

impl SequenceFile for FastaFile {
    type Error = FastaError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<SequenceRecord>, Self::Error> {
        let mut lines = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                lines.push(line);
            }
        }
        Ok(Self::parse_lines(lines))
    }

    fn write_to(records: &[SequenceRecord], writer: &mut impl Write) -> Result<(), Self::Error> {
        writer.write_all(to_fasta_text(records).as_bytes())?;
        Ok(())
    }
}

/// Serializes records to FASTA-like text: a `>`-prefixed header line (the
/// prefix is added only when missing) followed by the sequence line.
pub fn to_fasta_text(records: &[SequenceRecord]) -> String {
    let mut out = String::new();
    for record in records {
        let header = record.header.trim();
        if !header.starts_with('>') {
            out.push('>');
        }
        out.push_str(header);
        out.push('\n');
        out.push_str(&record.sequence);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(text: &str) -> Vec<SequenceRecord> {
        FastaFile::read_from(&mut Cursor::new(text)).unwrap()
    }

    #[test]
    fn headed_mode_joins_wrapped_sequence_lines() {
        let records = read(">first\nKLAK\nLAK\n>second\nRRR\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].header, ">first");
        assert_eq!(records[0].sequence, "KLAKLAK");
        assert_eq!(records[1].header, ">second");
        assert_eq!(records[1].sequence, "RRR");
    }

    #[test]
    fn headed_mode_skips_blank_lines_and_normalizes() {
        let records = read(">p1\n\nkl ak\n\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sequence, "KLAK");
    }

    #[test]
    fn pair_mode_reads_alternating_lines() {
        let records = read("first\nKLAK\nsecond\nRRR\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].header, "first");
        assert_eq!(records[0].sequence, "KLAK");
        assert_eq!(records[1].header, "second");
        assert_eq!(records[1].sequence, "RRR");
    }

    #[test]
    fn pair_mode_tolerates_a_trailing_header() {
        let records = read("only-header\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].header, "only-header");
        assert_eq!(records[0].sequence, "");
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(read("").is_empty());
        assert!(read("\n\n").is_empty());
    }

    #[test]
    fn to_fasta_text_adds_the_marker_only_when_missing() {
        let records = vec![
            SequenceRecord::new(">kept", "KLAK"),
            SequenceRecord::new("added", "RRR"),
        ];
        assert_eq!(to_fasta_text(&records), ">kept\nKLAK\n>added\nRRR\n");
    }

    #[test]
    fn round_trip_through_path_helpers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("subset.fasta");
        let records = vec![
            SequenceRecord::new(">a", "KLAK"),
            SequenceRecord::new(">b", "DDDD"),
        ];

        FastaFile::write_to_path(&records, &path).unwrap();
        let reread = FastaFile::read_from_path(&path).unwrap();
        assert_eq!(reread, records);
    }
}
