use crate::core::seq::record::SequenceRecord;
use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DelimitedError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),
    #[error("exported text is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Serializes records to delimited text: the fixed header line
/// `header,sequence`, then one row per record in input order with every
/// field double-quoted (embedded quotes doubled).
pub fn to_delimited_text(records: &[SequenceRecord]) -> Result<String, DelimitedError> {
    let mut buffer: Vec<u8> = b"header,sequence\n".to_vec();
    {
        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Always)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(&mut buffer);
        for record in records {
            writer.write_record([record.header.as_str(), record.sequence.as_str()])?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8(buffer)?)
}
