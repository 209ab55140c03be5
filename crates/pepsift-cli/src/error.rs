use pepsift::core::io::delimited::DelimitedError;
use pepsift::core::io::fasta::FastaError;
use pepsift::core::io::json::JsonError;
use pepsift::core::pattern::PatternError;
use pepsift::engine::error::EngineError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("FASTA error: {0}")]
    Fasta(#[from] FastaError),

    #[error("JSON error: {0}")]
    Json(#[from] JsonError),

    #[error("Export error: {0}")]
    Export(#[from] DelimitedError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
