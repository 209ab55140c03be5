use thiserror::Error;

use crate::core::pattern::PatternError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Pattern compilation failed: {source}")]
    Pattern {
        #[from]
        source: PatternError,
    },

    #[error("Run superseded by a newer request")]
    Superseded,

    #[error("Internal logic error: {0}")]
    Internal(String),
}
