use crate::error::{CliError, Result};
use pepsift::engine::config::{DEFAULT_FILTER_BATCH, DEFAULT_RENDER_BATCH, DescriptorRanges};
use serde::Deserialize;
use std::path::Path;

/// A filter specification file. Every section is optional; explicit CLI
/// flags override whatever the file provides.
///
/// ```toml
/// pattern = "KXK"
/// ignore = "RRR,GGG"
///
/// [ranges.charge]
/// min = 1.0
/// max = 10.0
///
/// [ranges.hydrophobicity]
/// min = 40.0
///
/// [batch]
/// filter = 2500
/// render = 600
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterFileConfig {
    pub pattern: Option<String>,
    pub ignore: Option<String>,
    pub ranges: DescriptorRanges,
    pub batch: BatchSection,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchSection {
    pub filter: usize,
    pub render: usize,
}

impl Default for BatchSection {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER_BATCH,
            render: DEFAULT_RENDER_BATCH,
        }
    }
}

pub fn load(path: &Path) -> Result<FilterFileConfig> {
    let text = std::fs::read_to_string(path).map_err(CliError::Io)?;
    toml::from_str(&text)
        .map_err(|e| CliError::Config(format!("failed to parse '{}': {e}", path.display())))
}
