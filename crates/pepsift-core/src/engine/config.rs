use crate::core::chem::descriptors::DescriptorSet;
use crate::core::pattern::{PatternError, SequencePattern};
use serde::Deserialize;

pub const DEFAULT_FILTER_BATCH: usize = 2500;
pub const DEFAULT_RENDER_BATCH: usize = 600;
pub const DEFAULT_WARMUP_BATCH: usize = 1000;

/// An inclusive numeric interval. A missing bound is unconstrained on that
/// side; with both bounds missing the range matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Range {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Range {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        // A NaN bound compares false on both sides and acts unconstrained.
        if self.min.is_some_and(|min| value < min) {
            return false;
        }
        if self.max.is_some_and(|max| value > max) {
            return false;
        }
        true
    }

    pub fn is_unconstrained(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// One inclusive range per descriptor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DescriptorRanges {
    pub charge: Range,
    pub isoelectric_point: Range,
    pub hydrophobicity: Range,
    pub boman_index: Range,
    pub hydrophobic_moment_ratio: Range,
}

impl DescriptorRanges {
    pub fn matches(&self, set: &DescriptorSet) -> bool {
        self.charge.contains(f64::from(set.charge))
            && self.isoelectric_point.contains(set.isoelectric_point)
            && self.hydrophobicity.contains(set.hydrophobicity)
            && self.boman_index.contains(set.boman_index)
            && self.hydrophobic_moment_ratio.contains(set.hydrophobic_moment_ratio)
    }

    pub fn is_unconstrained(&self) -> bool {
        self.charge.is_unconstrained()
            && self.isoelectric_point.is_unconstrained()
            && self.hydrophobicity.is_unconstrained()
            && self.boman_index.is_unconstrained()
            && self.hydrophobic_moment_ratio.is_unconstrained()
    }
}

/// A complete filter specification for one search pass.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    pub pattern: SequencePattern,
    pub ignore: Vec<SequencePattern>,
    pub ranges: DescriptorRanges,
    pub batch_size: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            pattern: SequencePattern::MatchAll,
            ignore: Vec::new(),
            ranges: DescriptorRanges::default(),
            batch_size: DEFAULT_FILTER_BATCH,
        }
    }
}

#[derive(Default)]
pub struct FilterConfigBuilder {
    pattern: Option<String>,
    ignore: Option<String>,
    ranges: DescriptorRanges,
    batch_size: Option<usize>,
}

impl FilterConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pattern(mut self, text: &str) -> Self {
        self.pattern = Some(text.to_string());
        self
    }

    pub fn ignore(mut self, list: &str) -> Self {
        self.ignore = Some(list.to_string());
        self
    }

    pub fn ranges(mut self, ranges: DescriptorRanges) -> Self {
        self.ranges = ranges;
        self
    }

    pub fn charge(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.ranges.charge = Range::new(min, max);
        self
    }

    pub fn isoelectric_point(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.ranges.isoelectric_point = Range::new(min, max);
        self
    }

    pub fn hydrophobicity(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.ranges.hydrophobicity = Range::new(min, max);
        self
    }

    pub fn boman_index(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.ranges.boman_index = Range::new(min, max);
        self
    }

    pub fn hydrophobic_moment_ratio(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.ranges.hydrophobic_moment_ratio = Range::new(min, max);
        self
    }

    pub fn batch_size(mut self, size: usize) -> Self {
        self.batch_size = Some(size);
        self
    }

    /// Compiles the pattern inputs and assembles the configuration. An
    /// invalid pattern is rejected here, before any filtering begins.
    pub fn build(self) -> Result<FilterConfig, PatternError> {
        let pattern = match &self.pattern {
            Some(text) => SequencePattern::compile(text)?,
            None => SequencePattern::MatchAll,
        };
        let ignore = match &self.ignore {
            Some(list) => SequencePattern::compile_list(list)?,
            None => Vec::new(),
        };
        Ok(FilterConfig {
            pattern,
            ignore,
            ranges: self.ranges,
            batch_size: self.batch_size.unwrap_or(DEFAULT_FILTER_BATCH),
        })
    }
}

/// Display-row construction settings: the highlight pattern and the marker
/// pair wrapped around every match.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub highlight: SequencePattern,
    pub mark_open: String,
    pub mark_close: String,
    pub batch_size: usize,
}

impl RenderConfig {
    pub fn new(highlight: SequencePattern, mark_open: &str, mark_close: &str) -> Self {
        Self {
            highlight,
            mark_open: mark_open.to_string(),
            mark_close: mark_close.to_string(),
            batch_size: DEFAULT_RENDER_BATCH,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(SequencePattern::MatchAll, "", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_bounds_are_inclusive() {
        let range = Range::new(Some(1.0), Some(10.0));
        assert!(range.contains(1.0));
        assert!(range.contains(10.0));
        assert!(range.contains(5.5));
        assert!(!range.contains(0.99));
        assert!(!range.contains(10.01));
    }

    #[test]
    fn half_open_ranges_ignore_the_missing_side() {
        let min_only = Range::new(Some(0.0), None);
        assert!(min_only.contains(f64::MAX));
        assert!(!min_only.contains(-0.1));

        let max_only = Range::new(None, Some(0.0));
        assert!(max_only.contains(f64::MIN));
        assert!(!max_only.contains(0.1));
    }

    #[test]
    fn unconstrained_range_matches_everything() {
        let range = Range::default();
        assert!(range.is_unconstrained());
        assert!(range.contains(-1e9));
        assert!(range.contains(1e9));
    }

    #[test]
    fn nan_bounds_act_unconstrained() {
        let range = Range::new(Some(f64::NAN), Some(f64::NAN));
        assert!(range.contains(0.0));
        assert!(range.contains(-123.4));
    }

    #[test]
    fn ranges_match_descriptor_sets_fieldwise() {
        let set = DescriptorSet::compute("KLAKLAK");
        let mut ranges = DescriptorRanges::default();
        assert!(ranges.matches(&set));

        ranges.charge = Range::new(Some(1.0), Some(10.0));
        assert!(ranges.matches(&set));

        ranges.charge = Range::new(Some(-10.0), Some(-1.0));
        assert!(!ranges.matches(&set));
    }

    #[test]
    fn exact_descriptor_value_on_a_bound_is_included() {
        let set = DescriptorSet::compute("KLAKLAK");
        let mut ranges = DescriptorRanges::default();
        ranges.charge = Range::new(Some(f64::from(set.charge)), Some(f64::from(set.charge)));
        ranges.hydrophobicity = Range::new(Some(set.hydrophobicity), Some(set.hydrophobicity));
        assert!(ranges.matches(&set));
    }

    #[test]
    fn builder_compiles_patterns_and_applies_defaults() {
        let config = FilterConfigBuilder::new()
            .pattern("LAK")
            .ignore("RR,GG")
            .charge(Some(0.0), None)
            .build()
            .unwrap();

        assert!(!config.pattern.is_match_all());
        assert_eq!(config.ignore.len(), 2);
        assert_eq!(config.batch_size, DEFAULT_FILTER_BATCH);
        assert!(config.ranges.isoelectric_point.is_unconstrained());
    }

    #[test]
    fn default_config_is_the_identity_filter() {
        let config = FilterConfig::default();
        assert!(config.pattern.is_match_all());
        assert!(config.ignore.is_empty());
        assert!(config.ranges.is_unconstrained());
    }

    #[test]
    fn ranges_deserialize_from_partial_toml_tables() {
        #[derive(Deserialize)]
        struct Wrapper {
            ranges: DescriptorRanges,
        }
        let parsed: Wrapper = serde_json::from_str(
            r#"{"ranges": {"charge": {"min": 1.0, "max": 10.0}, "hydrophobicity": {"min": 40.0}}}"#,
        )
        .unwrap();
        assert_eq!(parsed.ranges.charge, Range::new(Some(1.0), Some(10.0)));
        assert_eq!(parsed.ranges.hydrophobicity.max, None);
        assert!(parsed.ranges.boman_index.is_unconstrained());
    }
}
