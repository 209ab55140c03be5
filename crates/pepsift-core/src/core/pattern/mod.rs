use regex::Regex;
use thiserror::Error;

/// Character class substituted for the literal `X` wildcard token.
pub const WILDCARD_CLASS: &str = "[A-Z]";

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid search pattern '{pattern}': {source}")]
    Invalid {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Second compilation stage: rewrite every literal `X` in already-escaped
/// pattern text as the canonical-alphabet wildcard class.
///
/// The first stage ([`regex::escape`]) never introduces an `X`, so the
/// substitution cannot collide with escape sequences.
pub fn expand_wildcards(escaped: &str) -> String {
    escaped.replace('X', WILDCARD_CLASS)
}

/// A user-supplied sequence pattern in compiled form.
///
/// Blank input is the match-everything sentinel. Anything else goes through
/// the two-stage compile — metacharacter escaping, then `X` wildcard
/// expansion — before being handed to the regex engine. Input is uppercased
/// first, which together with the normalized sequences makes matching
/// case-insensitive.
#[derive(Debug, Clone, Default)]
pub enum SequencePattern {
    #[default]
    MatchAll,
    Compiled(Regex),
}

impl SequencePattern {
    pub fn compile(text: &str) -> Result<Self, PatternError> {
        let literal = text.trim().to_ascii_uppercase();
        if literal.is_empty() {
            return Ok(Self::MatchAll);
        }
        let translated = expand_wildcards(&regex::escape(&literal));
        let regex = Regex::new(&translated).map_err(|source| PatternError::Invalid {
            pattern: literal,
            source,
        })?;
        Ok(Self::Compiled(regex))
    }

    /// Compiles a comma-separated ignore list; blank items are dropped.
    pub fn compile_list(list: &str) -> Result<Vec<Self>, PatternError> {
        list.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(Self::compile)
            .collect()
    }

    pub fn is_match_all(&self) -> bool {
        matches!(self, Self::MatchAll)
    }

    pub fn is_match(&self, sequence: &str) -> bool {
        match self {
            Self::MatchAll => true,
            Self::Compiled(regex) => regex.is_match(sequence),
        }
    }

    /// Wraps every non-overlapping match with the given marker pair. The
    /// match-everything sentinel leaves the sequence unmarked.
    pub fn highlight(&self, sequence: &str, open: &str, close: &str) -> String {
        match self {
            Self::MatchAll => sequence.to_string(),
            Self::Compiled(regex) => regex
                .replace_all(sequence, |captures: &regex::Captures| {
                    format!("{open}{}{close}", &captures[0])
                })
                .into_owned(),
        }
    }
}
