use super::residues::AminoAcid;
use crate::core::seq::normalize::clean_sequence;
use std::fmt::Write;

/// Placeholder shown when a pool has no countable residues.
pub const EMPTY_USAGE: &str = "—";

/// Summarizes residue usage over a pooled (concatenated) sequence.
///
/// Counts each alphabet residue in the normalized pool, sorts descending by
/// count (ties keep alphabet order — the sort is stable), keeps up to the
/// top 5 nonzero entries, and formats each as `FullName(Code): pct%` with the
/// percentage carried to 2 decimals. Returns [`EMPTY_USAGE`] when the pool is
/// empty or nothing was counted.
pub fn most_used_residues(pool: &str, alphabet: &[char]) -> String {
    let clean = clean_sequence(pool);
    if clean.is_empty() {
        return EMPTY_USAGE.to_string();
    }

    let mut usage: Vec<(char, usize)> = alphabet
        .iter()
        .map(|&code| (code, clean.chars().filter(|&c| c == code).count()))
        .collect();
    usage.sort_by(|a, b| b.1.cmp(&a.1));

    let total = clean.chars().count() as f64;
    let mut summary = String::new();
    for (code, count) in usage.into_iter().take(5).filter(|(_, count)| *count > 0) {
        if !summary.is_empty() {
            summary.push(' ');
        }
        let name = AminoAcid::from_code(code)
            .map(|residue| residue.full_name().to_string())
            .unwrap_or_else(|| code.to_string());
        let pct = count as f64 * 100.0 / total;
        let _ = write!(summary, "{name}({code}): {pct:.2}%");
    }

    if summary.is_empty() {
        EMPTY_USAGE.to_string()
    } else {
        summary
    }
}
