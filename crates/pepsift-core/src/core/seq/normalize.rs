use crate::core::chem::residues::AminoAcid;

/// Normalizes raw sequence text to the canonical residue alphabet.
///
/// Uppercases the input and drops every character that is not one of the 20
/// canonical single-letter codes. There are no error conditions: empty or
/// garbage input yields an empty string, and the operation is idempotent.
pub fn clean_sequence(raw: &str) -> String {
    raw.chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|&c| AminoAcid::from_code(c).is_some())
        .collect()
}

/// Normalizes raw header text by removing line breaks (`\r\n` and `\n`).
/// Everything else passes through unchanged.
pub fn clean_header(raw: &str) -> String {
    raw.replace("\r\n", "").replace('\n', "")
}
