/// The 20 canonical single-letter residue codes, in alphabetical order.
///
/// This is the working alphabet of the whole crate: sequence normalization
/// drops every character outside this set, and the usage statistics iterate
/// over it in this order.
pub const CANONICAL_ALPHABET: [char; 20] = [
    'A', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W',
    'Y',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AminoAcid {
    // --- Aliphatic, Nonpolar ---
    Alanine,    // Alanine (A)
    Glycine,    // Glycine (G)
    Isoleucine, // Isoleucine (I)
    Leucine,    // Leucine (L)
    Proline,    // Proline (P)
    Valine,     // Valine (V)

    // --- Aromatic ---
    Phenylalanine, // Phenylalanine (F)
    Tryptophan,    // Tryptophan (W)
    Tyrosine,      // Tyrosine (Y)

    // --- Polar, Uncharged ---
    Asparagine, // Asparagine (N)
    Cysteine,   // Cysteine (C)
    Glutamine,  // Glutamine (Q)
    Serine,     // Serine (S)
    Threonine,  // Threonine (T)
    Methionine, // Methionine (M)

    // --- Positively Charged (Basic) ---
    Arginine,  // Arginine (R)
    Histidine, // Histidine (H)
    Lysine,    // Lysine (K)

    // --- Negatively Charged (Acidic) ---
    AsparticAcid, // Aspartic Acid (D)
    GlutamicAcid, // Glutamic Acid (E)
}

impl AminoAcid {
    /// Resolves a canonical single-letter code (uppercase) to its residue.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'A' => Some(Self::Alanine),
            'C' => Some(Self::Cysteine),
            'D' => Some(Self::AsparticAcid),
            'E' => Some(Self::GlutamicAcid),
            'F' => Some(Self::Phenylalanine),
            'G' => Some(Self::Glycine),
            'H' => Some(Self::Histidine),
            'I' => Some(Self::Isoleucine),
            'K' => Some(Self::Lysine),
            'L' => Some(Self::Leucine),
            'M' => Some(Self::Methionine),
            'N' => Some(Self::Asparagine),
            'P' => Some(Self::Proline),
            'Q' => Some(Self::Glutamine),
            'R' => Some(Self::Arginine),
            'S' => Some(Self::Serine),
            'T' => Some(Self::Threonine),
            'V' => Some(Self::Valine),
            'W' => Some(Self::Tryptophan),
            'Y' => Some(Self::Tyrosine),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            Self::Alanine => 'A',
            Self::Cysteine => 'C',
            Self::AsparticAcid => 'D',
            Self::GlutamicAcid => 'E',
            Self::Phenylalanine => 'F',
            Self::Glycine => 'G',
            Self::Histidine => 'H',
            Self::Isoleucine => 'I',
            Self::Lysine => 'K',
            Self::Leucine => 'L',
            Self::Methionine => 'M',
            Self::Asparagine => 'N',
            Self::Proline => 'P',
            Self::Glutamine => 'Q',
            Self::Arginine => 'R',
            Self::Serine => 'S',
            Self::Threonine => 'T',
            Self::Valine => 'V',
            Self::Tryptophan => 'W',
            Self::Tyrosine => 'Y',
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            Self::Alanine => "Alanine",
            Self::Cysteine => "Cysteine",
            Self::AsparticAcid => "Aspartic Acid",
            Self::GlutamicAcid => "Glutamic Acid",
            Self::Phenylalanine => "Phenylalanine",
            Self::Glycine => "Glycine",
            Self::Histidine => "Histidine",
            Self::Isoleucine => "Isoleucine",
            Self::Lysine => "Lysine",
            Self::Leucine => "Leucine",
            Self::Methionine => "Methionine",
            Self::Asparagine => "Asparagine",
            Self::Proline => "Proline",
            Self::Glutamine => "Glutamine",
            Self::Arginine => "Arginine",
            Self::Serine => "Serine",
            Self::Threonine => "Threonine",
            Self::Valine => "Valine",
            Self::Tryptophan => "Tryptophan",
            Self::Tyrosine => "Tyrosine",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_covers_all_twenty_residues_exactly_once() {
        assert_eq!(CANONICAL_ALPHABET.len(), 20);
        for code in CANONICAL_ALPHABET {
            assert!(AminoAcid::from_code(code).is_some(), "missing {code}");
        }
    }

    #[test]
    fn code_round_trips_through_from_code() {
        for code in CANONICAL_ALPHABET {
            let residue = AminoAcid::from_code(code).unwrap();
            assert_eq!(residue.code(), code);
        }
    }

    #[test]
    fn from_code_rejects_non_canonical_characters() {
        assert_eq!(AminoAcid::from_code('B'), None);
        assert_eq!(AminoAcid::from_code('X'), None);
        assert_eq!(AminoAcid::from_code('a'), None);
        assert_eq!(AminoAcid::from_code('*'), None);
    }

    #[test]
    fn full_names_are_unique() {
        let mut names: Vec<_> = CANONICAL_ALPHABET
            .iter()
            .map(|&c| AminoAcid::from_code(c).unwrap().full_name())
            .collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 20);
    }
}
