use phf::{Map, Set, phf_map, phf_set};

/// Side-chain pKa of the basic residues (positive charge contribution).
pub static BASIC_SIDE_CHAIN_PKA: Map<char, f64> = phf_map! {
    'R' => 12.48,
    'K' => 10.79,
    'H' => 6.04,
};

/// Side-chain pKa of the acidic residues (negative charge contribution).
pub static ACIDIC_SIDE_CHAIN_PKA: Map<char, f64> = phf_map! {
    'D' => 3.86,
    'E' => 4.25,
    'C' => 8.33,
    'Y' => 10.07,
};

/// pKa of the free alpha-amino group at the N-terminus.
pub const N_TERMINUS_PKA: f64 = 9.69;

/// pKa of the free alpha-carboxyl group at the C-terminus.
pub const C_TERMINUS_PKA: f64 = 2.34;

/// Residues counted as hydrophobic by the percentage descriptor.
pub static HYDROPHOBIC_RESIDUES: Set<char> = phf_set! {
    'A', 'I', 'L', 'F', 'V', 'M', 'C', 'W',
};

/// Kyte-Doolittle hydropathy scale, signed, used to weight the per-residue
/// helix vectors of the hydrophobic moment.
pub static HYDROPATHY: Map<char, f64> = phf_map! {
    'A' => 1.8,
    'R' => -4.5,
    'N' => -3.5,
    'D' => -3.5,
    'C' => 2.5,
    'Q' => -3.5,
    'E' => -3.5,
    'G' => -0.4,
    'H' => -3.2,
    'I' => 4.5,
    'L' => 3.8,
    'K' => -3.9,
    'M' => 1.9,
    'F' => 2.8,
    'P' => -1.6,
    'S' => -0.8,
    'T' => -0.7,
    'W' => -0.9,
    'Y' => -1.3,
    'V' => 4.2,
};

/// Per-residue potential-interaction energies for the Boman index.
/// Proline has no entry and contributes zero.
pub static BOMAN_ENERGY: Map<char, f64> = phf_map! {
    'A' => 1.81,
    'I' => 4.92,
    'L' => 4.92,
    'W' => 2.33,
    'F' => 2.98,
    'V' => 4.04,
    'M' => 2.35,
    'Y' => -0.14,
    'T' => -2.57,
    'S' => -3.40,
    'C' => 1.28,
    'G' => 0.94,
    'N' => -6.64,
    'D' => -8.75,
    'Q' => -5.54,
    'E' => -6.81,
    'H' => -4.66,
    'K' => -5.55,
    'R' => -14.92,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chem::residues::CANONICAL_ALPHABET;

    #[test]
    fn charged_residue_tables_are_disjoint() {
        for key in BASIC_SIDE_CHAIN_PKA.keys() {
            assert!(!ACIDIC_SIDE_CHAIN_PKA.contains_key(key));
        }
    }

    #[test]
    fn hydropathy_covers_the_full_alphabet() {
        for code in CANONICAL_ALPHABET {
            assert!(HYDROPATHY.contains_key(&code), "missing {code}");
        }
    }

    #[test]
    fn boman_table_omits_only_proline() {
        for code in CANONICAL_ALPHABET {
            if code == 'P' {
                assert!(!BOMAN_ENERGY.contains_key(&code));
            } else {
                assert!(BOMAN_ENERGY.contains_key(&code), "missing {code}");
            }
        }
    }

    #[test]
    fn hydrophobic_set_has_eight_members_within_the_alphabet() {
        assert_eq!(HYDROPHOBIC_RESIDUES.len(), 8);
        for code in &HYDROPHOBIC_RESIDUES {
            assert!(CANONICAL_ALPHABET.contains(code));
        }
    }
}
