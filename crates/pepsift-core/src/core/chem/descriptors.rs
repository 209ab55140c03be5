use super::tables::{
    ACIDIC_SIDE_CHAIN_PKA, BASIC_SIDE_CHAIN_PKA, BOMAN_ENERGY, C_TERMINUS_PKA, HYDROPATHY,
    HYDROPHOBIC_RESIDUES, N_TERMINUS_PKA,
};
use crate::core::seq::normalize::clean_sequence;
use nalgebra::Vector2;
use serde::Serialize;

/// pH used when a descriptor set is computed without an explicit pH.
pub const PHYSIOLOGICAL_PH: f64 = 7.0;

/// Angular advance per residue position on an idealized alpha-helix.
const HELIX_TURN_DEGREES: f64 = 100.0;

/// Theoretical maximum mean moment (poly-Leu); the ratio descriptor is
/// expressed relative to this value.
const MOMENT_NORMALIZATION: f64 = 2.88;

/// The pI scan walks an integer centi-pH grid so the 0.01 step stays exact.
const PI_SCAN_STEPS: u32 = 1400;

/// The five physicochemical descriptors of a sequence, plus its length.
///
/// A descriptor set is a pure function of the cleaned sequence: two records
/// sharing a sequence share one descriptor set. Rounding is part of the
/// contract — the isoelectric point carries 1 decimal, the other fractional
/// descriptors 2, and the charge is the nearest integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptorSet {
    pub charge: i32,
    pub isoelectric_point: f64,
    pub hydrophobicity: f64,
    pub boman_index: f64,
    pub hydrophobic_moment_ratio: f64,
    pub length: usize,
}

impl DescriptorSet {
    /// Scores a raw sequence, normalizing it first. An empty normalized
    /// sequence yields the all-zero set (the defined degenerate case).
    pub fn compute(sequence: &str) -> Self {
        Self::compute_clean(&clean_sequence(sequence))
    }

    /// Scores a sequence that is already normalized. Callers holding records
    /// from the working collection can skip the redundant cleanup.
    pub(crate) fn compute_clean(clean: &str) -> Self {
        if clean.is_empty() {
            return Self::default();
        }
        Self {
            charge: net_charge_clean(clean, PHYSIOLOGICAL_PH).round() as i32,
            isoelectric_point: isoelectric_point_clean(clean),
            hydrophobicity: hydrophobicity_clean(clean),
            boman_index: boman_index_clean(clean),
            hydrophobic_moment_ratio: hydrophobic_moment_ratio_clean(clean),
            length: clean.chars().count(),
        }
    }
}

/// Net charge at the given pH under the Henderson-Hasselbalch partial-charge
/// model: each basic side chain contributes `10^pKa / (10^pH + 10^pKa)`
/// positive, each acidic side chain `10^pH / (10^pH + 10^pKa)` negative, and
/// the two termini contribute once each. Returns the unrounded sum; `0` for
/// an empty normalized sequence.
pub fn net_charge(sequence: &str, ph: f64) -> f64 {
    let clean = clean_sequence(sequence);
    if clean.is_empty() {
        return 0.0;
    }
    net_charge_clean(&clean, ph)
}

fn net_charge_clean(clean: &str, ph: f64) -> f64 {
    let ph_term = 10f64.powf(ph);
    let mut positive = 0.0;
    let mut negative = 0.0;

    for residue in clean.chars() {
        if let Some(pka) = BASIC_SIDE_CHAIN_PKA.get(&residue) {
            let pka_term = 10f64.powf(*pka);
            positive += pka_term / (ph_term + pka_term);
        } else if let Some(pka) = ACIDIC_SIDE_CHAIN_PKA.get(&residue) {
            negative += ph_term / (ph_term + 10f64.powf(*pka));
        }
    }

    let n_term = 10f64.powf(N_TERMINUS_PKA);
    positive += n_term / (ph_term + n_term);
    negative += ph_term / (ph_term + 10f64.powf(C_TERMINUS_PKA));

    positive - negative
}

/// Isoelectric point: the first pH on the 0.00..14.00 grid (0.01 steps,
/// scanning upward) where the net charge falls within [-0.1, +0.1], rounded
/// to 1 decimal. Returns `0` when the sequence is empty or no crossing is
/// found in range.
pub fn isoelectric_point(sequence: &str) -> f64 {
    let clean = clean_sequence(sequence);
    if clean.is_empty() {
        return 0.0;
    }
    isoelectric_point_clean(&clean)
}

fn isoelectric_point_clean(clean: &str) -> f64 {
    for step in 0..PI_SCAN_STEPS {
        let ph = f64::from(step) / 100.0;
        let charge = net_charge_clean(clean, ph);
        if (-0.1..=0.1).contains(&charge) {
            return round1(ph);
        }
    }
    0.0
}

/// Percentage of residues in the hydrophobic set {A, I, L, F, V, M, C, W},
/// 2 decimals; `0` for an empty normalized sequence.
pub fn hydrophobicity(sequence: &str) -> f64 {
    let clean = clean_sequence(sequence);
    if clean.is_empty() {
        return 0.0;
    }
    hydrophobicity_clean(&clean)
}

fn hydrophobicity_clean(clean: &str) -> f64 {
    let total = clean.chars().count();
    let hydrophobic = clean
        .chars()
        .filter(|c| HYDROPHOBIC_RESIDUES.contains(c))
        .count();
    round2(hydrophobic as f64 / total as f64 * 100.0)
}

/// Normalized hydrophobic moment, as a percentage of the poly-Leu maximum.
///
/// Each residue is a unit vector on the idealized helix (100° per position;
/// the residue at 0-based index `j` sits at angle `(j + 2) * 100°`), weighted
/// by its signed Kyte-Doolittle hydropathy. The resultant magnitude is
/// averaged over the length, normalized by 2.88, and expressed as a
/// percentage with 2 decimals.
pub fn hydrophobic_moment_ratio(sequence: &str) -> f64 {
    let clean = clean_sequence(sequence);
    if clean.is_empty() {
        return 0.0;
    }
    hydrophobic_moment_ratio_clean(&clean)
}

fn hydrophobic_moment_ratio_clean(clean: &str) -> f64 {
    let mut resultant = Vector2::zeros();
    let mut length = 0usize;

    for (index, residue) in clean.chars().enumerate() {
        length += 1;
        let Some(weight) = HYDROPATHY.get(&residue) else {
            continue;
        };
        let angle = ((index + 2) as f64 * HELIX_TURN_DEGREES).to_radians();
        resultant += *weight * Vector2::new(angle.cos(), angle.sin());
    }

    let mean_moment = resultant.norm() / length as f64;
    round2(mean_moment / MOMENT_NORMALIZATION * 100.0)
}

/// Boman index: the per-residue interaction-energy sum divided by the
/// length, negated, 2 decimals. Residues without a table entry (Proline)
/// contribute zero. Returns `0` for an empty normalized sequence.
pub fn boman_index(sequence: &str) -> f64 {
    let clean = clean_sequence(sequence);
    if clean.is_empty() {
        return 0.0;
    }
    boman_index_clean(&clean)
}

fn boman_index_clean(clean: &str) -> f64 {
    let total = clean.chars().count();
    let sum: f64 = clean
        .chars()
        .filter_map(|c| BOMAN_ENERGY.get(&c))
        .sum();
    round2(-sum / total as f64)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_scores_zero_everywhere() {
        assert_eq!(net_charge("", 7.0), 0.0);
        assert_eq!(isoelectric_point(""), 0.0);
        assert_eq!(hydrophobicity(""), 0.0);
        assert_eq!(boman_index(""), 0.0);
        assert_eq!(hydrophobic_moment_ratio(""), 0.0);
        assert_eq!(DescriptorSet::compute("!!!"), DescriptorSet::default());
    }

    #[test]
    fn net_charge_of_cationic_peptide_is_positive() {
        // Three lysines, no acidic side chains: close to +3 at pH 7.
        let charge = net_charge("KLAKLAK", 7.0);
        assert!(charge > 2.9 && charge < 3.1, "charge was {charge}");
    }

    #[test]
    fn net_charge_of_acidic_peptide_is_negative() {
        let charge = net_charge("DDDDDDD", 7.0);
        assert!(charge < -6.5 && charge > -7.5, "charge was {charge}");
    }

    #[test]
    fn net_charge_normalizes_raw_input() {
        assert_eq!(net_charge("klak-lak", 7.0), net_charge("KLAKLAK", 7.0));
    }

    #[test]
    fn isoelectric_point_is_where_net_charge_vanishes() {
        for sequence in ["KLAKLAK", "DDDD", "ACDEFGHIKLMNPQRSTVWY"] {
            let pi = isoelectric_point(sequence);
            assert!((0.0..=14.0).contains(&pi));
            // The grid hit was within +/-0.1 before 1-decimal rounding, so
            // the rounded value stays close to the zero crossing.
            let residual = net_charge(sequence, pi);
            assert!(residual.abs() < 0.2, "{sequence}: residual {residual}");
        }
    }

    #[test]
    fn isoelectric_point_of_basic_peptide_is_high() {
        let pi = isoelectric_point("KLAKLAK");
        assert!(pi > 10.0 && pi < 12.0, "pI was {pi}");
    }

    #[test]
    fn isoelectric_point_of_acidic_peptide_is_low() {
        let pi = isoelectric_point("DDDD");
        assert!(pi > 2.0 && pi < 3.5, "pI was {pi}");
    }

    #[test]
    fn hydrophobicity_is_a_percentage_of_the_hydrophobic_set() {
        assert_eq!(hydrophobicity("AAAACCCC"), 100.0);
        assert_eq!(hydrophobicity("KKKK"), 0.0);
        // L, A, L, A out of 7 residues.
        assert_eq!(hydrophobicity("KLAKLAK"), 57.14);
    }

    #[test]
    fn hydrophobicity_stays_in_percent_bounds() {
        for sequence in ["A", "KLAKLAK", "ACDEFGHIKLMNPQRSTVWY", "WWWW"] {
            let value = hydrophobicity(sequence);
            assert!((0.0..=100.0).contains(&value));
        }
    }

    #[test]
    fn boman_index_matches_table_averages() {
        assert_eq!(boman_index("AAAA"), -1.81);
        assert_eq!(boman_index("R"), 14.92);
        // Proline has no table entry.
        assert_eq!(boman_index("P"), 0.0);
        // Isoleucine and leucine share the same energy.
        assert_eq!(boman_index("IL"), -4.92);
        // (4.92 + 1.81 - 5.55) / 3, negated.
        assert_eq!(boman_index("LAK"), -0.39);
    }

    #[test]
    fn single_leucine_moment_is_the_full_hydropathy_weight() {
        // One residue: the resultant magnitude equals the Leu weight 3.8,
        // so the ratio is 3.8 / 2.88 as a percentage.
        assert_eq!(hydrophobic_moment_ratio("L"), 131.94);
    }

    #[test]
    fn amphipathic_peptide_has_nonzero_moment() {
        let ratio = hydrophobic_moment_ratio("KLAKLAK");
        assert!(ratio > 0.0);
    }

    #[test]
    fn descriptor_set_rounds_charge_to_integer() {
        let set = DescriptorSet::compute("KLAKLAK");
        assert_eq!(set.charge, 3);
        assert_eq!(set.length, 7);
        assert_eq!(set.hydrophobicity, 57.14);

        let acidic = DescriptorSet::compute("DDDDDDD");
        assert_eq!(acidic.charge, -7);
    }

    #[test]
    fn descriptor_set_is_deterministic() {
        assert_eq!(
            DescriptorSet::compute("GIGKFLHSAKKFGKAFVGEIMNS"),
            DescriptorSet::compute("GIGKFLHSAKKFGKAFVGEIMNS"),
        );
    }
}
