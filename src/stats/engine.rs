use super::Ratio;
use crate::locus::{Locus, LocusSet};
use crate::plate::LocusGrids;

#[derive(Debug, Clone, PartialEq)]
pub struct LocusFrequency {
    pub locus: Locus,
    pub frequency: Ratio,
}

/// Co-occurrence of the primary locus with one condition (a secondary
/// locus, or the disjunction of all secondaries).
#[derive(Debug, Clone, PartialEq)]
pub struct Pairing {
    pub condition_label: String,
    /// Frequency of the condition itself.
    pub condition: Ratio,
    /// Frequency of wells with both the primary locus and the condition.
    pub joint: Ratio,
    /// `joint / condition`.
    pub conditional: Ratio,
    /// Joint frequency expected if primary and condition were independent.
    pub baseline: Ratio,
}

impl Pairing {
    fn new(condition_label: &str, condition: Ratio, joint: Ratio, primary: Ratio) -> Self {
        Self {
            condition_label: condition_label.to_string(),
            condition,
            joint,
            conditional: joint.given(&condition),
            baseline: primary.times(&condition),
        }
    }
}

/// Only present when a set has more than one secondary locus.
#[derive(Debug, Clone, PartialEq)]
pub struct SecondaryUnion {
    pub label: String,
    /// Any secondary locus present.
    pub either: Ratio,
    /// Every secondary locus present.
    pub both: Ratio,
    /// Primary and every secondary locus present.
    pub all: Ratio,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilitySet {
    pub locus_set: LocusSet,
    pub total_wells: u64,
    pub marginals: Vec<LocusFrequency>,
    pub secondary_union: Option<SecondaryUnion>,
    /// Disjunction of the secondaries first (if any), then one per secondary.
    pub pairings: Vec<Pairing>,
}

impl ProbabilitySet {
    pub fn marginal(&self, locus: Locus) -> Option<Ratio> {
        self.marginals
            .iter()
            .find(|m| m.locus == locus)
            .map(|m| m.frequency)
    }

    pub fn pairing(&self, condition_label: &str) -> Option<&Pairing> {
        self.pairings
            .iter()
            .find(|p| p.condition_label == condition_label)
    }
}

/// Frequencies are taken over the physical wells of the grids themselves.
pub struct ProbabilityEngine;

impl ProbabilityEngine {
    pub fn derive(grids: &LocusGrids) -> ProbabilitySet {
        let total_wells = grids.total_wells();
        let freq = |count: u64| Ratio::new(count, total_wells);
        let locus_set = grids.locus_set();

        let marginals: Vec<LocusFrequency> = grids
            .matrices()
            .iter()
            .map(|m| LocusFrequency {
                locus: m.locus,
                frequency: freq(m.presence.count_present()),
            })
            .collect();
        let primary_marginal = marginals[0].frequency;

        let primary = grids.primary().presence.cells();
        let secondaries: Vec<&[u8]> = grids
            .secondaries()
            .iter()
            .map(|m| m.presence.cells())
            .collect();
        let present = |cells: &[u8], i: usize| cells[i] == 1;
        let count = |predicate: &dyn Fn(usize) -> bool| {
            (0..primary.len()).filter(|&i| predicate(i)).count() as u64
        };

        let mut pairings = Vec::with_capacity(secondaries.len() + 1);
        let secondary_union = if secondaries.len() > 1 {
            let any_secondary = |i: usize| secondaries.iter().any(|cells| present(cells, i));
            let all_secondaries = |i: usize| secondaries.iter().all(|cells| present(cells, i));

            let either = freq(count(&any_secondary));
            let both = freq(count(&all_secondaries));
            let all = freq(count(&|i| present(primary, i) && all_secondaries(i)));
            let primary_with_either = freq(count(&|i| present(primary, i) && any_secondary(i)));

            pairings.push(Pairing::new(
                locus_set.secondary_label(),
                either,
                primary_with_either,
                primary_marginal,
            ));
            Some(SecondaryUnion {
                label: locus_set.secondary_label().to_string(),
                either,
                both,
                all,
            })
        } else {
            None
        };

        for (marginal, cells) in marginals[1..].iter().zip(secondaries.iter().copied()) {
            let joint = freq(count(&|i| present(primary, i) && present(cells, i)));
            pairings.push(Pairing::new(
                marginal.locus.name(),
                marginal.frequency,
                joint,
                primary_marginal,
            ));
        }

        ProbabilitySet {
            locus_set,
            total_wells,
            marginals,
            secondary_union,
            pairings,
        }
    }
}
