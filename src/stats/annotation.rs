use super::ProbabilitySet;
use itertools::Itertools;
use std::fmt;

/// The three text blocks printed below the plate panels.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub totals: Vec<String>,
    pub combined: Vec<String>,
    pub independence: Vec<String>,
}

impl Annotation {
    pub fn new(set: &ProbabilitySet) -> Self {
        let primary = set.locus_set.primary().name();
        let secondary_names = set.locus_set.secondaries().iter().map(|l| l.name());

        let mut totals = vec!["Total frequencies:".to_string(), String::new()];
        for marginal in &set.marginals {
            totals.push(format!("P({}) = {}", marginal.locus.name(), marginal.frequency));
        }
        if let Some(union) = &set.secondary_union {
            totals.push(format!(
                "P({}) = {}",
                secondary_names.clone().join(" or "),
                union.either
            ));
            totals.push(format!(
                "P({}) = {}",
                secondary_names.clone().join(" and "),
                union.both
            ));
            totals.push(format!(
                "P({} and {}) = {}",
                primary,
                secondary_names.clone().join(" and "),
                union.all
            ));
        }

        let mut combined = vec!["Combined frequencies:".to_string(), String::new()];
        for pairing in &set.pairings {
            combined.push(format!(
                "P({} and {}) = {}",
                primary, pairing.condition_label, pairing.joint
            ));
        }
        combined.push(String::new());
        for pairing in &set.pairings {
            combined.push(format!(
                "P({}|{}) = {}",
                primary, pairing.condition_label, pairing.conditional
            ));
        }

        let mut independence = vec!["Random association model:".to_string(), String::new()];
        for pairing in &set.pairings {
            independence.push(format!(
                "P({}) * P({}) = {}",
                primary, pairing.condition_label, pairing.baseline
            ));
        }

        Self {
            totals,
            combined,
            independence,
        }
    }

    pub fn blocks(&self) -> [&[String]; 3] {
        [&self.totals, &self.combined, &self.independence]
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for block in self.blocks() {
            for line in block {
                writeln!(f, "{}", line)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locus::{Locus, LocusSet};
    use crate::stats::{LocusFrequency, Pairing, Ratio, SecondaryUnion};

    fn pairing(label: &str, condition: Ratio, joint: Ratio, conditional: Ratio, baseline: Ratio) -> Pairing {
        Pairing {
            condition_label: label.to_string(),
            condition,
            joint,
            conditional,
            baseline,
        }
    }

    #[test]
    fn receptor_annotation() {
        let set = ProbabilitySet {
            locus_set: LocusSet::Receptor,
            total_wells: 4,
            marginals: vec![
                LocusFrequency {
                    locus: Locus::Beta,
                    frequency: Ratio::new(1, 4),
                },
                LocusFrequency {
                    locus: Locus::Alpha,
                    frequency: Ratio::new(0, 4),
                },
            ],
            secondary_union: None,
            pairings: vec![pairing(
                "alpha",
                Ratio::new(0, 4),
                Ratio::new(0, 4),
                Ratio::new(0, 0),
                Ratio::new(0, 16),
            )],
        };
        let annotation = Annotation::new(&set);
        assert_eq!(
            annotation.totals,
            vec!["Total frequencies:", "", "P(beta) = 0.25", "P(alpha) = 0.00"]
        );
        assert_eq!(
            annotation.combined,
            vec![
                "Combined frequencies:",
                "",
                "P(beta and alpha) = 0.00",
                "",
                "P(beta|alpha) = undefined"
            ]
        );
        assert_eq!(
            annotation.independence,
            vec!["Random association model:", "", "P(beta) * P(alpha) = 0.00"]
        );
    }

    #[test]
    fn immunoglobulin_totals_include_union_lines() {
        let quarter = Ratio::new(1, 4);
        let half = Ratio::new(1, 2);
        let set = ProbabilitySet {
            locus_set: LocusSet::Immunoglobulin,
            total_wells: 4,
            marginals: vec![
                LocusFrequency {
                    locus: Locus::Heavy,
                    frequency: half,
                },
                LocusFrequency {
                    locus: Locus::Kappa,
                    frequency: quarter,
                },
                LocusFrequency {
                    locus: Locus::Lambda,
                    frequency: half,
                },
            ],
            secondary_union: Some(SecondaryUnion {
                label: "light".to_string(),
                either: half,
                both: quarter,
                all: quarter,
            }),
            pairings: vec![
                pairing("light", half, quarter, half, quarter),
                pairing("kappa", quarter, quarter, Ratio::new(1, 1), Ratio::new(1, 8)),
            ],
        };
        let annotation = Annotation::new(&set);
        assert_eq!(annotation.totals[5], "P(kappa or lambda) = 0.50");
        assert_eq!(annotation.totals[6], "P(kappa and lambda) = 0.25");
        assert_eq!(annotation.totals[7], "P(heavy and kappa and lambda) = 0.25");
        assert_eq!(annotation.combined[2], "P(heavy and light) = 0.25");
        assert_eq!(annotation.combined[6], "P(heavy|kappa) = 1.00");
        assert_eq!(annotation.independence[2], "P(heavy) * P(light) = 0.25");

        let text = annotation.to_string();
        assert!(text.starts_with("Total frequencies:\n\nP(heavy) = 0.50\n"));
        assert!(text.contains("Random association model:"));
    }
}
