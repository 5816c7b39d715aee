mod annotation;
mod engine;
mod ratio;

pub use annotation::Annotation;
pub use engine::{LocusFrequency, Pairing, ProbabilityEngine, ProbabilitySet, SecondaryUnion};
pub use ratio::Ratio;
