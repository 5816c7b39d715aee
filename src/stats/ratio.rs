use crate::utils::{Result, SpatialError};
use std::{cmp::Ordering, fmt};

/// An exact, non-negative frequency. A zero denominator marks a frequency
/// that is undefined; it never turns into NaN or infinity. Undefined values
/// compare unequal to everything, themselves included.
#[derive(Debug, Clone, Copy)]
pub struct Ratio {
    numerator: u64,
    denominator: u64,
}

impl Ratio {
    const UNDEFINED: Ratio = Ratio {
        numerator: 0,
        denominator: 0,
    };

    pub fn new(numerator: u64, denominator: u64) -> Self {
        if denominator == 0 {
            return Self::UNDEFINED;
        }
        let divisor = gcd(numerator, denominator);
        if divisor <= 1 {
            return Self {
                numerator,
                denominator,
            };
        }
        Self {
            numerator: numerator / divisor,
            denominator: denominator / divisor,
        }
    }

    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    pub fn is_defined(&self) -> bool {
        self.denominator != 0
    }

    pub fn value(&self) -> Result<f64> {
        if !self.is_defined() {
            return Err(SpatialError::UndefinedFrequency);
        }
        Ok(self.numerator as f64 / self.denominator as f64)
    }

    /// `1 - self`. Assumes `numerator <= denominator`; a larger numerator
    /// (wells at index 0 counted on a tiny plate) saturates at zero, so
    /// `self + self.complement()` is then not one.
    pub fn complement(&self) -> Ratio {
        Ratio::new(
            self.denominator.saturating_sub(self.numerator),
            self.denominator,
        )
    }

    /// `self / condition`; undefined when `condition` is zero or undefined.
    pub fn given(&self, condition: &Ratio) -> Ratio {
        if !self.is_defined() || !condition.is_defined() {
            return Ratio::new(0, 0);
        }
        Ratio::new(
            self.numerator * condition.denominator,
            self.denominator * condition.numerator,
        )
    }

    pub fn times(&self, other: &Ratio) -> Ratio {
        Ratio::new(
            self.numerator * other.numerator,
            self.denominator * other.denominator,
        )
    }

    pub fn add(&self, other: &Ratio) -> Ratio {
        if !self.is_defined() || !other.is_defined() {
            return Ratio::new(0, 0);
        }
        Ratio::new(
            self.numerator * other.denominator + other.numerator * self.denominator,
            self.denominator * other.denominator,
        )
    }
}

impl PartialEq for Ratio {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.is_defined() || !other.is_defined() {
            return None;
        }
        let lhs = self.numerator as u128 * other.denominator as u128;
        let rhs = other.numerator as u128 * self.denominator as u128;
        Some(lhs.cmp(&rhs))
    }
}

/// Two decimals, or `undefined`.
impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.value() {
            Ok(value) => write!(f, "{:.2}", value),
            Err(_) => write!(f, "undefined"),
        }
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduces_to_lowest_terms() {
        assert_eq!(Ratio::new(2, 8), Ratio::new(1, 4));
        assert_eq!(Ratio::new(0, 4), Ratio::new(0, 1));
    }

    #[test]
    fn zero_denominator_is_undefined() {
        let ratio = Ratio::new(0, 0);
        assert!(!ratio.is_defined());
        assert!(matches!(ratio.value(), Err(SpatialError::UndefinedFrequency)));
        assert_eq!(ratio.to_string(), "undefined");
        assert!(!Ratio::new(3, 0).is_defined());
    }

    #[test]
    fn undefined_has_one_form_and_equals_nothing() {
        let undefined = Ratio::new(3, 0);
        assert_eq!(undefined.numerator(), 0);
        assert_eq!(undefined.denominator(), 0);
        assert_ne!(undefined, Ratio::new(0, 0));
        assert_ne!(undefined, undefined);
        assert_eq!(undefined.partial_cmp(&undefined), None);
        assert_ne!(undefined, Ratio::new(0, 1));
    }

    #[test]
    fn complement_saturates_past_one() {
        let inflated = Ratio::new(4, 1);
        assert_eq!(inflated.complement(), Ratio::new(0, 1));
        assert_eq!(inflated.add(&inflated.complement()), Ratio::new(4, 1));
    }

    #[test]
    fn conditional_divides_frequencies() {
        let joint = Ratio::new(1, 4);
        let condition = Ratio::new(2, 4);
        assert_eq!(joint.given(&condition), Ratio::new(1, 2));
    }

    #[test]
    fn conditional_on_zero_is_undefined() {
        let joint = Ratio::new(0, 4);
        let condition = Ratio::new(0, 4);
        assert!(!joint.given(&condition).is_defined());
    }

    #[test]
    fn product_of_marginals() {
        assert_eq!(Ratio::new(1, 4).times(&Ratio::new(1, 2)), Ratio::new(1, 8));
    }

    #[test]
    fn complement_sums_to_one() {
        let ratio = Ratio::new(3, 7);
        assert_eq!(ratio.add(&ratio.complement()), Ratio::new(1, 1));
    }

    #[test]
    fn ordering_by_value() {
        assert!(Ratio::new(1, 4) < Ratio::new(1, 2));
        assert!(Ratio::new(2, 4) <= Ratio::new(1, 2));
        assert_eq!(Ratio::new(1, 0).partial_cmp(&Ratio::new(1, 2)), None);
    }

    #[test]
    fn rounding_only_on_display() {
        let ratio = Ratio::new(1, 8);
        assert_eq!(ratio.value().unwrap(), 0.125);
        assert_eq!(Ratio::new(2, 3).to_string(), "0.67");
        assert_eq!(Ratio::new(1, 3).to_string(), "0.33");
    }
}
