use std::fmt;

/// A chain tracked independently on the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locus {
    Heavy,
    Kappa,
    Lambda,
    Beta,
    Alpha,
}

impl Locus {
    /// Single-letter code used for the locus in the consensus tables.
    pub fn code(&self) -> &'static str {
        match self {
            Locus::Heavy => "H",
            Locus::Kappa => "K",
            Locus::Lambda => "L",
            Locus::Beta => "B",
            Locus::Alpha => "A",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Locus::Heavy => "heavy",
            Locus::Kappa => "kappa",
            Locus::Lambda => "lambda",
            Locus::Beta => "beta",
            Locus::Alpha => "alpha",
        }
    }

    pub fn panel_title(&self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => format!("{}{} chain", first.to_uppercase(), chars.as_str()),
            None => String::new(),
        }
    }
}

impl fmt::Display for Locus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The loci analysed together in one run. A set has one primary locus and
/// one or more secondary loci; co-occurrence statistics are always taken
/// between the primary locus and the secondaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocusSet {
    Immunoglobulin,
    Receptor,
}

impl LocusSet {
    pub fn loci(&self) -> &'static [Locus] {
        match self {
            LocusSet::Immunoglobulin => &[Locus::Heavy, Locus::Kappa, Locus::Lambda],
            LocusSet::Receptor => &[Locus::Beta, Locus::Alpha],
        }
    }

    pub fn primary(&self) -> Locus {
        self.loci()[0]
    }

    pub fn secondaries(&self) -> &'static [Locus] {
        &self.loci()[1..]
    }

    /// Name of the disjunction of all secondary loci.
    pub fn secondary_label(&self) -> &'static str {
        match self {
            LocusSet::Immunoglobulin => "light",
            LocusSet::Receptor => Locus::Alpha.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn immunoglobulin_set() {
        let set = LocusSet::Immunoglobulin;
        assert_eq!(set.primary(), Locus::Heavy);
        assert_eq!(set.secondaries(), &[Locus::Kappa, Locus::Lambda]);
        assert_eq!(set.secondary_label(), "light");
    }

    #[test]
    fn receptor_set() {
        let set = LocusSet::Receptor;
        assert_eq!(set.primary(), Locus::Beta);
        assert_eq!(set.secondaries(), &[Locus::Alpha]);
        assert_eq!(set.secondary_label(), "alpha");
    }

    #[test]
    fn codes_and_titles() {
        assert_eq!(Locus::Lambda.code(), "L");
        assert_eq!(Locus::Alpha.code(), "A");
        assert_eq!(Locus::Heavy.panel_title(), "Heavy chain");
        assert_eq!(Locus::Beta.panel_title(), "Beta chain");
    }
}
