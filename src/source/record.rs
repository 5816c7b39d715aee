use crate::locus::Locus;
use crate::utils::Result;
use std::fmt;

/// Rank of the consensus chosen as representative for a well.
pub const BEST_CONSENSUS_RANK: u32 = 1;

/// One qualifying well as returned by a record source.
#[derive(Debug, Clone, PartialEq)]
pub struct WellRecord {
    pub read_count: u32,
    pub row_tag: String,
    pub col_tag: String,
}

impl fmt::Display for WellRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "(n_seq={}, row_tag={}, col_tag={})",
            self.read_count, self.row_tag, self.col_tag
        )
    }
}

/// Predicate selecting the wells of one locus in one experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct WellQuery<'a> {
    pub locus: Locus,
    pub experiment_id: &'a str,
    pub min_reads: u32,
    pub consensus_rank: u32,
}

impl<'a> WellQuery<'a> {
    pub fn best_consensus(locus: Locus, experiment_id: &'a str, min_reads: u32) -> Self {
        Self {
            locus,
            experiment_id,
            min_reads,
            consensus_rank: BEST_CONSENSUS_RANK,
        }
    }
}

pub trait WellRecordSource {
    /// Wells of `query.locus` with at least `query.min_reads` reads whose
    /// consensus has rank `query.consensus_rank`. Order is unspecified.
    fn fetch_wells(&self, query: &WellQuery) -> Result<Vec<WellRecord>>;

    /// Distinct names of the sequencing runs that contributed qualifying
    /// best consensuses to the experiment, sorted.
    fn fetch_run_names(&self, experiment_id: &str, min_reads: u32) -> Result<Vec<String>>;
}
