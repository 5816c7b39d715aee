mod record;
mod table;

pub use record::{WellQuery, WellRecord, WellRecordSource, BEST_CONSENSUS_RANK};
pub use table::{ConsensusRow, ConsensusTable};
