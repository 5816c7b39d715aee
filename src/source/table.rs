use super::{WellQuery, WellRecord, WellRecordSource, BEST_CONSENSUS_RANK};
use crate::utils::{open_table_reader, Result, SpatialError};
use itertools::Itertools;
use std::{collections::HashMap, io::BufRead, path::Path};

const REQUIRED_COLUMNS: [&str; 6] = [
    "experiment_id",
    "locus",
    "n_seq",
    "row_tag",
    "col_tag",
    "consensus_rank",
];
const RUN_NAME_COLUMN: &str = "run_name";

/// A consensus as exported from the consensus statistics table joined
/// with its sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsensusRow {
    pub experiment_id: String,
    pub locus: String,
    pub read_count: u32,
    pub row_tag: String,
    pub col_tag: String,
    pub consensus_rank: u32,
    pub run_name: Option<String>,
}

impl ConsensusRow {
    fn qualifies(&self, experiment_id: &str, min_reads: u32, consensus_rank: u32) -> bool {
        self.experiment_id == experiment_id
            && self.read_count >= min_reads
            && self.consensus_rank == consensus_rank
    }

    fn to_record(&self) -> WellRecord {
        WellRecord {
            read_count: self.read_count,
            row_tag: self.row_tag.clone(),
            col_tag: self.col_tag.clone(),
        }
    }
}

/// Well record source backed by a tab-separated export of the consensus
/// tables, held in memory once loaded.
#[derive(Debug, Default)]
pub struct ConsensusTable {
    rows: Vec<ConsensusRow>,
}

impl ConsensusTable {
    pub fn open(path: &Path) -> Result<Self> {
        log::debug!("Loading consensus table {}", path.display());
        let reader = open_table_reader(path)?;
        Self::from_reader(reader).map_err(|e| match e {
            SpatialError::ConnectionFailure(msg) => {
                SpatialError::ConnectionFailure(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    pub fn from_rows(rows: Vec<ConsensusRow>) -> Self {
        Self { rows }
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines().enumerate();
        let header = match lines.next() {
            Some((_, line)) => line.map_err(|e| SpatialError::ConnectionFailure(e.to_string()))?,
            None => return Err(SpatialError::ConnectionFailure("empty table".to_string())),
        };
        let columns = ColumnIndex::from_header(&header)?;

        let mut rows = Vec::new();
        for (line_number, line) in lines {
            let line = line.map_err(|e| {
                SpatialError::ConnectionFailure(format!("line {}: {}", line_number + 1, e))
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let row = columns.parse_row(&line).map_err(|msg| {
                SpatialError::ConnectionFailure(format!("line {}: {}", line_number + 1, msg))
            })?;
            rows.push(row);
        }
        log::debug!("Loaded {} consensus rows", rows.len());
        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl WellRecordSource for ConsensusTable {
    fn fetch_wells(&self, query: &WellQuery) -> Result<Vec<WellRecord>> {
        log::debug!(
            "Fetching wells: locus={}, experiment_id={}, n_seq>={}, consensus_rank={}",
            query.locus.code(),
            query.experiment_id,
            query.min_reads,
            query.consensus_rank
        );
        Ok(self
            .rows
            .iter()
            .filter(|row| row.locus == query.locus.code())
            .filter(|row| row.qualifies(query.experiment_id, query.min_reads, query.consensus_rank))
            .map(ConsensusRow::to_record)
            .collect())
    }

    fn fetch_run_names(&self, experiment_id: &str, min_reads: u32) -> Result<Vec<String>> {
        Ok(self
            .rows
            .iter()
            .filter(|row| row.qualifies(experiment_id, min_reads, BEST_CONSENSUS_RANK))
            .filter_map(|row| row.run_name.clone())
            .sorted()
            .dedup()
            .collect())
    }
}

struct ColumnIndex {
    positions: HashMap<&'static str, usize>,
    run_name: Option<usize>,
    width: usize,
}

impl ColumnIndex {
    fn from_header(header: &str) -> Result<Self> {
        let names: Vec<&str> = header.split('\t').map(|name| name.trim()).collect();
        let find = |column: &str| names.iter().position(|name| *name == column);

        let mut positions = HashMap::new();
        for column in REQUIRED_COLUMNS {
            let position = find(column).ok_or_else(|| {
                SpatialError::ConnectionFailure(format!("column '{}' missing from header", column))
            })?;
            positions.insert(column, position);
        }
        Ok(Self {
            positions,
            run_name: find(RUN_NAME_COLUMN),
            width: names.len(),
        })
    }

    fn parse_row(&self, line: &str) -> std::result::Result<ConsensusRow, String> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != self.width {
            return Err(format!(
                "Expected {} fields, found {}: {}",
                self.width,
                fields.len(),
                line
            ));
        }
        let field = |column: &str| fields[self.positions[column]].trim();
        let number = |column: &str| {
            field(column)
                .parse::<u32>()
                .map_err(|_| format!("Invalid {} value '{}'", column, field(column)))
        };

        Ok(ConsensusRow {
            experiment_id: field("experiment_id").to_string(),
            locus: field("locus").to_string(),
            read_count: number("n_seq")?,
            row_tag: field("row_tag").to_string(),
            col_tag: field("col_tag").to_string(),
            consensus_rank: number("consensus_rank")?,
            run_name: self
                .run_name
                .map(|i| fields[i].trim())
                .filter(|name| !name.is_empty())
                .map(|name| name.to_string()),
        })
    }
}
