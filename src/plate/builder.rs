use super::{decode_tag, MagnitudeGrid, PlateGeometry, PresenceGrid, WellCoordinate};
use crate::locus::{Locus, LocusSet};
use crate::source::{WellQuery, WellRecord, WellRecordSource};
use crate::utils::{Config, Result, SpatialError};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BuildParams {
    /// Fail on a second record for an already written coordinate instead of
    /// letting the later record overwrite the magnitude.
    pub reject_duplicates: bool,
    /// Skip records whose tags do not decode instead of failing the run.
    pub skip_malformed: bool,
}

/// Presence and magnitude grids of one locus.
#[derive(Debug, Clone, PartialEq)]
pub struct LocusMatrices {
    pub locus: Locus,
    pub presence: PresenceGrid,
    pub magnitude: MagnitudeGrid,
    pub report: BuildReport,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub records: usize,
    pub duplicates: usize,
    pub skipped: usize,
    pub padding_hits: usize,
}

/// Grids for every locus of a set, in the order of `LocusSet::loci`.
#[derive(Debug, Clone, PartialEq)]
pub struct LocusGrids {
    locus_set: LocusSet,
    matrices: Vec<LocusMatrices>,
}

impl LocusGrids {
    pub fn new(locus_set: LocusSet, matrices: Vec<LocusMatrices>) -> Result<Self> {
        let built: Vec<Locus> = matrices.iter().map(|m| m.locus).collect();
        if built != locus_set.loci() {
            return Err(SpatialError::ConfigInvalid(format!(
                "Grids for {:?} do not match locus set {:?}",
                built, locus_set
            )));
        }
        let shape = |m: &LocusMatrices| {
            [
                (m.presence.cols(), m.presence.rows()),
                (m.magnitude.cols(), m.magnitude.rows()),
            ]
        };
        if let Some(first) = matrices.first() {
            let expected = shape(first)[0];
            for m in &matrices {
                if shape(m).iter().any(|&dims| dims != expected) {
                    return Err(SpatialError::ConfigInvalid(format!(
                        "Grid of locus {} is {}x{}, expected {}x{}",
                        m.locus.name(),
                        m.presence.cols(),
                        m.presence.rows(),
                        expected.0,
                        expected.1
                    )));
                }
            }
        }
        Ok(Self {
            locus_set,
            matrices,
        })
    }

    pub fn locus_set(&self) -> LocusSet {
        self.locus_set
    }

    pub fn matrices(&self) -> &[LocusMatrices] {
        &self.matrices
    }

    pub fn primary(&self) -> &LocusMatrices {
        &self.matrices[0]
    }

    pub fn secondaries(&self) -> &[LocusMatrices] {
        &self.matrices[1..]
    }

    /// Wells of the physical matrix shared by every grid of the bundle.
    pub fn total_wells(&self) -> u64 {
        self.primary().presence.physical_wells()
    }
}

pub struct MatrixBuilder {
    geometry: PlateGeometry,
    min_reads: u32,
    params: BuildParams,
}

impl MatrixBuilder {
    pub fn new(config: &Config, params: BuildParams) -> Self {
        Self {
            geometry: config.geometry,
            min_reads: config.min_reads,
            params,
        }
    }

    pub fn build(
        &self,
        locus_set: LocusSet,
        source: &dyn WellRecordSource,
        experiment_id: &str,
    ) -> Result<LocusGrids> {
        let mut matrices = Vec::with_capacity(locus_set.loci().len());
        for &locus in locus_set.loci() {
            let query = WellQuery::best_consensus(locus, experiment_id, self.min_reads);
            let records = source.fetch_wells(&query)?;
            let locus_matrices = self.accumulate(locus, &records)?;
            log::info!(
                "Locus {}: {} qualifying wells",
                locus.name(),
                locus_matrices.report.records
            );
            matrices.push(locus_matrices);
        }
        LocusGrids::new(locus_set, matrices)
    }

    /// Writes the records of one locus into fresh grids.
    pub fn accumulate(&self, locus: Locus, records: &[WellRecord]) -> Result<LocusMatrices> {
        let mut presence = PresenceGrid::padded(&self.geometry);
        let mut magnitude = MagnitudeGrid::padded(&self.geometry);
        let mut report = BuildReport {
            records: records.len(),
            ..Default::default()
        };
        let mut seen = HashSet::with_capacity(records.len());

        for record in records {
            let coord = match self.decode(record) {
                Ok(coord) => coord,
                Err(e) if self.params.skip_malformed => {
                    log::debug!("Skipping record: {}", e);
                    report.skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            if !seen.insert(coord) {
                if self.params.reject_duplicates {
                    return Err(SpatialError::DuplicateWellCoordinate {
                        locus: locus.name().to_string(),
                        col: coord.col,
                        row: coord.row,
                    });
                }
                report.duplicates += 1;
            }
            if coord.is_padding() {
                report.padding_hits += 1;
            }

            presence.set(coord, 1);
            magnitude.set(coord, record.read_count);
        }

        if report.skipped > 0 {
            log::warn!(
                "Locus {}: skipped {} of {} records with malformed well tags",
                locus.name(),
                report.skipped,
                report.records
            );
        }
        if report.duplicates > 0 {
            log::warn!(
                "Locus {}: {} records share a well with an earlier record; the last read count was kept",
                locus.name(),
                report.duplicates
            );
        }
        if report.padding_hits > 0 {
            log::warn!(
                "Locus {}: {} records map to well index 0; they are counted as present and inflate the printed frequencies",
                locus.name(),
                report.padding_hits
            );
        }

        Ok(LocusMatrices {
            locus,
            presence,
            magnitude,
            report,
        })
    }

    fn decode(&self, record: &WellRecord) -> Result<WellCoordinate> {
        let malformed = |tag: &str| SpatialError::MalformedCoordinate {
            tag: tag.to_string(),
            record: record.to_string(),
        };
        let row = decode_tag(&record.row_tag, self.geometry.rows())
            .ok_or_else(|| malformed(&record.row_tag))?;
        let col = decode_tag(&record.col_tag, self.geometry.cols())
            .ok_or_else(|| malformed(&record.col_tag))?;
        Ok(WellCoordinate { col, row })
    }
}
