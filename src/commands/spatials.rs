use crate::cli::SpatialsArgs;
use crate::figure::{compose, figure_title};
use crate::locus::LocusSet;
use crate::plate::{BuildParams, MatrixBuilder};
use crate::source::{ConsensusTable, WellRecordSource};
use crate::stats::{Annotation, ProbabilityEngine};
use crate::utils::{ensure_parent_dir, figure_path, Config, Result, SpatialError};
use plateplot::generate_image;
use std::path::{Path, PathBuf};

const RECORDS_SUFFIX: &str = "consensus.tsv";

/// Builds the spatials figure of one experiment and returns where it was
/// written. The probability annotation is also printed to stdout.
pub fn spatials(locus_set: LocusSet, args: &SpatialsArgs) -> Result<PathBuf> {
    let (config, config_path) = Config::load(args.config_path.as_deref())?;
    if let Some(group) = &config.auth_group {
        log::debug!("Database credential group: {}", group);
    }

    let records_path = match &args.records_path {
        Some(path) => path.clone(),
        None => default_records_path(&config_path, &config.database),
    };
    let source = ConsensusTable::open(&records_path)?;
    log::info!(
        "Loaded {} consensus rows from {}",
        source.len(),
        records_path.display()
    );

    let params = BuildParams {
        reject_duplicates: args.reject_duplicates,
        skip_malformed: args.skip_malformed,
    };
    let grids = MatrixBuilder::new(&config, params).build(locus_set, &source, &args.experiment_id)?;
    let probabilities = ProbabilityEngine::derive(&grids);
    let annotation = Annotation::new(&probabilities);
    print!("{}", annotation);

    let run_names = source.fetch_run_names(&args.experiment_id, config.min_reads)?;
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let title = figure_title(&run_names, &args.run_name, &config.database, &timestamp);
    let plot = compose(&grids, &config.geometry, args.color_mode(), &annotation, title);

    let output_path = figure_path(
        &args.output_dir,
        &args.run_name,
        &args.experiment_id,
        &args.format,
    );
    ensure_parent_dir(&output_path)?;
    generate_image(&plot, &output_path).map_err(SpatialError::Render)?;
    log::info!("Spatials written to {}", output_path.display());
    Ok(output_path)
}

fn default_records_path(config_path: &Path, database: &str) -> PathBuf {
    let dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    dir.join(format!("{}.{}", database, RECORDS_SUFFIX))
}
