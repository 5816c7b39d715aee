use crate::plate::{Grid, LocusGrids, LocusMatrices, PlateGeometry};
use crate::stats::Annotation;
use plateplot::{HeatPanel, PlatePlot, TextBlock};
use std::str::FromStr;

/// What each locus panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Presence grid.
    #[default]
    Presence,
    /// Read counts, linear grayscale.
    Magnitude,
    /// Read counts after `log10(x + 1)`.
    LogMagnitude,
}

impl FromStr for ColorMode {
    type Err = String;
    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "" => Ok(ColorMode::Presence),
            "gs" => Ok(ColorMode::Magnitude),
            "gs_log" => Ok(ColorMode::LogMagnitude),
            _ => Err(format!(
                "Invalid color mode '{}'. Options are: '', gs, gs_log",
                mode
            )),
        }
    }
}

impl ColorMode {
    pub fn transform(&self) -> Transform {
        match self {
            ColorMode::LogMagnitude => Transform::Log10PlusOne,
            _ => Transform::Identity,
        }
    }

    pub fn scale_label(&self) -> Option<&'static str> {
        match self {
            ColorMode::Presence => None,
            ColorMode::Magnitude => Some("Number of reads per well"),
            ColorMode::LogMagnitude => Some("log10(Number of reads per well + pseudocount)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Identity,
    Log10PlusOne,
}

impl Transform {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Transform::Identity => value,
            Transform::Log10PlusOne => (value + 1.0).log10(),
        }
    }
}

/// The physical plate of `grid` as `[row][col]`, transformed.
pub fn panel_values<T>(grid: &Grid<T>, transform: Transform) -> Vec<Vec<f64>>
where
    T: Copy + Default + Into<f64>,
{
    grid.plate_rows()
        .into_iter()
        .map(|row| row.into_iter().map(|v| transform.apply(v.into())).collect())
        .collect()
}

pub fn locus_panel(matrices: &LocusMatrices, geometry: &PlateGeometry, mode: ColorMode) -> HeatPanel {
    let values = match mode {
        ColorMode::Presence => panel_values(&matrices.presence, mode.transform()),
        ColorMode::Magnitude | ColorMode::LogMagnitude => {
            panel_values(&matrices.magnitude, mode.transform())
        }
    };
    HeatPanel {
        title: matrices.locus.panel_title(),
        values,
        cols_per_plate: geometry.cols_per_plate(),
        rows_per_plate: geometry.rows_per_plate(),
        scale_label: mode.scale_label().map(|label| label.to_string()),
    }
}

pub fn compose(
    grids: &LocusGrids,
    geometry: &PlateGeometry,
    mode: ColorMode,
    annotation: &Annotation,
    title: String,
) -> PlatePlot {
    let panels = grids
        .matrices()
        .iter()
        .map(|matrices| locus_panel(matrices, geometry, mode))
        .collect();
    let text_blocks = annotation
        .blocks()
        .iter()
        .map(|lines| TextBlock {
            lines: lines.to_vec(),
        })
        .collect();
    PlatePlot {
        title,
        panels,
        text_blocks,
    }
}

pub fn figure_title(run_names: &[String], run_name: &str, database: &str, timestamp: &str) -> String {
    let runs = if run_names.is_empty() {
        run_name.to_string()
    } else {
        run_names.join(", ")
    };
    format!(
        "Spatials and detection efficiencies for runs ({}) from database {} on {}",
        runs, database, timestamp
    )
}
