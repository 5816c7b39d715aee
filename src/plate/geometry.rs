use crate::utils::{Result, SpatialError};

/// Extent of the sorting matrix and the size of the physical plates tiling it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlateGeometry {
    cols: usize,
    rows: usize,
    cols_per_plate: usize,
    rows_per_plate: usize,
}

impl PlateGeometry {
    pub fn new(
        cols: usize,
        rows: usize,
        cols_per_plate: usize,
        rows_per_plate: usize,
    ) -> Result<Self> {
        if cols == 0 || rows == 0 {
            return Err(SpatialError::ConfigInvalid(format!(
                "Matrix extent must be positive, got {}x{}",
                cols, rows
            )));
        }
        if cols_per_plate == 0 || rows_per_plate == 0 {
            return Err(SpatialError::ConfigInvalid(format!(
                "Plate size must be positive, got {}x{}",
                cols_per_plate, rows_per_plate
            )));
        }
        if cols % cols_per_plate != 0 || rows % rows_per_plate != 0 {
            log::warn!(
                "Plates of {}x{} do not tile the {}x{} matrix evenly; gridlines may not match plate boundaries",
                cols_per_plate,
                rows_per_plate,
                cols,
                rows
            );
        }
        Ok(Self {
            cols,
            rows,
            cols_per_plate,
            rows_per_plate,
        })
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols_per_plate(&self) -> usize {
        self.cols_per_plate
    }

    pub fn rows_per_plate(&self) -> usize {
        self.rows_per_plate
    }

    pub fn total_wells(&self) -> u64 {
        (self.cols * self.rows) as u64
    }
}
