use super::{PlateGeometry, WellCoordinate};

/// Dense matrix over `[0, cols] x [0, rows]`; the zero column and zero row
/// are padding so that 1-based well coordinates index it directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    cols: usize,
    rows: usize,
    cells: Vec<T>,
}

/// 1 where the locus was detected, 0 elsewhere.
pub type PresenceGrid = Grid<u8>;
/// Reads of the counted consensus per well.
pub type MagnitudeGrid = Grid<u32>;

impl<T: Copy + Default> Grid<T> {
    pub fn padded(geometry: &PlateGeometry) -> Self {
        let cols = geometry.cols();
        let rows = geometry.rows();
        Self {
            cols,
            rows,
            cells: vec![T::default(); (cols + 1) * (rows + 1)],
        }
    }

    fn offset(&self, coord: WellCoordinate) -> usize {
        coord.col * (self.rows + 1) + coord.row
    }

    pub fn get(&self, coord: WellCoordinate) -> T {
        self.cells[self.offset(coord)]
    }

    pub(crate) fn set(&mut self, coord: WellCoordinate, value: T) {
        let offset = self.offset(coord);
        self.cells[offset] = value;
    }

    /// Physical columns, padding excluded.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Physical rows, padding excluded.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn physical_wells(&self) -> u64 {
        (self.cols * self.rows) as u64
    }

    /// Every cell, padding included.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// The physical plate with the padding sliced off, laid out as
    /// `[row][col]` for display (rows top to bottom, columns left to right).
    pub fn plate_rows(&self) -> Vec<Vec<T>> {
        (1..=self.rows)
            .map(|row| {
                (1..=self.cols)
                    .map(|col| self.get(WellCoordinate { col, row }))
                    .collect()
            })
            .collect()
    }
}

impl PresenceGrid {
    pub fn count_present(&self) -> u64 {
        self.cells.iter().filter(|&&cell| cell == 1).count() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> PlateGeometry {
        PlateGeometry::new(3, 2, 3, 2).unwrap()
    }

    #[test]
    fn padded_grid_is_oversized() {
        let grid = PresenceGrid::padded(&geometry());
        assert_eq!(grid.cells().len(), 4 * 3);
        assert_eq!(grid.count_present(), 0);
    }

    #[test]
    fn set_and_get() {
        let mut grid = MagnitudeGrid::padded(&geometry());
        let coord = WellCoordinate { col: 3, row: 2 };
        grid.set(coord, 17);
        assert_eq!(grid.get(coord), 17);
        assert_eq!(grid.get(WellCoordinate { col: 2, row: 3 - 1 }), 0);
    }

    #[test]
    fn plate_rows_drop_padding_and_transpose() {
        let mut grid = MagnitudeGrid::padded(&geometry());
        grid.set(WellCoordinate { col: 3, row: 1 }, 5);
        grid.set(WellCoordinate { col: 1, row: 2 }, 9);
        grid.set(WellCoordinate { col: 0, row: 1 }, 99);
        assert_eq!(grid.plate_rows(), vec![vec![0, 0, 5], vec![9, 0, 0]]);
    }

    #[test]
    fn presence_counts_padding_cells() {
        let mut grid = PresenceGrid::padded(&geometry());
        grid.set(WellCoordinate { col: 1, row: 1 }, 1);
        grid.set(WellCoordinate { col: 0, row: 0 }, 1);
        assert_eq!(grid.count_present(), 2);
    }
}
