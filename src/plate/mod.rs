mod builder;
mod coordinate;
mod geometry;
mod grid;

pub use builder::{BuildParams, BuildReport, LocusGrids, LocusMatrices, MatrixBuilder};
pub use coordinate::{decode_tag, WellCoordinate};
pub use geometry::PlateGeometry;
pub use grid::{Grid, MagnitudeGrid, PresenceGrid};
