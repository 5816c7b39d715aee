/// One heat map. `values` is indexed as `values[row][col]` and must be
/// rectangular; cells are shaded linearly from white (zero) to black (the
/// panel maximum).
#[derive(Debug, PartialEq)]
pub struct HeatPanel {
    pub title: String,
    pub values: Vec<Vec<f64>>,
    pub cols_per_plate: usize,
    pub rows_per_plate: usize,
    pub scale_label: Option<String>,
}

impl HeatPanel {
    pub fn nrows(&self) -> usize {
        self.values.len()
    }

    pub fn ncols(&self) -> usize {
        self.values.first().map_or(0, |row| row.len())
    }

    pub fn max_value(&self) -> f64 {
        self.values
            .iter()
            .flatten()
            .copied()
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
    }
}

#[derive(Debug, PartialEq)]
pub struct TextBlock {
    pub lines: Vec<String>,
}

#[derive(Debug)]
pub struct PlatePlot {
    pub title: String,
    pub panels: Vec<HeatPanel>,
    pub text_blocks: Vec<TextBlock>,
}
