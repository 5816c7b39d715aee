/// A position on the padded grid. Index 0 on either axis is padding;
/// physical wells are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WellCoordinate {
    pub col: usize,
    pub row: usize,
}

impl WellCoordinate {
    pub fn is_padding(&self) -> bool {
        self.col == 0 || self.row == 0
    }
}

/// Decodes a well tag such as `R12` or `C3`: the leading classifier
/// character is dropped and the remainder read as an index in `[0, extent]`.
pub fn decode_tag(tag: &str, extent: usize) -> Option<usize> {
    let mut chars = tag.chars();
    chars.next()?;
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index: usize = digits.parse().ok()?;
    (index <= extent).then_some(index)
}
