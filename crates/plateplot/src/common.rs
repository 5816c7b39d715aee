use usvg::Tree;

pub fn prepare_svg_tree(svg_data: &[u8]) -> Result<Tree, String> {
    let mut options = usvg::Options::default();
    let db = options.fontdb_mut();
    db.load_system_fonts();
    let tree = usvg::Tree::from_data(svg_data, &options).map_err(|e| e.to_string())?;
    Ok(tree)
}

/// Offsets (in cells) of the boundaries between consecutive plates along
/// one axis. Boundaries coinciding with the matrix edge are not included.
pub fn gridline_offsets(extent: usize, period: usize) -> Vec<usize> {
    if period == 0 {
        return Vec::new();
    }
    (1..)
        .map(|k| k * period)
        .take_while(|&offset| offset < extent)
        .collect()
}
