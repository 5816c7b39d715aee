use crate::{pdf, png, svg, PlatePlot};
use std::path::Path;

/// Renders the plot to `path`, picking the format from the extension.
///
/// The image is first rendered into a temporary file next to `path` and
/// only moved into place once rendering succeeded, so a failure never
/// leaves a truncated image behind.
pub fn generate(plot: &PlatePlot, path: &Path) -> Result<(), String> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| format!("Failed to get extension from path: {path:?}"))?;
    let file_type = FileType::from_extension(extension)
        .ok_or_else(|| format!("Unsupported file extension: {extension:?}"))?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let staged = tempfile::Builder::new()
        .prefix(".plateplot-")
        .suffix(&format!(".{extension}"))
        .tempfile_in(dir)
        .map_err(|e| format!("Failed to stage image in {}: {}", dir.display(), e))?;

    let svg_content = svg::generate_string(plot);
    match file_type {
        FileType::Svg => svg::render_from_string(&svg_content, staged.path()),
        FileType::Png => png::render_from_string(&svg_content, staged.path()),
        FileType::Pdf => pdf::render_from_string(&svg_content, staged.path()),
    }?;

    staged
        .persist(path)
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
    Ok(())
}

#[derive(Debug, PartialEq)]
enum FileType {
    Svg,
    Png,
    Pdf,
}

impl FileType {
    fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "svg" => Some(FileType::Svg),
            "png" => Some(FileType::Png),
            "pdf" => Some(FileType::Pdf),
            _ => None,
        }
    }
}
