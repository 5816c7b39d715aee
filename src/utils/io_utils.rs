use crate::utils::{Result, SpatialError};
use std::path::{Path, PathBuf};

pub fn figure_path(
    output_dir: &Path,
    run_name: &str,
    experiment_id: &str,
    extension: &str,
) -> PathBuf {
    output_dir.join(run_name).join(format!(
        "{}_{}_spatials.{}",
        experiment_id, run_name, extension
    ))
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            log::debug!("Creating output directory {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                SpatialError::Render(format!("Cannot create {}: {}", parent.display(), e))
            })?;
        }
    }
    Ok(())
}
