//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fs::naming::{file_name_from_link, sanitize_path_component};

/// Get the output folder for a manifest label.
pub fn get_label_folder(base_dir: &Path, label: &str) -> Result<PathBuf> {
    let label = sanitize_path_component(label)?;
    Ok(base_dir.join(label))
}

/// Get the output path for a candidate link inside `out_dir`.
pub fn get_output_path(out_dir: &Path, link: &str) -> Result<PathBuf> {
    Ok(out_dir.join(file_name_from_link(link)?))
}

/// Ensure a directory exists, creating it and its parents if necessary.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path).await?;
    Ok(())
}
