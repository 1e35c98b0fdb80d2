//! `params.json` generation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::layout::descriptor_path;
use crate::domain::{AppError, TaskDescriptor};

/// Write the task descriptor into `project_root`, replacing any earlier one.
pub fn build(
    project_root: &Path,
    output_path: Option<&Path>,
    entry_file: &Path,
    data_uri: Option<&str>,
    data_path: Option<&Path>,
) -> Result<PathBuf, AppError> {
    let descriptor =
        TaskDescriptor::new(project_root, entry_file, data_uri, data_path, output_path)?;
    let path = descriptor_path(project_root);
    fs::write(&path, descriptor.to_json()?)
        .map_err(|e| AppError::DescriptorFailed(format!("{}: {e}", path.display())))?;
    Ok(path)
}
