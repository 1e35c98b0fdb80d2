//! `requirements.txt` generation and repair.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::layout::requirements_path;
use crate::domain::{AppError, fix_requirements};
use crate::ports::DependencyScanner;

/// Regenerate the project's `requirements.txt` and apply the naming fixups.
///
/// Returns the path of the written manifest.
pub fn build<S: DependencyScanner>(scanner: &S, project_dir: &Path) -> Result<PathBuf, AppError> {
    scanner.scan(project_dir).map_err(|e| AppError::ManifestFailed(e.to_string()))?;

    let path = requirements_path(project_dir);
    let content = fs::read_to_string(&path)
        .map_err(|e| AppError::ManifestFailed(format!("{}: {e}", path.display())))?;
    fs::write(&path, fix_requirements(&content))
        .map_err(|e| AppError::ManifestFailed(format!("{}: {e}", path.display())))?;
    Ok(path)
}
