//! Notebook-to-script conversion for the project's top level.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::paths::is_notebook;
use crate::ports::NotebookConverter;

/// Notebooks directly inside `directory`, sorted by name.
///
/// Subdirectories are not searched.
pub fn list_notebooks(directory: &Path) -> Result<Vec<PathBuf>, AppError> {
    let mut notebooks = Vec::new();
    for entry in fs::read_dir(directory)? {
        let path = entry?.path();
        if path.is_file() && is_notebook(&path) {
            notebooks.push(path);
        }
    }
    notebooks.sort();
    Ok(notebooks)
}

/// Convert every top-level notebook in `directory`, one at a time.
///
/// Stops at the first failure. Returns the notebooks that were converted.
pub fn convert_all<C: NotebookConverter>(
    converter: &C,
    directory: &Path,
) -> Result<Vec<PathBuf>, AppError> {
    let notebooks =
        list_notebooks(directory).map_err(|e| AppError::ConversionFailed(e.to_string()))?;
    for notebook in &notebooks {
        converter.convert(notebook).map_err(|e| AppError::ConversionFailed(e.to_string()))?;
    }
    Ok(notebooks)
}
