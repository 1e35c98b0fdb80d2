//! Notebook-to-script converter port definition.

use std::path::Path;

use crate::domain::AppError;

/// Converts a single notebook into a `.py` script beside it.
pub trait NotebookConverter {
    /// Convert `notebook`, blocking until the conversion has finished.
    fn convert(&self, notebook: &Path) -> Result<(), AppError>;
}
