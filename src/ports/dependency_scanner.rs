//! Dependency scanner port definition.

use std::path::Path;

use crate::domain::AppError;

/// Produces `requirements.txt` for a project directory.
pub trait DependencyScanner {
    /// Scan `project_dir` and (over)write its `requirements.txt`.
    fn scan(&self, project_dir: &Path) -> Result<(), AppError>;
}
