use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::domain::layout::requirements_path;
use crate::ports::DependencyScanner;

/// Writes a canned `requirements.txt`, or fails when `output` is `None`.
pub struct FakeScanner {
    pub output: Option<String>,
    pub scanned: Mutex<Vec<PathBuf>>,
}

impl FakeScanner {
    pub fn new(output: &str) -> Self {
        Self { output: Some(output.to_string()), scanned: Mutex::new(Vec::new()) }
    }

    pub fn failing() -> Self {
        Self { output: None, scanned: Mutex::new(Vec::new()) }
    }
}

impl DependencyScanner for FakeScanner {
    fn scan(&self, project_dir: &Path) -> Result<(), AppError> {
        self.scanned.lock().unwrap().push(project_dir.to_path_buf());
        match &self.output {
            Some(content) => {
                fs::write(requirements_path(project_dir), content)?;
                Ok(())
            }
            None => Err(AppError::CommandFailed {
                command: "fake-pipreqs".into(),
                details: "no module named pipreqs".into(),
            }),
        }
    }
}
