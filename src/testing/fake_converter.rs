use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::domain::paths::as_script;
use crate::ports::NotebookConverter;

/// Writes an empty companion script for every notebook it is asked to convert.
#[derive(Default)]
pub struct FakeConverter {
    pub converted: Mutex<Vec<PathBuf>>,
    pub fail_on: Option<String>,
}

impl FakeConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail when asked to convert a notebook with this file name.
    pub fn failing_on(name: &str) -> Self {
        Self { fail_on: Some(name.to_string()), ..Self::default() }
    }

    pub fn converted_names(&self) -> Vec<String> {
        self.converted
            .lock()
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }
}

impl NotebookConverter for FakeConverter {
    fn convert(&self, notebook: &Path) -> Result<(), AppError> {
        let name = notebook.file_name().unwrap().to_string_lossy();
        if self.fail_on.as_deref() == Some(name.as_ref()) {
            return Err(AppError::CommandFailed {
                command: format!("fake-nbconvert {}", notebook.display()),
                details: "kernel exploded".into(),
            });
        }
        fs::write(as_script(notebook), "# converted\n")?;
        self.converted.lock().unwrap().push(notebook.to_path_buf());
        Ok(())
    }
}
