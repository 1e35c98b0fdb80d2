use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::RunHistory;

/// Run history kept as a plain text file, appended to on every run.
#[derive(Debug, Clone)]
pub struct FileRunHistory {
    path: PathBuf,
}

impl FileRunHistory {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl RunHistory for FileRunHistory {
    fn append(&self, entry: &str) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(entry.as_bytes())?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
