use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::RunHistory;

/// In-memory run history; can be told to reject writes.
#[derive(Default)]
pub struct MemoryHistory {
    pub entries: Mutex<Vec<String>>,
    pub read_only: bool,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_only() -> Self {
        Self { read_only: true, ..Self::default() }
    }
}

impl RunHistory for MemoryHistory {
    fn append(&self, entry: &str) -> Result<(), AppError> {
        if self.read_only {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "history is read-only",
            )));
        }
        self.entries.lock().unwrap().push(entry.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".into()
    }
}
