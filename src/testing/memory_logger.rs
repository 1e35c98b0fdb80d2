use std::sync::Mutex;

use crate::domain::Severity;
use crate::ports::RunLogger;

/// Records logged lines for later assertions.
#[derive(Default)]
pub struct MemoryLogger {
    pub lines: Mutex<Vec<(Severity, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl RunLogger for MemoryLogger {
    fn log(&self, severity: Severity, message: &str) {
        self.lines.lock().unwrap().push((severity, message.to_string()));
    }
}
