use std::path::Path;

use crate::domain::Severity;

/// Receives every status and error line produced by a run.
pub trait RunLogger {
    fn log(&self, severity: Severity, message: &str);

    /// Where logged lines are persisted, if anywhere.
    fn destination(&self) -> Option<&Path> {
        None
    }
}
