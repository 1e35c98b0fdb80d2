use std::path::{Path, PathBuf};

use crate::domain::Severity;
use crate::ports::RunLogger;

/// Forwards run lines to the installed `tracing` subscriber.
#[derive(Debug, Clone, Default)]
pub struct TracingRunLogger {
    log_dir: Option<PathBuf>,
}

impl TracingRunLogger {
    pub fn new(log_dir: Option<PathBuf>) -> Self {
        Self { log_dir }
    }
}

impl RunLogger for TracingRunLogger {
    fn log(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => tracing::info!("{message}"),
            Severity::Warning => tracing::warn!("{message}"),
            Severity::Error => tracing::error!("{message}"),
        }
    }

    fn destination(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }
}
