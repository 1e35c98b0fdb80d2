use std::fmt;
use std::path::{Path, PathBuf};

/// Severity attached to every report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        };
        f.write_str(label)
    }
}

/// Accumulated outcome of one packaging run.
///
/// Status text collects progress and warnings; error text collects failures.
/// A run is failed once [`RunReport::fail`] has been called, even if later
/// stages add more status text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    header: String,
    status: String,
    errors: String,
    failed: bool,
    archive: Option<PathBuf>,
}

impl RunReport {
    pub fn new(header: impl Into<String>) -> Self {
        Self { header: header.into(), ..Self::default() }
    }

    /// Append a line for `severity`. Info and warnings go to the status text.
    pub fn push(&mut self, severity: Severity, message: &str) {
        let target = match severity {
            Severity::Info | Severity::Warning => &mut self.status,
            Severity::Error => &mut self.errors,
        };
        target.push_str(message);
        target.push('\n');
    }

    pub fn fail(&mut self) {
        self.failed = true;
    }

    pub fn set_archive(&mut self, path: PathBuf) {
        self.archive = Some(path);
    }

    pub fn succeeded(&self) -> bool {
        !self.failed
    }

    pub fn status_text(&self) -> &str {
        &self.status
    }

    pub fn error_text(&self) -> &str {
        &self.errors
    }

    pub fn archive(&self) -> Option<&Path> {
        self.archive.as_deref()
    }

    /// Combined text shown to the user at the end of a run.
    pub fn render(&self) -> String {
        let mut out = self.header.clone();
        out.push('\n');
        if self.failed {
            out.push_str("Error:\n");
            out.push_str(&self.errors);
            return out;
        }
        out.push_str(&self.status);
        if !self.errors.is_empty() {
            out.push_str("\nError:\n");
            out.push_str(&self.errors);
        }
        out
    }
}
