use crate::domain::{RunReport, Severity};
use crate::ports::{DependencyScanner, NotebookConverter, RunHistory, RunLogger};

/// Application context holding the collaborators a packaging run needs.
pub struct AppContext<C, S, L, H> {
    converter: C,
    scanner: S,
    logger: L,
    history: H,
}

impl<C, S, L, H> AppContext<C, S, L, H>
where
    C: NotebookConverter,
    S: DependencyScanner,
    L: RunLogger,
    H: RunHistory,
{
    /// Create a new application context.
    pub fn new(converter: C, scanner: S, logger: L, history: H) -> Self {
        Self { converter, scanner, logger, history }
    }

    pub fn converter(&self) -> &C {
        &self.converter
    }

    pub fn scanner(&self) -> &S {
        &self.scanner
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Log `message` and append it to `report` under the same severity.
    pub fn record(&self, report: &mut RunReport, severity: Severity, message: &str) {
        self.logger.log(severity, message);
        report.push(severity, message);
    }
}
