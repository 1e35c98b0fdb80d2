use std::path::Path;

use crate::domain::AppError;
use crate::ports::DependencyScanner;

use super::external_command::ExternalCommand;

/// Generates `requirements.txt` by shelling out to `pipreqs --force`.
#[derive(Debug, Clone)]
pub struct PipreqsCommandAdapter {
    command: ExternalCommand,
}

impl PipreqsCommandAdapter {
    pub fn new(command: ExternalCommand) -> Self {
        Self { command }
    }
}

impl DependencyScanner for PipreqsCommandAdapter {
    fn scan(&self, project_dir: &Path) -> Result<(), AppError> {
        self.command.run(project_dir)
    }
}
