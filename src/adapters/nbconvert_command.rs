use std::path::Path;

use crate::domain::AppError;
use crate::ports::NotebookConverter;

use super::external_command::ExternalCommand;

/// Converts notebooks by shelling out to `jupyter nbconvert --to python`.
#[derive(Debug, Clone)]
pub struct NbconvertCommandAdapter {
    command: ExternalCommand,
}

impl NbconvertCommandAdapter {
    pub fn new(command: ExternalCommand) -> Self {
        Self { command }
    }
}

impl NotebookConverter for NbconvertCommandAdapter {
    fn convert(&self, notebook: &Path) -> Result<(), AppError> {
        self.command.run(notebook)
    }
}
