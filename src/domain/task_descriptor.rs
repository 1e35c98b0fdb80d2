//! `params.json` model: tells the platform what to run and where data lives.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::AppError;
use super::paths::relative_to;

/// Task descriptor written to the project root before archiving.
///
/// Path fields are relative to the project root; an empty string means the
/// value was not provided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDescriptor {
    #[serde(rename = "exec_file_name")]
    pub entry_file_name: String,
    pub data_uri: String,
    pub data_path: String,
    pub output_path: String,
}

impl TaskDescriptor {
    /// Build a descriptor from absolute (or cwd-relative) inputs.
    pub fn new(
        project_root: &Path,
        entry_file: &Path,
        data_uri: Option<&str>,
        data_path: Option<&Path>,
        output_path: Option<&Path>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            entry_file_name: relative_string(entry_file, project_root)?,
            data_uri: data_uri.unwrap_or_default().to_string(),
            data_path: data_path
                .map(|p| relative_string(p, project_root))
                .transpose()?
                .unwrap_or_default(),
            output_path: output_path
                .map(|p| relative_string(p, project_root))
                .transpose()?
                .unwrap_or_default(),
        })
    }

    /// Serialize as a single-line JSON object.
    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string(self).map_err(|e| AppError::DescriptorFailed(e.to_string()))
    }
}

fn relative_string(path: &Path, root: &Path) -> Result<String, AppError> {
    let relative = relative_to(path, root).map_err(|e| AppError::DescriptorFailed(e.to_string()))?;
    Ok(relative.to_string_lossy().into_owned())
}
