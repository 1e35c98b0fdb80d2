use std::io;

use thiserror::Error;

/// Library-wide error type for orion-pack operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// One of the input checks failed. Carries the accumulated error trail.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// Notebook-to-script conversion failed.
    #[error("Converting files failed: {0}")]
    ConversionFailed(String),

    /// Generating or repairing `requirements.txt` failed.
    #[error("Generating 'requirements.txt' failed: {0}")]
    ManifestFailed(String),

    /// Writing `params.json` failed.
    #[error("Generating 'params.json' failed: {0}")]
    DescriptorFailed(String),

    /// Building the task archive failed.
    #[error("Zipping project folder failed: {0}")]
    ArchiveFailed(String),

    /// Removing a transient file failed.
    #[error("Removing files failed: {0}")]
    CleanupFailed(String),

    /// External command could not be spawned or exited unsuccessfully.
    #[error("Command '{command}' failed: {details}")]
    CommandFailed { command: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
