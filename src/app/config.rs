//! Tool configuration loaded from `orion-pack.toml`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::adapters::ExternalCommand;
use crate::domain::AppError;

/// Configuration file looked up next to the executable when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "orion-pack.toml";

/// Log directory created next to the executable by default.
pub const DEFAULT_LOG_DIR: &str = "NBAIlog";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackConfig {
    /// External programs invoked by the pipeline.
    #[serde(default)]
    pub tools: ToolsConfig,
    /// Log and run-history locations.
    #[serde(default)]
    pub log: LogConfig,
}

/// External programs, argv-style. The target path is appended on each call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolsConfig {
    #[serde(default = "default_converter")]
    pub converter: Vec<String>,
    #[serde(default = "default_scanner")]
    pub scanner: Vec<String>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self { converter: default_converter(), scanner: default_scanner() }
    }
}

fn default_converter() -> Vec<String> {
    ["jupyter", "nbconvert", "--to", "python"].map(String::from).to_vec()
}

fn default_scanner() -> Vec<String> {
    ["pipreqs", "--force"].map(String::from).to_vec()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Directory for the rolling log and run history.
    #[serde(default)]
    pub directory: Option<PathBuf>,
    /// Run-history file name inside `directory`.
    #[serde(default = "default_history_file")]
    pub history_file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { directory: None, history_file: default_history_file() }
    }
}

fn default_history_file() -> String {
    "NBAIConverter.history".to_string()
}

impl PackConfig {
    pub fn converter_command(&self) -> Result<ExternalCommand, AppError> {
        ExternalCommand::from_argv(&self.tools.converter)
            .map_err(|_| AppError::config_error("tools.converter must not be empty"))
    }

    pub fn scanner_command(&self) -> Result<ExternalCommand, AppError> {
        ExternalCommand::from_argv(&self.tools.scanner)
            .map_err(|_| AppError::config_error("tools.scanner must not be empty"))
    }

    /// Configured log directory, or `NBAIlog/` beside the executable.
    pub fn log_dir(&self) -> PathBuf {
        match &self.log.directory {
            Some(dir) => dir.clone(),
            None => executable_dir().join(DEFAULT_LOG_DIR),
        }
    }

    pub fn history_path(&self) -> PathBuf {
        self.log_dir().join(&self.log.history_file)
    }
}

fn executable_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> Result<PackConfig, AppError> {
    let config: PackConfig = toml::from_str(content)?;
    config.converter_command()?;
    config.scanner_command()?;
    Ok(config)
}

/// Load configuration.
///
/// An explicit path must exist. Without one, `orion-pack.toml` beside the
/// executable is used when present; otherwise defaults apply.
pub fn load_config(explicit: Option<&Path>) -> Result<PackConfig, AppError> {
    let path = match explicit {
        Some(path) if !path.is_file() => {
            return Err(AppError::config_error(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = executable_dir().join(DEFAULT_CONFIG_FILE);
            if !candidate.is_file() {
                return Ok(PackConfig::default());
            }
            candidate
        }
    };

    let content = fs::read_to_string(&path)?;
    parse_config(&content)
}
