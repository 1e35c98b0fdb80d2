use std::path::Path;
use std::process::Command;

use crate::domain::AppError;

/// A configured external program: executable plus leading arguments.
///
/// The target path is appended as the final argument on every invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    program: String,
    args: Vec<String>,
}

impl ExternalCommand {
    /// Build from an argv-style list. The list must not be empty.
    pub fn from_argv(argv: &[String]) -> Result<Self, AppError> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| AppError::config_error("External command must name a program"))?;
        Ok(Self { program: program.clone(), args: args.to_vec() })
    }

    /// Run against `target` and wait for it to exit.
    ///
    /// Output is captured; stderr is surfaced in the error on failure.
    pub fn run(&self, target: &Path) -> Result<(), AppError> {
        let command_line = format!("{} {} {}", self.program, self.args.join(" "), target.display());
        tracing::debug!(command = %command_line, "running external command");

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(target)
            .output()
            .map_err(|e| AppError::CommandFailed { command: command_line.clone(), details: e.to_string() })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::CommandFailed {
                command: command_line,
                details: if stderr.is_empty() { output.status.to_string() } else { stderr },
            });
        }

        Ok(())
    }
}
