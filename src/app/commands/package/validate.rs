//! Input checks run before anything is generated.
//!
//! Checks run in a fixed order and stop at the first failure. Every failure
//! is recorded in the report, and the returned error carries the whole
//! error trail accumulated so far.

use std::fs;
use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::paths::{
    NOTEBOOK_EXTENSION, SCRIPT_EXTENSION, absolutize, has_path_prefix, is_filesystem_root,
    notebook_companion,
};
use crate::domain::{AppError, PackageRequest, RunReport, Severity, is_inside, is_valid_url};
use crate::ports::{DependencyScanner, NotebookConverter, RunHistory, RunLogger};

use super::convert::convert_all;

/// Inputs that passed validation, with directories made absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput {
    pub project_root: PathBuf,
    pub entry_file: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub data_url: Option<String>,
    pub data_dir: Option<PathBuf>,
}

/// Run all five checks against `request`.
///
/// The project-root check converts the root's top-level notebooks as a side
/// effect, so a notebook entry file has its script by the time it is checked.
pub fn validate<C, S, L, H>(
    ctx: &AppContext<C, S, L, H>,
    request: &PackageRequest,
    report: &mut RunReport,
) -> Result<ValidatedInput, AppError>
where
    C: NotebookConverter,
    S: DependencyScanner,
    L: RunLogger,
    H: RunHistory,
{
    let project_root = check_project_root(ctx, &request.project_root, report)?;
    check_entry_file(ctx, &request.entry_file, &project_root, report)?;
    let output_dir = check_output_dir(ctx, request.output_dir(), &project_root, report)?;
    check_data_url(ctx, request.data_url(), report)?;
    let data_dir = check_data_dir(ctx, request.data_dir(), &project_root, report)?;

    Ok(ValidatedInput {
        project_root,
        entry_file: request.entry_file.clone(),
        output_dir,
        data_url: request.data_url.clone(),
        data_dir,
    })
}

fn reject<C, S, L, H>(ctx: &AppContext<C, S, L, H>, report: &mut RunReport, message: &str) -> AppError
where
    C: NotebookConverter,
    S: DependencyScanner,
    L: RunLogger,
    H: RunHistory,
{
    ctx.record(report, Severity::Error, message);
    AppError::ValidationFailed(report.error_text().to_string())
}

fn check_project_root<C, S, L, H>(
    ctx: &AppContext<C, S, L, H>,
    project_root: &Path,
    report: &mut RunReport,
) -> Result<PathBuf, AppError>
where
    C: NotebookConverter,
    S: DependencyScanner,
    L: RunLogger,
    H: RunHistory,
{
    if !project_root.is_dir() || is_filesystem_root(project_root) {
        return Err(reject(ctx, report, "Project directory does not exist or it is the root."));
    }
    let root = absolutize(project_root).map_err(|e| reject(ctx, report, &e.to_string()))?;

    match convert_all(ctx.converter(), &root) {
        Ok(_) => {
            ctx.record(report, Severity::Info, "Validated files successfully!");
            Ok(root)
        }
        Err(e) => {
            ctx.record(report, Severity::Error, &e.to_string());
            let message = match ctx.logger().destination() {
                Some(dest) => format!(
                    "Conversion task failed, please refer to {} for more details.",
                    dest.display()
                ),
                None => "Conversion task failed.".to_string(),
            };
            Err(reject(ctx, report, &message))
        }
    }
}

fn check_entry_file<C, S, L, H>(
    ctx: &AppContext<C, S, L, H>,
    entry_file: &Path,
    project_root: &Path,
    report: &mut RunReport,
) -> Result<(), AppError>
where
    C: NotebookConverter,
    S: DependencyScanner,
    L: RunLogger,
    H: RunHistory,
{
    let script = absolutize(&notebook_companion(entry_file))
        .map_err(|e| reject(ctx, report, &e.to_string()))?;

    if !has_path_prefix(&script, project_root) {
        return Err(reject(
            ctx,
            report,
            "The file to be converted is NOT inside the project root directory.",
        ));
    }
    if !(script.is_file() || entry_file.is_file()) {
        return Err(reject(ctx, report, "The entry-point file to be converted does NOT exist."));
    }
    let extension = script.extension().and_then(|e| e.to_str()).unwrap_or_default();
    if extension != SCRIPT_EXTENSION && extension != NOTEBOOK_EXTENSION {
        return Err(reject(
            ctx,
            report,
            "The entry-point file to be converted is Neither a '.py' file Nor an '.ipynb' file.",
        ));
    }
    Ok(())
}

fn check_output_dir<C, S, L, H>(
    ctx: &AppContext<C, S, L, H>,
    output_dir: Option<&Path>,
    project_root: &Path,
    report: &mut RunReport,
) -> Result<Option<PathBuf>, AppError>
where
    C: NotebookConverter,
    S: DependencyScanner,
    L: RunLogger,
    H: RunHistory,
{
    let Some(output_dir) = output_dir else {
        ctx.record(
            report,
            Severity::Warning,
            "Warning: output directory is empty, no result files will be output.",
        );
        return Ok(None);
    };

    let output_dir = absolutize(output_dir).map_err(|e| reject(ctx, report, &e.to_string()))?;
    fs::create_dir_all(&output_dir).map_err(|e| {
        reject(ctx, report, &format!("Output directory could not be created: {e}"))
    })?;
    if !is_inside(&output_dir, project_root) {
        return Err(reject(ctx, report, "Output directory is NOT inside the project root directory."));
    }
    Ok(Some(output_dir))
}

fn check_data_url<C, S, L, H>(
    ctx: &AppContext<C, S, L, H>,
    data_url: Option<&str>,
    report: &mut RunReport,
) -> Result<(), AppError>
where
    C: NotebookConverter,
    S: DependencyScanner,
    L: RunLogger,
    H: RunHistory,
{
    if !is_valid_url(data_url.unwrap_or_default()) {
        return Err(reject(ctx, report, "Invalid Data URL!"));
    }
    Ok(())
}

fn check_data_dir<C, S, L, H>(
    ctx: &AppContext<C, S, L, H>,
    data_dir: Option<&Path>,
    project_root: &Path,
    report: &mut RunReport,
) -> Result<Option<PathBuf>, AppError>
where
    C: NotebookConverter,
    S: DependencyScanner,
    L: RunLogger,
    H: RunHistory,
{
    let Some(data_dir) = data_dir else {
        return Ok(None);
    };

    let data_dir = absolutize(data_dir).map_err(|e| reject(ctx, report, &e.to_string()))?;
    fs::create_dir_all(&data_dir)
        .map_err(|e| reject(ctx, report, &format!("Data directory could not be created: {e}")))?;
    if is_inside(&data_dir, project_root) {
        return Err(reject(ctx, report, "Data directory must be outside the project root directory."));
    }
    Ok(Some(data_dir))
}
