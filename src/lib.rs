//! orion-pack: package data-science projects into task archives for the Orion platform.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use adapters::{FileRunHistory, NbconvertCommandAdapter, PipreqsCommandAdapter, TracingRunLogger};
use app::AppContext;
use app::commands::package as pipeline;

pub use app::config::{PackConfig, load_config};
pub use domain::{AppError, PackageRequest, RunReport, Severity, TaskDescriptor};

/// Context wired with the real external tools, tracing logger and history file.
pub type ProductionContext =
    AppContext<NbconvertCommandAdapter, PipreqsCommandAdapter, TracingRunLogger, FileRunHistory>;

/// Build the production context from configuration.
pub fn production_context(config: &PackConfig) -> Result<ProductionContext, AppError> {
    Ok(AppContext::new(
        NbconvertCommandAdapter::new(config.converter_command()?),
        PipreqsCommandAdapter::new(config.scanner_command()?),
        TracingRunLogger::new(Some(config.log_dir())),
        FileRunHistory::new(config.history_path()),
    ))
}

/// Package a project into an Orion task archive.
///
/// Only configuration problems are returned as errors; everything that goes
/// wrong during the run itself is reported in the returned [`RunReport`].
pub fn package(request: &PackageRequest, config: &PackConfig) -> Result<RunReport, AppError> {
    let ctx = production_context(config)?;
    Ok(pipeline::execute(&ctx, request))
}

/// Run input validation only. Top-level notebooks are still converted.
pub fn validate(request: &PackageRequest, config: &PackConfig) -> Result<RunReport, AppError> {
    let ctx = production_context(config)?;
    Ok(pipeline::validate_only(&ctx, request))
}
