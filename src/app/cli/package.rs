//! Package and validate command implementations.

use std::path::PathBuf;

use clap::Args;

use crate::app::config::PackConfig;
use crate::domain::{AppError, PackageRequest, RunReport};

#[derive(Args)]
pub struct PackageArgs {
    /// Project root directory
    project_root: PathBuf,
    /// Entry-point script or notebook inside the project root
    entry_file: PathBuf,
    /// Output directory inside the project root
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// External data URL (http, https, ftp or ftps)
    #[arg(long)]
    data_url: Option<String>,
    /// External data directory outside the project root
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

impl PackageArgs {
    fn into_request(self) -> PackageRequest {
        PackageRequest::new(
            self.project_root,
            self.entry_file,
            self.output,
            self.data_url,
            self.data_dir,
        )
    }
}

pub fn run_package(args: PackageArgs, config: &PackConfig) -> Result<i32, AppError> {
    let report = crate::package(&args.into_request(), config)?;
    Ok(print_report(&report))
}

pub fn run_validate(args: PackageArgs, config: &PackConfig) -> Result<i32, AppError> {
    let report = crate::validate(&args.into_request(), config)?;
    Ok(print_report(&report))
}

fn print_report(report: &RunReport) -> i32 {
    println!("{}", report.render());
    if report.succeeded() { 0 } else { 1 }
}
