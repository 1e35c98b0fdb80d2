//! CLI Adapter.

mod package;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::{config, logging};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "orion-pack")]
#[command(version)]
#[command(about = "Package a data-science project into an Orion task archive", long_about = None)]
struct Cli {
    /// Configuration file (defaults to orion-pack.toml beside the executable)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate inputs, generate manifests and build the task archive
    #[clap(visible_alias = "p")]
    Package(package::PackageArgs),
    /// Validate inputs only (top-level notebooks are still converted)
    #[clap(visible_alias = "v")]
    Validate(package::PackageArgs),
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let settings = match config::load_config(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let guard = logging::init(&settings.log_dir(), cli.verbose);

    let result: Result<i32, AppError> = match cli.command {
        Commands::Package(args) => package::run_package(args, &settings),
        Commands::Validate(args) => package::run_validate(args, &settings),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                drop(guard);
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            drop(guard);
            std::process::exit(1);
        }
    }
}
