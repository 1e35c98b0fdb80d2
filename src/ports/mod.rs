mod dependency_scanner;
mod notebook_converter;
mod run_history;
mod run_logger;

pub use dependency_scanner::DependencyScanner;
pub use notebook_converter::NotebookConverter;
pub use run_history::RunHistory;
pub use run_logger::RunLogger;
