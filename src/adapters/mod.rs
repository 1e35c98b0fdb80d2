pub mod external_command;
pub mod history_file;
pub mod nbconvert_command;
pub mod pipreqs_command;
pub mod tracing_logger;

pub use external_command::ExternalCommand;
pub use history_file::FileRunHistory;
pub use nbconvert_command::NbconvertCommandAdapter;
pub use pipreqs_command::PipreqsCommandAdapter;
pub use tracing_logger::TracingRunLogger;
