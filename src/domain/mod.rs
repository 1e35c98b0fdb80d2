pub mod data_url;
pub mod error;
pub mod layout;
pub mod paths;
pub mod report;
pub mod request;
pub mod requirements;
pub mod task_descriptor;

pub use data_url::is_valid_url;
pub use error::AppError;
pub use paths::is_inside;
pub use report::{RunReport, Severity};
pub use request::PackageRequest;
pub use requirements::fix_requirements;
pub use task_descriptor::TaskDescriptor;
