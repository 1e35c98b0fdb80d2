use crate::domain::AppError;

/// Append-only record of completed runs.
pub trait RunHistory {
    /// Append one entry. Entries are never rewritten.
    fn append(&self, entry: &str) -> Result<(), AppError>;

    /// Where the history lives, for error messages.
    fn location(&self) -> String;
}
