//! Journal error types

use thiserror::Error;

/// Errors raised by journal input at the boundary
#[derive(Error, Debug, PartialEq)]
pub enum JournalError {
    /// Prompt category is not gratitude, reflection or growth
    #[error("Unknown prompt category: {0}")]
    UnknownCategory(String),

    /// Pane name is not "new" or "view"
    #[error("Unknown pane: {0}")]
    UnknownPane(String),

    /// No entry with this id
    #[error("Journal entry not found: {0}")]
    EntryNotFound(i64),

    /// The view pane needs a selected entry first
    #[error("No journal entry selected")]
    NothingSelected,
}

/// Result type alias for journal operations
pub type JournalResult<T> = Result<T, JournalError>;
