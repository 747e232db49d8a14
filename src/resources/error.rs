//! Resource directory error types

use thiserror::Error;

/// Errors raised by resource directory input
#[derive(Error, Debug, PartialEq)]
pub enum ResourceError {
    /// Type is not article, video, tool or podcast
    #[error("Unknown resource type: {0}")]
    UnknownType(String),

    /// No resource with this id
    #[error("Resource not found: {0}")]
    NotFound(u32),
}

/// Result type alias for resource directory operations
pub type ResourceResult<T> = Result<T, ResourceError>;
