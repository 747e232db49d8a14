//! Forum error types

use thiserror::Error;

/// Errors raised while parsing forum input at the boundary
#[derive(Error, Debug, PartialEq)]
pub enum ForumError {
    /// Category slug is not one of the known categories
    #[error("Unknown topic category: {0}")]
    UnknownCategory(String),

    /// No comment with this id in the thread
    #[error("Comment not found: {0}")]
    CommentNotFound(i64),
}

/// Result type alias for forum operations
pub type ForumResult<T> = Result<T, ForumError>;
