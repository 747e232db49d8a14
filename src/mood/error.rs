//! Mood tracker error types

use thiserror::Error;

/// Errors raised when mood input falls outside what the tracker can hold
#[derive(Error, Debug, PartialEq)]
pub enum MoodError {
    /// Mood or energy level outside 0..=4
    #[error("Level out of range: {0} (expected 0-4)")]
    LevelOutOfRange(i64),

    /// Sleep hours outside 0..=12 or not a number
    #[error("Sleep hours out of range: {0} (expected 0-12)")]
    SleepOutOfRange(f64),

    /// Date string could not be parsed
    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// Year/month pair does not name a calendar month
    #[error("Invalid month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },
}

/// Result type alias for mood tracker operations
pub type MoodResult<T> = Result<T, MoodError>;
