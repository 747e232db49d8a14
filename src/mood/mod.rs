//! Mood Tracker
//!
//! - **types**: `Level`, `SleepHours` and `MoodEntry`
//! - **tracker**: selected date, draft editing and date-keyed upsert
//! - **trends**: the oldest-first trend strip
//! - **error**: error types
//!
//! Entries are keyed by `chrono::NaiveDate`, so "same day" is plain
//! calendar-date equality with no time zone or DST arithmetic involved.

pub mod error;
pub mod tracker;
pub mod trends;
pub mod types;

pub use error::{MoodError, MoodResult};
pub use tracker::{CalendarDay, CalendarMonth, DayMarker, MoodTracker, SaveOutcome};
pub use trends::{build_trends, TrendPoint};
pub use types::{parse_date, Level, MoodEntry, SleepHours, MOOD_EMOJIS};
