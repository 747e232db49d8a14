//! Core data types for the mood tracker
//!
//! - `Level`: a 0-4 rating used for mood and energy
//! - `SleepHours`: 0-12 hours in half-hour steps
//! - `MoodEntry`: one day's record, keyed by calendar date

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::{MoodError, MoodResult};

/// Emoji for each mood level, lowest first
pub const MOOD_EMOJIS: [&str; 5] = ["😔", "😕", "😐", "🙂", "😊"];

/// A mood or energy rating between 0 and 4 inclusive
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "i64", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: Level = Level(0);
    pub const MAX: Level = Level(4);
    /// Starting value for a fresh draft
    pub const DEFAULT: Level = Level(3);

    /// Build a level, pinning out-of-range values to the nearest bound
    pub fn clamped(value: i64) -> Self {
        Level(value.clamp(0, 4) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Emoji shown for this mood level
    pub fn emoji(&self) -> &'static str {
        MOOD_EMOJIS[self.0 as usize]
    }

    /// One-based level shown on the energy scale
    pub fn display_level(&self) -> u8 {
        self.0 + 1
    }

    /// Bar opacity for the trend strip
    pub fn intensity(&self) -> f64 {
        0.2 + f64::from(self.0) * 0.2
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::DEFAULT
    }
}

impl TryFrom<i64> for Level {
    type Error = MoodError;

    fn try_from(value: i64) -> MoodResult<Self> {
        if (0..=4).contains(&value) {
            Ok(Level(value as u8))
        } else {
            Err(MoodError::LevelOutOfRange(value))
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        level.0
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hours slept, held as a count of half hours between 0 and 12 h
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "f64", into = "f64")]
pub struct SleepHours(u8);

impl SleepHours {
    pub const MAX_HOURS: f64 = 12.0;
    /// Starting value for a fresh draft
    pub const DEFAULT: SleepHours = SleepHours(14);

    /// Round to the nearest half hour and pin into 0..=12.
    /// NaN becomes zero.
    pub fn clamped(hours: f64) -> Self {
        if hours.is_nan() {
            return SleepHours(0);
        }
        let halves = (hours.clamp(0.0, Self::MAX_HOURS) * 2.0).round();
        SleepHours(halves as u8)
    }

    pub fn hours(&self) -> f64 {
        f64::from(self.0) / 2.0
    }

    /// Bar opacity for the trend strip
    pub fn intensity(&self) -> f64 {
        0.2 + (self.hours() / Self::MAX_HOURS) * 0.8
    }
}

impl Default for SleepHours {
    fn default() -> Self {
        SleepHours::DEFAULT
    }
}

impl TryFrom<f64> for SleepHours {
    type Error = MoodError;

    /// Accepts 0..=12, rounding to the nearest half hour
    fn try_from(hours: f64) -> MoodResult<Self> {
        if hours.is_finite() && (0.0..=Self::MAX_HOURS).contains(&hours) {
            Ok(Self::clamped(hours))
        } else {
            Err(MoodError::SleepOutOfRange(hours))
        }
    }
}

impl From<SleepHours> for f64 {
    fn from(sleep: SleepHours) -> f64 {
        sleep.hours()
    }
}

impl std::fmt::Display for SleepHours {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hours())
    }
}

/// One day's mood record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoodEntry {
    /// Calendar day; at most one entry per date
    pub date: NaiveDate,
    pub mood: Level,
    pub energy: Level,
    pub sleep: SleepHours,
    #[serde(default)]
    pub notes: String,
}

impl MoodEntry {
    /// A fresh entry with default ratings
    pub fn blank(date: NaiveDate) -> Self {
        Self {
            date,
            mood: Level::DEFAULT,
            energy: Level::DEFAULT,
            sleep: SleepHours::DEFAULT,
            notes: String::new(),
        }
    }

    /// Build a fully specified entry, clamping the ratings
    pub fn new(date: NaiveDate, mood: i64, energy: i64, sleep: f64, notes: impl Into<String>) -> Self {
        Self {
            date,
            mood: Level::clamped(mood),
            energy: Level::clamped(energy),
            sleep: SleepHours::clamped(sleep),
            notes: notes.into(),
        }
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> MoodResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| MoodError::InvalidDate(s.to_string()))
}
