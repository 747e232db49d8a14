//! Trend strip: every entry laid out oldest first with its display values

use chrono::NaiveDate;
use serde::Serialize;

use super::types::MoodEntry;

/// One column of the trend strip
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub mood: u8,
    pub mood_emoji: &'static str,
    /// Energy on the one-based scale shown to users
    pub energy_level: u8,
    pub sleep_hours: f64,
    pub mood_intensity: f64,
    pub energy_intensity: f64,
    pub sleep_intensity: f64,
}

impl From<&MoodEntry> for TrendPoint {
    fn from(entry: &MoodEntry) -> Self {
        Self {
            date: entry.date,
            mood: entry.mood.value(),
            mood_emoji: entry.mood.emoji(),
            energy_level: entry.energy.display_level(),
            sleep_hours: entry.sleep.hours(),
            mood_intensity: entry.mood.intensity(),
            energy_intensity: entry.energy.intensity(),
            sleep_intensity: entry.sleep.intensity(),
        }
    }
}

/// Build trend points sorted by date without reordering the entries
pub fn build_trends(entries: &[MoodEntry]) -> Vec<TrendPoint> {
    let mut points: Vec<TrendPoint> = entries.iter().map(TrendPoint::from).collect();
    points.sort_by_key(|p| p.date);
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_sorted_oldest_first() {
        let entries = vec![
            MoodEntry::new(day(12), 1, 1, 5.0, ""),
            MoodEntry::new(day(10), 4, 4, 8.0, ""),
            MoodEntry::new(day(11), 2, 2, 6.0, ""),
        ];
        let points = build_trends(&entries);
        let dates: Vec<_> = points.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![day(10), day(11), day(12)]);
        // Source order untouched
        assert_eq!(entries[0].date, day(12));
    }

    #[test]
    fn test_display_values() {
        let point = TrendPoint::from(&MoodEntry::new(day(10), 2, 0, 6.0, ""));
        assert_eq!(point.mood_emoji, "😐");
        assert_eq!(point.energy_level, 1);
        assert!((point.mood_intensity - 0.6).abs() < 1e-9);
        assert!((point.energy_intensity - 0.2).abs() < 1e-9);
        assert!((point.sleep_intensity - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_empty() {
        assert!(build_trends(&[]).is_empty());
    }
}
