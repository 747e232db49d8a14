//! Mood tracker view state
//!
//! Holds the recorded entries, the calendar's selected day and the draft
//! entry being edited for that day. Saving upserts the draft: an entry on
//! the same calendar date is replaced in place, otherwise the draft is
//! appended.

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

use super::error::{MoodError, MoodResult};
use super::trends::{build_trends, TrendPoint};
use super::types::{Level, MoodEntry, SleepHours};

/// What a save did to the entry set
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SaveOutcome {
    /// A new date was recorded
    Inserted,
    /// The entry for this date was overwritten
    Replaced,
}

/// Calendar markers for one day. Both flags can be set at once.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DayMarker {
    pub has_entry: bool,
    pub selected: bool,
    pub is_today: bool,
}

/// A day cell in the month calendar
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub day: u32,
    #[serde(flatten)]
    pub marker: DayMarker,
}

/// One month of the calendar
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub days: Vec<CalendarDay>,
}

/// Mood tracker state
#[derive(Debug, Clone)]
pub struct MoodTracker {
    entries: Vec<MoodEntry>,
    selected: NaiveDate,
    draft: MoodEntry,
    today: NaiveDate,
}

impl MoodTracker {
    /// Create a tracker that treats the local date as today
    pub fn new(entries: Vec<MoodEntry>) -> Self {
        Self::with_today(entries, Local::now().date_naive())
    }

    /// Create a tracker with an explicit "today", selecting that day
    pub fn with_today(entries: Vec<MoodEntry>, today: NaiveDate) -> Self {
        let mut tracker = Self {
            entries,
            selected: today,
            draft: MoodEntry::blank(today),
            today,
        };
        tracker.select_date(today);
        tracker
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// The entry currently being edited
    pub fn draft(&self) -> &MoodEntry {
        &self.draft
    }

    pub fn entry_for(&self, date: NaiveDate) -> Option<&MoodEntry> {
        self.entries.iter().find(|e| e.date == date)
    }

    pub fn has_entry(&self, date: NaiveDate) -> bool {
        self.entry_for(date).is_some()
    }

    /// Select a calendar day and load its entry into the draft.
    ///
    /// Days without an entry get a fresh draft with default ratings.
    pub fn select_date(&mut self, date: NaiveDate) -> &MoodEntry {
        self.selected = date;
        self.draft = match self.entry_for(date) {
            Some(existing) => existing.clone(),
            None => MoodEntry::blank(date),
        };

        tracing::debug!(date = %date, existing = self.has_entry(date), "Selected mood date");
        &self.draft
    }

    pub fn set_mood(&mut self, mood: Level) {
        self.draft.mood = mood;
    }

    pub fn set_energy(&mut self, energy: Level) {
        self.draft.energy = energy;
    }

    pub fn set_sleep(&mut self, sleep: SleepHours) {
        self.draft.sleep = sleep;
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.draft.notes = notes.into();
    }

    /// Upsert the draft under the selected date
    pub fn save_entry(&mut self) -> SaveOutcome {
        let mut entry = self.draft.clone();
        entry.date = self.selected;

        let outcome = match self.entries.iter().position(|e| e.date == self.selected) {
            Some(index) => {
                self.entries[index] = entry;
                SaveOutcome::Replaced
            }
            None => {
                self.entries.push(entry);
                SaveOutcome::Inserted
            }
        };

        tracing::info!(
            date = %self.selected,
            outcome = ?outcome,
            total = self.entries.len(),
            "Saved mood entry"
        );

        outcome
    }

    /// Calendar markers for a single day
    pub fn day_marker(&self, date: NaiveDate) -> DayMarker {
        DayMarker {
            has_entry: self.has_entry(date),
            selected: date == self.selected,
            is_today: date == self.today,
        }
    }

    /// Every day of a month with its markers
    pub fn calendar_month(&self, year: i32, month: u32) -> MoodResult<CalendarMonth> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(MoodError::InvalidMonth { year, month })?;

        let days = first
            .iter_days()
            .take_while(|d| d.month() == month)
            .map(|date| CalendarDay {
                date,
                day: date.day(),
                marker: self.day_marker(date),
            })
            .collect();

        Ok(CalendarMonth { year, month, days })
    }

    /// Calendar for the month holding the selected day
    pub fn selected_month(&self) -> CalendarMonth {
        let (year, month) = (self.selected.year(), self.selected.month());
        // The selected date always names a valid month
        self.calendar_month(year, month).unwrap_or(CalendarMonth {
            year,
            month,
            days: Vec::new(),
        })
    }

    /// Trend strip over all entries, oldest first
    pub fn trends(&self) -> Vec<TrendPoint> {
        build_trends(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn tracker() -> MoodTracker {
        let entries = vec![
            MoodEntry::new(day(10), 2, 2, 6.0, "Feeling a bit down today."),
            MoodEntry::new(day(11), 3, 3, 7.0, "Better today."),
        ];
        MoodTracker::with_today(entries, day(15))
    }

    #[test]
    fn test_starts_on_today_with_defaults() {
        let tracker = tracker();
        assert_eq!(tracker.selected_date(), day(15));
        assert_eq!(tracker.draft(), &MoodEntry::blank(day(15)));
    }

    #[test]
    fn test_starts_on_today_with_existing_entry() {
        let entries = vec![MoodEntry::new(day(15), 4, 1, 9.0, "Great")];
        let tracker = MoodTracker::with_today(entries, day(15));
        assert_eq!(tracker.draft().mood.value(), 4);
        assert_eq!(tracker.draft().notes, "Great");
    }

    #[test]
    fn test_select_empty_date_gives_defaults() {
        let mut tracker = tracker();
        let draft = tracker.select_date(day(12)).clone();
        assert_eq!(draft.date, day(12));
        assert_eq!(draft.mood.value(), 3);
        assert_eq!(draft.energy.value(), 3);
        assert_eq!(draft.sleep.hours(), 7.0);
        assert_eq!(draft.notes, "");
    }

    #[test]
    fn test_select_existing_date_loads_entry() {
        let mut tracker = tracker();
        let draft = tracker.select_date(day(10));
        assert_eq!(draft.mood.value(), 2);
        assert_eq!(draft.sleep.hours(), 6.0);
    }

    #[test]
    fn test_save_then_reselect_returns_saved_values() {
        let mut tracker = tracker();
        tracker.select_date(day(12));
        tracker.set_mood(Level::clamped(4));
        tracker.set_energy(Level::clamped(1));
        tracker.set_sleep(SleepHours::clamped(8.5));
        tracker.set_notes("Good conversation with a friend");
        tracker.save_entry();

        tracker.select_date(day(13));
        let draft = tracker.select_date(day(12)).clone();
        assert_eq!(draft.mood.value(), 4);
        assert_eq!(draft.energy.value(), 1);
        assert_eq!(draft.sleep.hours(), 8.5);
        assert_eq!(draft.notes, "Good conversation with a friend");
    }

    #[test]
    fn test_save_existing_date_replaces_in_place() {
        let mut tracker = tracker();
        tracker.select_date(day(10));
        tracker.set_mood(Level::MAX);

        assert_eq!(tracker.save_entry(), SaveOutcome::Replaced);
        assert_eq!(tracker.entries().len(), 2);
        assert_eq!(tracker.entries()[0].date, day(10));
        assert_eq!(tracker.entries()[0].mood, Level::MAX);
    }

    #[test]
    fn test_save_new_date_appends_one() {
        let mut tracker = tracker();
        tracker.select_date(day(14));

        assert_eq!(tracker.save_entry(), SaveOutcome::Inserted);
        assert_eq!(tracker.entries().len(), 3);
        assert_eq!(tracker.entries()[2].date, day(14));

        // Saving again on the same day is now a replace
        assert_eq!(tracker.save_entry(), SaveOutcome::Replaced);
        assert_eq!(tracker.entries().len(), 3);
    }

    #[test]
    fn test_day_marker_flags_are_independent() {
        let mut tracker = tracker();
        tracker.select_date(day(10));

        let both = tracker.day_marker(day(10));
        assert!(both.has_entry && both.selected);

        let entry_only = tracker.day_marker(day(11));
        assert!(entry_only.has_entry && !entry_only.selected);

        let neither = tracker.day_marker(day(12));
        assert!(!neither.has_entry && !neither.selected);

        let today = tracker.day_marker(day(15));
        assert!(today.is_today && !today.selected);
    }

    #[test]
    fn test_calendar_month() {
        let tracker = tracker();
        let month = tracker.calendar_month(2024, 3).unwrap();
        assert_eq!(month.days.len(), 31);
        assert!(month.days[9].marker.has_entry);
        assert!(month.days[14].marker.selected);
        assert_eq!(month.days.iter().filter(|d| d.marker.has_entry).count(), 2);

        let feb = tracker.calendar_month(2024, 2).unwrap();
        assert_eq!(feb.days.len(), 29);

        assert_eq!(
            tracker.calendar_month(2024, 13),
            Err(MoodError::InvalidMonth { year: 2024, month: 13 })
        );
    }

    #[test]
    fn test_selected_month_follows_selection() {
        let mut tracker = tracker();
        tracker.select_date(NaiveDate::from_ymd_opt(2024, 4, 2).unwrap());
        let month = tracker.selected_month();
        assert_eq!(month.month, 4);
        assert_eq!(month.days.len(), 30);
        assert!(month.days[1].marker.selected);
    }
}
