//! Guided journal view state
//!
//! Left side: saved entries, newest first. Right side: two panes. The
//! `New` pane shows the active category, its current prompt and the draft;
//! the `View` pane shows one selected entry. Saving keeps the prompt and
//! category so the next entry can reuse them, and clears only the draft.

use chrono::{Local, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{JournalError, JournalResult};
use super::prompts::PromptCategory;
use crate::ids::IdGenerator;

/// Shown in the entry list when there is nothing saved
pub const NO_ENTRIES_MESSAGE: &str = "No journal entries yet.";

/// A saved journal entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub prompt: String,
    pub content: String,
    pub category: PromptCategory,
}

impl JournalEntry {
    /// Long date, e.g. "Thursday, March 14, 2024"
    pub fn formatted_date(&self) -> String {
        self.date.format("%A, %B %-d, %Y").to_string()
    }
}

/// Which editor pane is showing
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Pane {
    #[default]
    New,
    View,
}

impl FromStr for Pane {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(Pane::New),
            "view" => Ok(Pane::View),
            _ => Err(JournalError::UnknownPane(s.to_string())),
        }
    }
}

/// Journal state
#[derive(Debug)]
pub struct Journal {
    entries: Vec<JournalEntry>,
    pane: Pane,
    category: PromptCategory,
    prompt: String,
    draft: String,
    selected: Option<i64>,
    ids: IdGenerator,
}

impl Journal {
    /// Start on the first gratitude prompt with an empty draft.
    /// `entries` are expected newest first.
    pub fn new(entries: Vec<JournalEntry>) -> Self {
        let last_id = entries.iter().map(|e| e.id).max().unwrap_or(0);
        let category = PromptCategory::default();
        Self {
            entries,
            pane: Pane::New,
            category,
            prompt: category.first_prompt().to_string(),
            draft: String::new(),
            selected: None,
            ids: IdGenerator::starting_after(last_id),
        }
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn entry(&self, id: i64) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn pane(&self) -> Pane {
        self.pane
    }

    pub fn category(&self) -> PromptCategory {
        self.category
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, content: impl Into<String>) {
        self.draft = content.into();
    }

    pub fn selected_entry(&self) -> Option<&JournalEntry> {
        self.selected.and_then(|id| self.entry(id))
    }

    /// Save is offered only in the new-entry pane with a non-blank draft
    pub fn can_save(&self) -> bool {
        self.pane == Pane::New && !self.draft.trim().is_empty()
    }

    /// Draw another prompt from the active category
    pub fn next_prompt(&mut self) -> &str {
        self.next_prompt_with(&mut rand::thread_rng())
    }

    pub fn next_prompt_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &str {
        self.prompt = self.category.random_prompt(rng).to_string();
        tracing::debug!(category = %self.category, "Drew journal prompt");
        &self.prompt
    }

    /// Switch category and draw a prompt from it
    pub fn set_category(&mut self, category: PromptCategory) -> &str {
        self.set_category_with(category, &mut rand::thread_rng())
    }

    pub fn set_category_with<R: Rng + ?Sized>(
        &mut self,
        category: PromptCategory,
        rng: &mut R,
    ) -> &str {
        self.category = category;
        self.next_prompt_with(rng)
    }

    /// Save `content` as a new entry at the top of the list, dated today.
    ///
    /// Blank content is ignored. On success the draft is cleared; the
    /// prompt and category stay as they are.
    pub fn save_entry(&mut self, content: &str) -> Option<&JournalEntry> {
        self.save_entry_on(content, Local::now().date_naive())
    }

    /// Save the current draft
    pub fn save_draft(&mut self) -> Option<&JournalEntry> {
        let content = self.draft.clone();
        self.save_entry(&content)
    }

    /// Save with an explicit date
    pub fn save_entry_on(&mut self, content: &str, date: NaiveDate) -> Option<&JournalEntry> {
        if content.trim().is_empty() {
            return None;
        }

        let entry = JournalEntry {
            id: self.ids.next_id(),
            date,
            prompt: self.prompt.clone(),
            content: content.to_string(),
            category: self.category,
        };
        tracing::info!(entry_id = entry.id, category = %entry.category, "Saved journal entry");

        self.entries.insert(0, entry);
        self.draft.clear();
        self.entries.first()
    }

    /// Select an entry and show it in the view pane
    pub fn select_entry(&mut self, id: i64) -> JournalResult<&JournalEntry> {
        if self.entry(id).is_none() {
            return Err(JournalError::EntryNotFound(id));
        }
        self.selected = Some(id);
        self.pane = Pane::View;
        self.entry(id).ok_or(JournalError::EntryNotFound(id))
    }

    /// Switch panes. The view pane stays disabled until an entry is selected.
    pub fn set_pane(&mut self, pane: Pane) -> JournalResult<()> {
        if pane == Pane::View && self.selected_entry().is_none() {
            return Err(JournalError::NothingSelected);
        }
        self.pane = pane;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn journal() -> Journal {
        Journal::new(vec![JournalEntry {
            id: 1,
            date: date(7),
            prompt: PromptCategory::Gratitude.first_prompt().to_string(),
            content: "My supportive friends.".to_string(),
            category: PromptCategory::Gratitude,
        }])
    }

    #[test]
    fn test_initial_state() {
        let journal = journal();
        assert_eq!(journal.pane(), Pane::New);
        assert_eq!(journal.category(), PromptCategory::Gratitude);
        assert_eq!(journal.prompt(), PromptCategory::Gratitude.first_prompt());
        assert!(journal.draft().is_empty());
        assert!(!journal.can_save());
    }

    #[test]
    fn test_save_prepends_and_keeps_prompt() {
        let mut journal = journal();
        let mut rng = StdRng::seed_from_u64(3);
        journal.set_category_with(PromptCategory::Growth, &mut rng);
        let prompt = journal.prompt().to_string();
        journal.set_draft("Saying no to one commitment");

        let saved = journal
            .save_entry_on("Saying no to one commitment", date(9))
            .unwrap()
            .clone();
        assert_eq!(saved.prompt, prompt);
        assert_eq!(saved.category, PromptCategory::Growth);
        assert_eq!(saved.date, date(9));
        assert!(saved.id > 1);

        assert_eq!(journal.entries().len(), 2);
        assert_eq!(journal.entries()[0].id, saved.id);
        assert!(journal.draft().is_empty());
        assert_eq!(journal.prompt(), prompt);
        assert_eq!(journal.category(), PromptCategory::Growth);
    }

    #[test]
    fn test_save_draft_uses_today() {
        let mut journal = journal();
        journal.set_draft("Quiet morning");
        assert!(journal.can_save());
        let saved = journal.save_draft().unwrap();
        assert_eq!(saved.content, "Quiet morning");
        assert_eq!(saved.date, Local::now().date_naive());
    }

    #[test]
    fn test_blank_save_ignored() {
        let mut journal = journal();
        journal.set_draft("  \n ");
        assert!(!journal.can_save());
        assert!(journal.save_draft().is_none());
        assert!(journal.save_entry("").is_none());
        assert_eq!(journal.entries().len(), 1);
        assert_eq!(journal.draft(), "  \n ");
    }

    #[test]
    fn test_set_category_draws_from_new_pool() {
        let mut journal = journal();
        let mut rng = StdRng::seed_from_u64(11);
        let prompt = journal
            .set_category_with(PromptCategory::Reflection, &mut rng)
            .to_string();
        assert!(PromptCategory::Reflection.pool().iter().any(|p| *p == prompt));
        assert_eq!(journal.category(), PromptCategory::Reflection);
    }

    #[test]
    fn test_next_prompt_stays_in_category() {
        let mut journal = journal();
        for _ in 0..20 {
            let prompt = journal.next_prompt().to_string();
            assert!(PromptCategory::Gratitude.pool().iter().any(|p| *p == prompt));
        }
    }

    #[test]
    fn test_view_pane_requires_selection() {
        let mut journal = journal();
        assert_eq!(journal.set_pane(Pane::View), Err(JournalError::NothingSelected));
        assert_eq!(journal.pane(), Pane::New);

        let entry = journal.select_entry(1).unwrap();
        assert_eq!(entry.id, 1);
        assert_eq!(journal.pane(), Pane::View);
        assert!(!journal.can_save());

        journal.set_pane(Pane::New).unwrap();
        journal.set_pane(Pane::View).unwrap();
        assert_eq!(journal.selected_entry().unwrap().id, 1);
    }

    #[test]
    fn test_select_unknown_entry() {
        let mut journal = journal();
        assert_eq!(journal.select_entry(77).unwrap_err(), JournalError::EntryNotFound(77));
        assert_eq!(journal.pane(), Pane::New);
    }

    #[test]
    fn test_formatted_date() {
        let journal = journal();
        let entry = &journal.entries()[0];
        assert_eq!(entry.formatted_date(), "Thursday, March 7, 2024");
    }

    #[test]
    fn test_parse_pane() {
        assert_eq!("VIEW".parse::<Pane>().unwrap(), Pane::View);
        assert!("edit".parse::<Pane>().is_err());
    }
}
