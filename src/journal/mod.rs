//! Guided Journal
//!
//! - **prompts**: the three prompt categories and their fixed pools
//! - **editor**: saved entries, the new/view panes and saving
//! - **error**: error types

pub mod editor;
pub mod error;
pub mod prompts;

pub use editor::{Journal, JournalEntry, Pane, NO_ENTRIES_MESSAGE};
pub use error::{JournalError, JournalResult};
pub use prompts::PromptCategory;
