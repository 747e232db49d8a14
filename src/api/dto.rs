//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::forum::{Comment, ForumPost, ForumTopic};
use crate::journal::{JournalEntry, Pane, PromptCategory};
use crate::mood::{MoodEntry, SaveOutcome, TrendPoint};
use crate::resources::Resource;
use crate::site::HomePage;

// ============================================
// SITE DTOs
// ============================================

/// Navigation query parameters
#[derive(Debug, Default, Deserialize)]
pub struct NavigationQuery {
    /// Current page path, defaults to "/"
    #[serde(default)]
    pub path: Option<String>,
}

/// Home page copy with the footer line
#[derive(Debug, Serialize)]
pub struct HomeResponse {
    #[serde(flatten)]
    pub page: HomePage,
    pub footer: String,
}

// ============================================
// FORUM DTOs
// ============================================

/// Topic filter query parameters
#[derive(Debug, Default, Deserialize)]
pub struct TopicQuery {
    #[serde(default)]
    pub search: Option<String>,
    /// Category value or "all"
    #[serde(default)]
    pub category: Option<String>,
}

/// Filtered topic list
#[derive(Debug, Serialize)]
pub struct TopicListResponse {
    pub total: usize,
    pub category: String,
    pub topics: Vec<ForumTopic>,
    /// Shown when nothing matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// Post with its comments
#[derive(Debug, Serialize)]
pub struct ThreadResponse {
    pub post: ForumPost,
    pub comment_count: usize,
    pub comments: Vec<Comment>,
}

/// Comment submission
#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub content: String,
}

/// Result of a comment submission
#[derive(Debug, Serialize)]
pub struct CommentSubmitResponse {
    /// False when the content was blank and nothing was added
    pub submitted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
    pub comment_count: usize,
}

// ============================================
// TRACKER DTOs
// ============================================

/// Tracker view
#[derive(Debug, Serialize)]
pub struct TrackerResponse {
    pub today: NaiveDate,
    pub selected_date: NaiveDate,
    /// Whether the selected date already has a saved entry
    pub has_entry: bool,
    pub draft: MoodEntry,
    pub mood_emoji: &'static str,
    pub entry_count: usize,
}

/// Date selection
#[derive(Debug, Deserialize)]
pub struct SelectDateRequest {
    /// YYYY-MM-DD
    pub date: String,
}

/// Partial draft update; omitted fields are left unchanged
#[derive(Debug, Default, Deserialize)]
pub struct DraftUpdateRequest {
    #[serde(default)]
    pub mood: Option<i64>,
    #[serde(default)]
    pub energy: Option<i64>,
    #[serde(default)]
    pub sleep: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Result of saving the draft
#[derive(Debug, Serialize)]
pub struct MoodSaveResponse {
    pub outcome: SaveOutcome,
    pub entry: MoodEntry,
    pub entry_count: usize,
}

/// Calendar query parameters; defaults to the selected month
#[derive(Debug, Default, Deserialize)]
pub struct CalendarQuery {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub month: Option<u32>,
}

/// Trend strip
#[derive(Debug, Serialize)]
pub struct TrendsResponse {
    pub total: usize,
    pub points: Vec<TrendPoint>,
}

// ============================================
// JOURNAL DTOs
// ============================================

/// Journal entry with its display date
#[derive(Debug, Serialize)]
pub struct JournalEntryResponse {
    #[serde(flatten)]
    pub entry: JournalEntry,
    pub formatted_date: String,
}

impl From<&JournalEntry> for JournalEntryResponse {
    fn from(entry: &JournalEntry) -> Self {
        Self {
            formatted_date: entry.formatted_date(),
            entry: entry.clone(),
        }
    }
}

/// Journal view
#[derive(Debug, Serialize)]
pub struct JournalResponse {
    pub pane: Pane,
    pub category: PromptCategory,
    pub category_label: &'static str,
    pub prompt: String,
    pub draft: String,
    pub can_save: bool,
    pub entries: Vec<JournalEntryResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<JournalEntryResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// Category switch
#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub category: String,
}

/// Newly drawn prompt
#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub category: PromptCategory,
    pub prompt: String,
}

/// Journal entry submission
#[derive(Debug, Deserialize)]
pub struct JournalWriteRequest {
    pub content: String,
}

/// Result of a journal submission
#[derive(Debug, Serialize)]
pub struct JournalSaveResponse {
    /// False when the content was blank and nothing was saved
    pub saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<JournalEntryResponse>,
    pub total: usize,
}

/// Pane switch
#[derive(Debug, Deserialize)]
pub struct PaneRequest {
    pub pane: String,
}

// ============================================
// RESOURCE DTOs
// ============================================

/// Resource filter query parameters (comma-separated lists)
#[derive(Debug, Default, Deserialize)]
pub struct ResourceQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub types: Option<String>,
    #[serde(default)]
    pub categories: Option<String>,
}

/// Resource with its like button label
#[derive(Debug, Serialize)]
pub struct ResourceResponse {
    #[serde(flatten)]
    pub resource: Resource,
    pub helpful_label: String,
}

impl From<&Resource> for ResourceResponse {
    fn from(resource: &Resource) -> Self {
        Self {
            helpful_label: resource.helpful_label(),
            resource: resource.clone(),
        }
    }
}

/// Filtered resource list
#[derive(Debug, Serialize)]
pub struct ResourceListResponse {
    pub total: usize,
    pub resources: Vec<ResourceResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// Facet value with a display label
#[derive(Debug, Serialize)]
pub struct FacetValue {
    pub value: String,
    pub label: String,
}

/// Available filter facets
#[derive(Debug, Serialize)]
pub struct FacetsResponse {
    pub types: Vec<FacetValue>,
    pub categories: Vec<FacetValue>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
    pub topics: usize,
    pub comments: usize,
    pub mood_entries: usize,
    pub journal_entries: usize,
    pub resources: usize,
}
