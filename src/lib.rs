//! # Bloom
//!
//! View-models and a JSON API for a peer-support mental wellness community:
//! discussion forums, a daily mood tracker, a guided journal and a curated
//! resource directory. All state lives in memory and starts from built-in
//! sample data.
//!
//! ## Modules
//!
//! - [`forum`]: topic filtering and the discussion thread with comments
//! - [`mood`]: mood/energy/sleep entries, calendar and trends
//! - [`journal`]: prompt categories, drafting and the entry list
//! - [`resources`]: resource catalog with search and facet filters
//! - [`site`]: navigation, home page copy and page intros
//! - [`api`]: REST API server with Axum
//!
//! ## Quick Start
//!
//! ```rust
//! use bloom::forum::CategoryFilter;
//! use bloom::{filter_topics, seed};
//!
//! let topics = seed::forum_topics();
//! let search = filter_topics(&topics, "sleep", CategoryFilter::All);
//! assert_eq!(search.len(), 1);
//!
//! let mut thread = seed::forum_thread();
//! let before = thread.comment_count();
//! thread.submit_comment("Thank you all for sharing.");
//! assert_eq!(thread.comment_count(), before + 1);
//! ```

pub mod api;
pub mod config;
pub mod forum;
pub mod ids;
pub mod journal;
pub mod likes;
pub mod logging;
pub mod mood;
pub mod resources;
pub mod seed;
pub mod site;

// Re-export top-level types for convenience
pub use forum::{
    filter_topics, CategoryFilter, Comment, ForumError, ForumPost, ForumThread, ForumTopic,
    TopicCategory,
};

pub use mood::{Level, MoodEntry, MoodError, MoodTracker, SleepHours, TrendPoint};

pub use journal::{Journal, JournalEntry, JournalError, Pane, PromptCategory};

pub use resources::{Resource, ResourceDirectory, ResourceError, ResourceFilter, ResourceType};

pub use site::{navigation, Route, SiteError};

pub use likes::Likes;

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig};
