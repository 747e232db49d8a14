//! Community Forum
//!
//! - **types**: topics, categories, posts and comments
//! - **topics**: search and category filtering for the forum index
//! - **thread**: a single post with likeable comments and a composer
//! - **error**: error types

pub mod error;
pub mod thread;
pub mod topics;
pub mod types;

pub use error::{ForumError, ForumResult};
pub use thread::{ForumThread, ANONYMOUS_AUTHOR, ANONYMOUS_INITIALS};
pub use topics::{category_tabs, filter_topics, CategoryFilter, CategoryTab, TopicSearch, NO_TOPICS_MESSAGE};
pub use types::{Comment, ForumPost, ForumTopic, TopicCategory};
