//! Core data types for the community forum
//!
//! - `ForumTopic`: a discussion topic card on the forum index
//! - `TopicCategory`: the fixed set of topic categories
//! - `ForumPost` / `Comment`: a single discussion thread

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ForumError;
use crate::likes::Likes;

/// Category a forum topic is filed under
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TopicCategory {
    Anxiety,
    Mindfulness,
    SelfCare,
    Relationships,
    DigitalWellbeing,
    Resilience,
}

impl TopicCategory {
    /// All categories in tab order
    pub fn all() -> &'static [TopicCategory] {
        &[
            TopicCategory::Anxiety,
            TopicCategory::Mindfulness,
            TopicCategory::SelfCare,
            TopicCategory::Relationships,
            TopicCategory::DigitalWellbeing,
            TopicCategory::Resilience,
        ]
    }

    /// Slug used in URLs and filters
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicCategory::Anxiety => "anxiety",
            TopicCategory::Mindfulness => "mindfulness",
            TopicCategory::SelfCare => "self-care",
            TopicCategory::Relationships => "relationships",
            TopicCategory::DigitalWellbeing => "digital-wellbeing",
            TopicCategory::Resilience => "resilience",
        }
    }

    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            TopicCategory::Anxiety => "Anxiety",
            TopicCategory::Mindfulness => "Mindfulness",
            TopicCategory::SelfCare => "Self-Care",
            TopicCategory::Relationships => "Relationships",
            TopicCategory::DigitalWellbeing => "Digital Wellbeing",
            TopicCategory::Resilience => "Resilience",
        }
    }
}

impl std::fmt::Display for TopicCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopicCategory {
    type Err = ForumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim().to_lowercase();
        TopicCategory::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == slug)
            .ok_or(ForumError::UnknownCategory(s.to_string()))
    }
}

/// A discussion topic listed on the forum index
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForumTopic {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Number of posts in the topic
    pub posts: u32,
    /// Relative label, e.g. "2 hours ago"
    pub last_active: String,
    pub category: TopicCategory,
}

impl ForumTopic {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        category: TopicCategory,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            posts: 0,
            last_active: "Just now".to_string(),
            category,
        }
    }

    /// Builder method: set post count
    pub fn posts(mut self, posts: u32) -> Self {
        self.posts = posts;
        self
    }

    /// Builder method: set last-active label
    pub fn last_active(mut self, label: impl Into<String>) -> Self {
        self.last_active = label.into();
        self
    }

    /// Case-insensitive substring match on title or description.
    /// `needle` must already be lowercased.
    pub(crate) fn matches_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// A reply under a forum post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: i64,
    pub author: String,
    pub author_initials: String,
    pub content: String,
    /// Relative label, e.g. "45 minutes ago"
    pub timestamp: String,
    #[serde(flatten)]
    pub likes: Likes,
}

impl Comment {
    pub fn new(
        id: i64,
        author: impl Into<String>,
        author_initials: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            author: author.into(),
            author_initials: author_initials.into(),
            content: content.into(),
            timestamp: "Just now".to_string(),
            likes: Likes::default(),
        }
    }

    /// Builder method: set relative-time label
    pub fn posted(mut self, label: impl Into<String>) -> Self {
        self.timestamp = label.into();
        self
    }

    /// Builder method: seed like count
    pub fn with_likes(mut self, count: u32) -> Self {
        self.likes = Likes::new(count);
        self
    }
}

/// The opening post of a thread
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForumPost {
    pub title: String,
    pub author: String,
    /// Relative label, e.g. "1 day ago"
    pub posted: String,
    pub body: String,
    pub likes: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip_slug() {
        for category in TopicCategory::all() {
            assert_eq!(category.as_str().parse::<TopicCategory>().unwrap(), *category);
        }
        assert_eq!(
            "Self-Care".parse::<TopicCategory>().unwrap(),
            TopicCategory::SelfCare
        );
        assert!("gardening".parse::<TopicCategory>().is_err());
    }

    #[test]
    fn test_category_serde_is_kebab_case() {
        let json = serde_json::to_string(&TopicCategory::DigitalWellbeing).unwrap();
        assert_eq!(json, "\"digital-wellbeing\"");
    }

    #[test]
    fn test_matches_text_checks_title_and_description() {
        let topic = ForumTopic::new(
            1,
            "Sleep Hygiene Strategies",
            "Tips for improving sleep quality.",
            TopicCategory::SelfCare,
        );
        assert!(topic.matches_text("hygiene"));
        assert!(topic.matches_text("quality"));
        assert!(!topic.matches_text("anxiety"));
    }

    #[test]
    fn test_comment_flattens_likes() {
        let comment = Comment::new(1, "Anonymous Bee", "AB", "hello").with_likes(3);
        let json = serde_json::to_value(&comment).unwrap();
        assert_eq!(json["likes"], 3);
        assert_eq!(json["is_liked"], false);
        assert_eq!(json["timestamp"], "Just now");
    }
}
