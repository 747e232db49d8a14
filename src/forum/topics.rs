//! Topic search for the forum index
//!
//! A topic is shown when its title or description contains the search term
//! (case-insensitive) and it sits in the active category tab. The "all" tab
//! matches every category.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ForumError;
use super::types::{ForumTopic, TopicCategory};

/// Shown when a search leaves no topics
pub const NO_TOPICS_MESSAGE: &str = "No topics found. Try a different search term or category.";

/// The active category tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(TopicCategory),
}

impl CategoryFilter {
    /// Whether a topic in `category` belongs under this tab
    pub fn admits(&self, category: TopicCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(active) => *active == category,
        }
    }

    /// Slug for this tab ("all" or the category slug)
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ForumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            trimmed.parse().map(CategoryFilter::Only)
        }
    }
}

/// A category tab on the forum index
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTab {
    pub value: String,
    pub label: String,
}

/// Tabs in display order, starting with "All Topics"
pub fn category_tabs() -> Vec<CategoryTab> {
    std::iter::once(CategoryTab {
        value: "all".to_string(),
        label: "All Topics".to_string(),
    })
    .chain(TopicCategory::all().iter().map(|c| CategoryTab {
        value: c.as_str().to_string(),
        label: c.label().to_string(),
    }))
    .collect()
}

/// Result of filtering the topic list
#[derive(Debug, Clone, PartialEq)]
pub struct TopicSearch<'a> {
    pub matches: Vec<&'a ForumTopic>,
}

impl<'a> TopicSearch<'a> {
    pub fn has_results(&self) -> bool {
        !self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Message for the "no results" branch, if it applies
    pub fn empty_message(&self) -> Option<&'static str> {
        if self.has_results() {
            None
        } else {
            Some(NO_TOPICS_MESSAGE)
        }
    }
}

/// Filter topics by search term and active category, keeping list order
pub fn filter_topics<'a>(
    topics: &'a [ForumTopic],
    search_term: &str,
    active: CategoryFilter,
) -> TopicSearch<'a> {
    let needle = search_term.to_lowercase();

    let matches: Vec<&ForumTopic> = topics
        .iter()
        .filter(|t| t.matches_text(&needle) && active.admits(t.category))
        .collect();

    tracing::debug!(
        search = %search_term,
        category = active.as_str(),
        matched = matches.len(),
        "Filtered forum topics"
    );

    TopicSearch { matches }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ForumTopic> {
        vec![
            ForumTopic::new(
                1,
                "Sleep Hygiene Strategies",
                "Tips for improving sleep quality and establishing routines.",
                TopicCategory::SelfCare,
            ),
            ForumTopic::new(
                2,
                "Mindfulness Practices",
                "Easy ways to incorporate mindfulness into daily routines.",
                TopicCategory::Mindfulness,
            ),
        ]
    }

    #[test]
    fn test_search_sleep_in_all() {
        let topics = sample();
        let result = filter_topics(&topics, "sleep", CategoryFilter::All);
        assert_eq!(result.len(), 1);
        assert_eq!(result.matches[0].title, "Sleep Hygiene Strategies");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let topics = sample();
        let result = filter_topics(&topics, "SLEEP", CategoryFilter::All);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_search_matches_description() {
        let topics = sample();
        // "routines" appears in both descriptions
        let result = filter_topics(&topics, "routines", CategoryFilter::All);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_empty_search_returns_everything() {
        let topics = sample();
        let result = filter_topics(&topics, "", CategoryFilter::All);
        assert_eq!(result.len(), 2);
        assert!(result.empty_message().is_none());
    }

    #[test]
    fn test_category_restricts() {
        let topics = sample();
        let result = filter_topics(
            &topics,
            "",
            CategoryFilter::Only(TopicCategory::Mindfulness),
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result.matches[0].id, 2);
    }

    #[test]
    fn test_search_and_category_combine() {
        let topics = sample();
        let result = filter_topics(
            &topics,
            "sleep",
            CategoryFilter::Only(TopicCategory::Mindfulness),
        );
        assert!(!result.has_results());
        assert_eq!(result.len(), 0);
        assert_eq!(result.empty_message(), Some(NO_TOPICS_MESSAGE));
    }

    #[test]
    fn test_parse_category_filter() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "resilience".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(TopicCategory::Resilience)
        );
        assert!("nope".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_category_tabs() {
        let tabs = category_tabs();
        assert_eq!(tabs.len(), 7);
        assert_eq!(tabs[0].label, "All Topics");
        assert_eq!(tabs[3].value, "self-care");
        assert_eq!(tabs[5].label, "Digital Wellbeing");
    }
}
