//! Resource catalog types

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ResourceError;
use crate::likes::Likes;

/// Kind of resource
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Article,
    Video,
    Tool,
    Podcast,
}

impl ResourceType {
    /// All types in checkbox order
    pub fn all() -> &'static [ResourceType] {
        &[
            ResourceType::Article,
            ResourceType::Video,
            ResourceType::Tool,
            ResourceType::Podcast,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Article => "article",
            ResourceType::Video => "video",
            ResourceType::Tool => "tool",
            ResourceType::Podcast => "podcast",
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "article" => Ok(ResourceType::Article),
            "video" => Ok(ResourceType::Video),
            "tool" => Ok(ResourceType::Tool),
            "podcast" => Ok(ResourceType::Podcast),
            _ => Err(ResourceError::UnknownType(s.to_string())),
        }
    }
}

/// A directory entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub categories: Vec<String>,
    pub url: String,
    #[serde(flatten)]
    pub likes: Likes,
}

impl Resource {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        kind: ResourceType,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            kind,
            categories: Vec::new(),
            url: "#".to_string(),
            likes: Likes::default(),
        }
    }

    /// Builder method: add a category tag
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Builder method: set external link
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Builder method: seed like count
    pub fn with_likes(mut self, count: u32) -> Self {
        self.likes = Likes::new(count);
        self
    }

    /// "1 person found this helpful" / "N people found this helpful"
    pub fn helpful_label(&self) -> String {
        let noun = if self.likes.count == 1 { "person" } else { "people" };
        format!("{} {} found this helpful", self.likes.count, noun)
    }
}

/// Category tag as shown beside its checkbox, e.g. "student life"
pub fn category_label(category: &str) -> String {
    category.replace('-', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_parse() {
        assert_eq!("Podcast".parse::<ResourceType>().unwrap(), ResourceType::Podcast);
        assert!("book".parse::<ResourceType>().is_err());
    }

    #[test]
    fn test_serialized_shape() {
        let resource = Resource::new(1, "Guide", "About anxiety", ResourceType::Article)
            .category("anxiety")
            .with_likes(42);
        let json = serde_json::to_value(&resource).unwrap();
        assert_eq!(json["type"], "article");
        assert_eq!(json["likes"], 42);
        assert_eq!(json["is_liked"], false);
        assert_eq!(json["categories"][0], "anxiety");
    }

    #[test]
    fn test_helpful_label() {
        let mut resource = Resource::new(1, "t", "d", ResourceType::Tool).with_likes(1);
        assert_eq!(resource.helpful_label(), "1 person found this helpful");
        resource.likes.toggle();
        assert_eq!(resource.helpful_label(), "2 people found this helpful");
        let none = Resource::new(2, "t", "d", ResourceType::Tool);
        assert_eq!(none.helpful_label(), "0 people found this helpful");
    }

    #[test]
    fn test_category_label() {
        assert_eq!(category_label("positive-psychology"), "positive psychology");
    }
}
