//! Resource directory filter
//!
//! Three independent predicates, all of which must hold:
//! - the search text appears in the title or description (case-insensitive)
//! - no type is selected, or the resource's type is selected
//! - no category is selected, or one of the resource's categories is selected

use std::collections::BTreeSet;

use super::error::ResourceResult;
use super::types::{Resource, ResourceType};

/// Search text plus the checked type and category boxes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceFilter {
    pub search: String,
    pub types: BTreeSet<ResourceType>,
    pub categories: BTreeSet<String>,
}

impl ResourceFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set search text
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Builder method: check a type box
    pub fn with_type(mut self, kind: ResourceType) -> Self {
        self.types.insert(kind);
        self
    }

    /// Builder method: check a category box
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    /// Check the box if unchecked, uncheck it otherwise
    pub fn toggle_type(&mut self, kind: ResourceType) {
        if !self.types.remove(&kind) {
            self.types.insert(kind);
        }
    }

    /// Check the box if unchecked, uncheck it otherwise
    pub fn toggle_category(&mut self, category: &str) {
        if !self.categories.remove(category) {
            self.categories.insert(category.to_string());
        }
    }

    /// Build from comma-separated lists, as carried in query strings.
    /// Empty items are skipped.
    pub fn from_lists(search: &str, types: &str, categories: &str) -> ResourceResult<Self> {
        let types = split_list(types)
            .map(|s| s.parse::<ResourceType>())
            .collect::<ResourceResult<BTreeSet<ResourceType>>>()?;
        let categories = split_list(categories).map(str::to_string).collect();

        Ok(Self {
            search: search.to_string(),
            types,
            categories,
        })
    }

    /// Whether `resource` passes every predicate
    pub fn matches(&self, resource: &Resource) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = resource.title.to_lowercase().contains(&needle)
            || resource.description.to_lowercase().contains(&needle);

        let matches_type = self.types.is_empty() || self.types.contains(&resource.kind);

        let matches_category = self.categories.is_empty()
            || resource
                .categories
                .iter()
                .any(|c| self.categories.contains(c));

        matches_search && matches_type && matches_category
    }
}

fn split_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> Resource {
        Resource::new(
            1,
            "Understanding Anxiety",
            "Causes and symptoms of anxiety.",
            ResourceType::Article,
        )
        .category("anxiety")
        .category("student-life")
    }

    fn video() -> Resource {
        Resource::new(2, "Mindfulness Meditation", "A short guided meditation.", ResourceType::Video)
            .category("mindfulness")
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let filter = ResourceFilter::new();
        assert!(filter.matches(&article()));
        assert!(filter.matches(&video()));
    }

    #[test]
    fn test_type_filter() {
        let filter = ResourceFilter::new().with_type(ResourceType::Article);
        assert!(filter.matches(&article()));
        assert!(!filter.matches(&video()));
    }

    #[test]
    fn test_category_filter_any_of() {
        let filter = ResourceFilter::new()
            .with_category("student-life")
            .with_category("sleep");
        assert!(filter.matches(&article()));
        assert!(!filter.matches(&video()));
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let filter = ResourceFilter::new()
            .search("meditation")
            .with_type(ResourceType::Article);
        assert!(!filter.matches(&article()));
        assert!(!filter.matches(&video()));
    }

    #[test]
    fn test_search_case_insensitive_on_description() {
        let filter = ResourceFilter::new().search("SYMPTOMS");
        assert!(filter.matches(&article()));
    }

    #[test]
    fn test_toggles() {
        let mut filter = ResourceFilter::new();
        filter.toggle_type(ResourceType::Tool);
        filter.toggle_category("sleep");
        assert!(filter.types.contains(&ResourceType::Tool));
        assert!(filter.categories.contains("sleep"));

        filter.toggle_type(ResourceType::Tool);
        filter.toggle_category("sleep");
        assert_eq!(filter, ResourceFilter::new());
    }

    #[test]
    fn test_from_lists() {
        let filter = ResourceFilter::from_lists("calm", "article, video,", "sleep").unwrap();
        assert_eq!(filter.search, "calm");
        assert_eq!(filter.types.len(), 2);
        assert!(filter.categories.contains("sleep"));

        assert!(ResourceFilter::from_lists("", "book", "").is_err());
        assert_eq!(ResourceFilter::from_lists("", "", "").unwrap(), ResourceFilter::new());
    }
}
