//! Resource directory view state
//!
//! The catalog itself is fixed; only the like counters change at runtime.

use super::error::{ResourceError, ResourceResult};
use super::filter::ResourceFilter;
use super::types::Resource;

/// Shown when the filter leaves no resources
pub const NO_RESOURCES_MESSAGE: &str = "No resources found matching your criteria.";

/// Result of filtering the directory
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSearch<'a> {
    pub matches: Vec<&'a Resource>,
}

impl<'a> ResourceSearch<'a> {
    pub fn has_results(&self) -> bool {
        !self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        if self.has_results() {
            None
        } else {
            Some(NO_RESOURCES_MESSAGE)
        }
    }
}

/// The resource catalog with per-resource likes
#[derive(Debug, Clone)]
pub struct ResourceDirectory {
    resources: Vec<Resource>,
}

impl ResourceDirectory {
    pub fn new(resources: Vec<Resource>) -> Self {
        Self { resources }
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn get(&self, id: u32) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    /// Distinct categories in the order they first appear in the catalog
    pub fn all_categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for category in self.resources.iter().flat_map(|r| r.categories.iter()) {
            if !seen.contains(&category.as_str()) {
                seen.push(category.as_str());
            }
        }
        seen
    }

    /// Resources passing `filter`, in catalog order
    pub fn filter(&self, filter: &ResourceFilter) -> ResourceSearch<'_> {
        let matches: Vec<&Resource> = self.resources.iter().filter(|r| filter.matches(r)).collect();

        tracing::debug!(
            search = %filter.search,
            types = filter.types.len(),
            categories = filter.categories.len(),
            matched = matches.len(),
            "Filtered resources"
        );

        ResourceSearch { matches }
    }

    /// Flip the viewer's like on a resource
    pub fn toggle_like(&mut self, id: u32) -> ResourceResult<&Resource> {
        let resource = self
            .resources
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ResourceError::NotFound(id))?;
        resource.likes.toggle();

        tracing::debug!(
            resource_id = id,
            likes = resource.likes.count,
            liked = resource.likes.liked,
            "Toggled resource like"
        );

        Ok(resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::types::ResourceType;

    fn directory() -> ResourceDirectory {
        ResourceDirectory::new(vec![
            Resource::new(1, "Understanding Anxiety", "A guide.", ResourceType::Article)
                .category("anxiety")
                .category("student-life")
                .with_likes(42),
            Resource::new(2, "5-Minute Mindfulness", "Guided meditation.", ResourceType::Video)
                .category("mindfulness")
                .category("stress-relief")
                .with_likes(78),
            Resource::new(3, "Digital Detox", "Healthier tech habits.", ResourceType::Article)
                .category("digital-wellbeing")
                .with_likes(27),
            Resource::new(4, "Stress Management", "Academic pressure.", ResourceType::Video)
                .category("stress-relief")
                .category("student-life")
                .with_likes(62),
        ])
    }

    #[test]
    fn test_article_type_only() {
        let directory = directory();
        let filter = ResourceFilter::new().with_type(ResourceType::Article);
        let result = directory.filter(&filter);
        assert_eq!(result.len(), 2);
        assert!(result.matches.iter().all(|r| r.kind == ResourceType::Article));
    }

    #[test]
    fn test_no_results_message() {
        let directory = directory();
        let filter = ResourceFilter::new().search("podcast about whales");
        let result = directory.filter(&filter);
        assert!(!result.has_results());
        assert_eq!(result.empty_message(), Some(NO_RESOURCES_MESSAGE));
    }

    #[test]
    fn test_all_categories_first_seen_order() {
        let directory = directory();
        assert_eq!(
            directory.all_categories(),
            vec![
                "anxiety",
                "student-life",
                "mindfulness",
                "stress-relief",
                "digital-wellbeing"
            ]
        );
    }

    #[test]
    fn test_toggle_like_twice() {
        let mut directory = directory();
        assert_eq!(directory.toggle_like(2).unwrap().likes.count, 79);
        let resource = directory.toggle_like(2).unwrap();
        assert_eq!(resource.likes.count, 78);
        assert!(!resource.likes.liked);
    }

    #[test]
    fn test_toggle_like_unknown() {
        let mut directory = directory();
        assert_eq!(directory.toggle_like(99).unwrap_err(), ResourceError::NotFound(99));
    }

    #[test]
    fn test_like_survives_filtering() {
        let mut directory = directory();
        directory.toggle_like(1).unwrap();
        let filter = ResourceFilter::new().with_category("anxiety");
        let result = directory.filter(&filter);
        assert_eq!(result.matches[0].likes.count, 43);
        assert!(result.matches[0].likes.liked);
    }
}
