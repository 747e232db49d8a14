//! Like-toggle shared by forum comments and directory resources.
//!
//! The liked flag and the counter always move together: liking adds one,
//! un-liking removes one. Toggling twice returns both to where they started.

use serde::{Deserialize, Serialize};

/// A like counter paired with the viewer's liked flag
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Likes {
    /// Number of people who liked the item
    #[serde(rename = "likes")]
    pub count: u32,
    /// Whether the current viewer has liked it
    #[serde(rename = "is_liked")]
    pub liked: bool,
}

impl Likes {
    /// Start from a seeded count that the viewer has not liked yet
    pub fn new(count: u32) -> Self {
        Self {
            count,
            liked: false,
        }
    }

    /// Flip the liked flag and move the counter with it
    pub fn toggle(&mut self) {
        if self.liked {
            self.count = self.count.saturating_sub(1);
        } else {
            self.count += 1;
        }
        self.liked = !self.liked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_moves_count_with_flag() {
        let mut likes = Likes::new(12);

        likes.toggle();
        assert_eq!(likes.count, 13);
        assert!(likes.liked);

        likes.toggle();
        assert_eq!(likes.count, 12);
        assert!(!likes.liked);
    }

    #[test]
    fn test_toggle_from_zero() {
        let mut likes = Likes::default();
        likes.toggle();
        assert_eq!(likes, Likes { count: 1, liked: true });
        likes.toggle();
        assert_eq!(likes, Likes::default());
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(Likes::new(5)).unwrap();
        assert_eq!(json["likes"], 5);
        assert_eq!(json["is_liked"], false);
    }
}
