//! A single forum thread: the opening post and its comments
//!
//! Comments can be liked and new ones appended. Blank submissions are
//! dropped without touching the thread.

use super::error::{ForumError, ForumResult};
use super::types::{Comment, ForumPost};
use crate::ids::IdGenerator;

/// Author label given to comments written by the current viewer
pub const ANONYMOUS_AUTHOR: &str = "You (Anonymous)";
/// Initials shown in the avatar for the viewer's comments
pub const ANONYMOUS_INITIALS: &str = "YA";

/// Post view state: the post, its comments and the comment composer
#[derive(Debug)]
pub struct ForumThread {
    post: ForumPost,
    comments: Vec<Comment>,
    draft: String,
    ids: IdGenerator,
}

impl ForumThread {
    pub fn new(post: ForumPost, comments: Vec<Comment>) -> Self {
        let last_id = comments.iter().map(|c| c.id).max().unwrap_or(0);
        Self {
            post,
            comments,
            draft: String::new(),
            ids: IdGenerator::starting_after(last_id),
        }
    }

    pub fn post(&self) -> &ForumPost {
        &self.post
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    pub fn comment(&self, id: i64) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == id)
    }

    /// Current composer text
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Flip the viewer's like on a comment.
    ///
    /// Returns the updated comment. An unknown id changes nothing.
    pub fn toggle_comment_like(&mut self, id: i64) -> ForumResult<&Comment> {
        let comment = self
            .comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ForumError::CommentNotFound(id))?;
        comment.likes.toggle();

        tracing::debug!(
            comment_id = id,
            likes = comment.likes.count,
            liked = comment.likes.liked,
            "Toggled comment like"
        );

        Ok(comment)
    }

    /// Append a comment from the viewer and clear the composer.
    ///
    /// Returns `None` and leaves everything unchanged if `text` is blank.
    pub fn submit_comment(&mut self, text: &str) -> Option<&Comment> {
        if text.trim().is_empty() {
            return None;
        }

        let comment = Comment::new(
            self.ids.next_id(),
            ANONYMOUS_AUTHOR,
            ANONYMOUS_INITIALS,
            text,
        );
        tracing::info!(comment_id = comment.id, "Posted comment");

        self.comments.push(comment);
        self.draft.clear();
        self.comments.last()
    }

    /// Submit whatever is in the composer
    pub fn submit_draft(&mut self) -> Option<&Comment> {
        let text = std::mem::take(&mut self.draft);
        let submitted = self.submit_comment(&text).is_some();
        if !submitted {
            self.draft = text;
            return None;
        }
        self.comments.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thread() -> ForumThread {
        let post = ForumPost {
            title: "Managing Anxiety During Exams".to_string(),
            author: "Anonymous Panda".to_string(),
            posted: "1 day ago".to_string(),
            body: "Any tips?".to_string(),
            likes: 24,
        };
        let comments = vec![
            Comment::new(1, "Anonymous Bee", "AB", "Breathing helps.").with_likes(12),
            Comment::new(2, "Anonymous Fox", "AF", "Exercise helps.").with_likes(8),
        ];
        ForumThread::new(post, comments)
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut thread = thread();

        let liked = thread.toggle_comment_like(1).unwrap();
        assert_eq!(liked.likes.count, 13);
        assert!(liked.likes.liked);

        let unliked = thread.toggle_comment_like(1).unwrap();
        assert_eq!(unliked.likes.count, 12);
        assert!(!unliked.likes.liked);
    }

    #[test]
    fn test_toggle_only_touches_target() {
        let mut thread = thread();
        thread.toggle_comment_like(2).unwrap();
        assert_eq!(thread.comment(1).unwrap().likes.count, 12);
        assert_eq!(thread.comment(2).unwrap().likes.count, 9);
    }

    #[test]
    fn test_toggle_unknown_comment() {
        let mut thread = thread();
        assert_eq!(
            thread.toggle_comment_like(99).unwrap_err(),
            ForumError::CommentNotFound(99)
        );
        assert_eq!(thread.comment(1).unwrap().likes.count, 12);
    }

    #[test]
    fn test_submit_appends_anonymous_comment() {
        let mut thread = thread();
        thread.set_draft("Practice tests help me");

        let comment = thread.submit_comment("Practice tests help me").unwrap().clone();
        assert_eq!(comment.author, ANONYMOUS_AUTHOR);
        assert_eq!(comment.author_initials, ANONYMOUS_INITIALS);
        assert_eq!(comment.timestamp, "Just now");
        assert_eq!(comment.likes.count, 0);
        assert!(!comment.likes.liked);
        assert!(comment.id > 2);

        assert_eq!(thread.comment_count(), 3);
        assert_eq!(thread.comments().last().unwrap().id, comment.id);
        assert!(thread.draft().is_empty());
    }

    #[test]
    fn test_blank_submission_ignored() {
        let mut thread = thread();
        thread.set_draft("   ");

        assert!(thread.submit_comment("").is_none());
        assert!(thread.submit_comment(" \n\t ").is_none());
        assert!(thread.submit_draft().is_none());

        assert_eq!(thread.comment_count(), 2);
        assert_eq!(thread.draft(), "   ");
    }

    #[test]
    fn test_submit_draft() {
        let mut thread = thread();
        thread.set_draft("Walks between study sessions");
        let id = thread.submit_draft().unwrap().id;
        assert_eq!(thread.comment(id).unwrap().content, "Walks between study sessions");
        assert!(thread.draft().is_empty());
    }

    #[test]
    fn test_new_comment_ids_are_unique() {
        let mut thread = thread();
        let a = thread.submit_comment("one").unwrap().id;
        let b = thread.submit_comment("two").unwrap().id;
        assert_ne!(a, b);
    }
}
