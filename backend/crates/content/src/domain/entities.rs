//! Domain Entities
//!
//! Drafts hold what the client may supply; `New*` records additionally
//! carry the server-assigned attribution and only the enrichment
//! services in [`crate::domain::services`] produce them. This makes
//! "the client cannot choose the author" a property of the types.

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, PostId, UserId};

/// Author reference embedded in read models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRef {
    pub user_id: UserId,
    pub username: String,
}

/// A persisted post.
#[derive(Debug, Clone)]
pub struct Post {
    /// Database-assigned identifier
    pub post_id: PostId,
    pub title: String,
    /// URL slug, unique across posts
    pub slug: String,
    pub content: String,
    /// Publish timestamp (client-supplied or defaulted to creation time)
    pub published: DateTime<Utc>,
    pub author: AuthorRef,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied post fields, before enrichment.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub published: Option<DateTime<Utc>>,
}

/// A post ready for persistence; author already stamped.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub published: DateTime<Utc>,
    pub author_id: UserId,
}

/// Fields a post update may change. The author never changes hands.
#[derive(Debug, Clone)]
pub struct PostPatch {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub published: Option<DateTime<Utc>>,
}

impl Post {
    /// Apply an update patch; absent publish timestamps keep the
    /// current value.
    pub fn apply(&mut self, patch: PostPatch) {
        self.title = patch.title;
        self.slug = patch.slug;
        self.content = patch.content;
        if let Some(published) = patch.published {
            self.published = published;
        }
        self.updated_at = Utc::now();
    }
}

/// A persisted comment.
#[derive(Debug, Clone)]
pub struct Comment {
    /// Database-assigned identifier
    pub comment_id: CommentId,
    pub content: String,
    /// Server-set publish timestamp
    pub published: DateTime<Utc>,
    pub author: AuthorRef,
    /// Parent post
    pub post_id: PostId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied comment fields, before enrichment.
#[derive(Debug, Clone)]
pub struct CommentDraft {
    pub content: String,
    pub post_id: PostId,
}

/// A comment ready for persistence; author and timestamp stamped.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub content: String,
    pub post_id: PostId,
    pub author_id: UserId,
    pub published: DateTime<Utc>,
}

impl Comment {
    /// Replace the comment body.
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }
}
