//! API DTOs (Data Transfer Objects)
//!
//! One request/response shape per operation. Create requests have no
//! author field at all, and the comment create request has no publish
//! timestamp; unknown fields in a request body are ignored, so
//! client-supplied values for either can never reach an entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kernel::id::{CommentId, PostId, UserId};
use kernel::validate::{Violations, check_length, check_not_blank};

use crate::application::config::ContentConfig;
use crate::application::query_posts::PostDetail;
use crate::domain::entities::{AuthorRef, Comment, CommentDraft, Post, PostDraft, PostPatch};

// ============================================================================
// Posts
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub slug: String,
    pub content: String,
    /// Optional; defaults to the creation time
    pub published: Option<DateTime<Utc>>,
}

impl CreatePostRequest {
    /// Field-validate against the configured bounds.
    pub fn validate(&self, config: &ContentConfig) -> Result<PostDraft, Violations> {
        let mut violations = Violations::new();
        validate_post_fields(&mut violations, &self.title, &self.slug, &self.content, config);
        violations.into_result()?;

        Ok(PostDraft {
            title: self.title.clone(),
            slug: self.slug.clone(),
            content: self.content.clone(),
            published: self.published,
        })
    }
}

/// Update post request (the author is not part of any request shape)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: String,
    pub slug: String,
    pub content: String,
    /// Optional; absent keeps the stored timestamp
    pub published: Option<DateTime<Utc>>,
}

impl UpdatePostRequest {
    pub fn validate(&self, config: &ContentConfig) -> Result<PostPatch, Violations> {
        let mut violations = Violations::new();
        validate_post_fields(&mut violations, &self.title, &self.slug, &self.content, config);
        violations.into_result()?;

        Ok(PostPatch {
            title: self.title.clone(),
            slug: self.slug.clone(),
            content: self.content.clone(),
            published: self.published,
        })
    }
}

fn validate_post_fields(
    violations: &mut Violations,
    title: &str,
    slug: &str,
    content: &str,
    config: &ContentConfig,
) {
    check_not_blank(violations, "title", title);
    if !title.trim().is_empty() {
        check_length(violations, "title", title, config.title_min, config.title_max);
    }

    check_not_blank(violations, "slug", slug);
    if !slug.trim().is_empty() {
        check_length(violations, "slug", slug, config.slug_min, config.slug_max);
    }

    check_not_blank(violations, "content", content);
}

// ============================================================================
// Comments
// ============================================================================

/// Create comment request (author and publish timestamp are server-set)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub content: String,
    /// Parent post id
    pub post_id: PostId,
}

impl CreateCommentRequest {
    pub fn validate(&self, config: &ContentConfig) -> Result<CommentDraft, Violations> {
        let mut violations = Violations::new();
        check_not_blank(&mut violations, "content", &self.content);
        if !self.content.trim().is_empty() {
            check_length(&mut violations, "content", &self.content, 1, config.comment_max);
        }
        violations.into_result()?;

        Ok(CommentDraft {
            content: self.content.clone(),
            post_id: self.post_id,
        })
    }
}

/// Update comment request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommentRequest {
    pub content: String,
}

impl UpdateCommentRequest {
    pub fn validate(&self, config: &ContentConfig) -> Result<String, Violations> {
        let mut violations = Violations::new();
        check_not_blank(&mut violations, "content", &self.content);
        if !self.content.trim().is_empty() {
            check_length(&mut violations, "content", &self.content, 1, config.comment_max);
        }
        violations.into_result()?;

        Ok(self.content.clone())
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Author as embedded in post/comment responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: UserId,
    pub username: String,
}

impl From<AuthorRef> for AuthorResponse {
    fn from(author: AuthorRef) -> Self {
        Self {
            id: author.user_id,
            username: author.username,
        }
    }
}

/// Post as it appears in collections
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: PostId,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub published: DateTime<Utc>,
    pub author: AuthorResponse,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.post_id,
            title: post.title,
            slug: post.slug,
            content: post.content,
            published: post.published,
            author: AuthorResponse::from(post.author),
        }
    }
}

/// Post item response with embedded comments
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailResponse {
    pub id: PostId,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub published: DateTime<Utc>,
    pub author: AuthorResponse,
    pub comments: Vec<CommentResponse>,
}

impl From<PostDetail> for PostDetailResponse {
    fn from(detail: PostDetail) -> Self {
        let post = detail.post;
        Self {
            id: post.post_id,
            title: post.title,
            slug: post.slug,
            content: post.content,
            published: post.published,
            author: AuthorResponse::from(post.author),
            comments: detail
                .comments
                .into_iter()
                .map(CommentResponse::from)
                .collect(),
        }
    }
}

/// Comment as exposed by the API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: CommentId,
    pub content: String,
    pub published: DateTime<Utc>,
    pub author: AuthorResponse,
    pub post_id: PostId,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.comment_id,
            content: comment.content,
            published: comment.published,
            author: AuthorResponse::from(comment.author),
            post_id: comment.post_id,
        }
    }
}
