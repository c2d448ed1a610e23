//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{CommentId, PostId, UserId};
use kernel::page::{Page, Paged};

use crate::domain::entities::{Comment, NewComment, NewPost, Post};
use crate::error::ContentResult;

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Persist a new post; the database assigns the id.
    async fn create_post(&self, post: &NewPost) -> ContentResult<Post>;

    /// Find post by ID
    async fn find_post_by_id(&self, post_id: PostId) -> ContentResult<Option<Post>>;

    /// Find post by slug
    async fn find_post_by_slug(&self, slug: &str) -> ContentResult<Option<Post>>;

    /// One page of posts, newest first
    async fn list_posts(&self, page: Page) -> ContentResult<Paged<Post>>;

    /// One page of a single author's posts, newest first
    async fn list_posts_by_author(&self, author_id: UserId, page: Page)
    -> ContentResult<Paged<Post>>;

    /// Update title/slug/content/published
    async fn update_post(&self, post: &Post) -> ContentResult<()>;

    /// Delete a post; its comments go with it
    async fn delete_post(&self, post_id: PostId) -> ContentResult<()>;
}

/// Comment repository trait
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    /// Persist a new comment; the database assigns the id.
    async fn create_comment(&self, comment: &NewComment) -> ContentResult<Comment>;

    /// Find comment by ID
    async fn find_comment_by_id(&self, comment_id: CommentId) -> ContentResult<Option<Comment>>;

    /// One page of comments across all posts, newest first
    async fn list_comments(&self, page: Page) -> ContentResult<Paged<Comment>>;

    /// One page of a post's comments, oldest first
    async fn list_comments_by_post(
        &self,
        post_id: PostId,
        page: Page,
    ) -> ContentResult<Paged<Comment>>;

    /// Update the comment body
    async fn update_comment(&self, comment: &Comment) -> ContentResult<()>;

    /// Delete a comment
    async fn delete_comment(&self, comment_id: CommentId) -> ContentResult<()>;
}
