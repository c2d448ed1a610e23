//! Comment Query Use Cases

use std::sync::Arc;

use kernel::id::{CommentId, PostId};
use kernel::page::{Page, Paged};
use kernel::policy::Action;
use kernel::principal::Principal;

use crate::application::ensure_allowed;
use crate::domain::entities::Comment;
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::error::{ContentError, ContentResult};

/// Fetch a single comment (authenticated callers only)
pub struct GetCommentUseCase<R>
where
    R: CommentRepository,
{
    repo: Arc<R>,
}

impl<R> GetCommentUseCase<R>
where
    R: CommentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        principal: Option<&Principal>,
        comment_id: CommentId,
    ) -> ContentResult<Comment> {
        ensure_allowed(principal, Action::GetComment, None)?;

        self.repo
            .find_comment_by_id(comment_id)
            .await?
            .ok_or(ContentError::CommentNotFound)
    }
}

/// List comments (public), either globally or under one post.
pub struct ListCommentsUseCase<R>
where
    R: PostRepository + CommentRepository,
{
    repo: Arc<R>,
}

impl<R> ListCommentsUseCase<R>
where
    R: PostRepository + CommentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, page: Page) -> ContentResult<Paged<Comment>> {
        self.repo.list_comments(page).await
    }

    /// The sub-resource `/posts/{id}/comments`; 404s when the post is
    /// missing rather than returning an empty page.
    pub async fn by_post(&self, post_id: PostId, page: Page) -> ContentResult<Paged<Comment>> {
        if self.repo.find_post_by_id(post_id).await?.is_none() {
            return Err(ContentError::PostNotFound);
        }

        self.repo.list_comments_by_post(post_id, page).await
    }
}
