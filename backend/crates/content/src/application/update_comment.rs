//! Update Comment Use Case
//!
//! Editors, or the owning commentator.

use std::sync::Arc;

use kernel::id::CommentId;
use kernel::policy::Action;
use kernel::principal::Principal;

use crate::application::ensure_allowed;
use crate::domain::entities::Comment;
use crate::domain::repository::CommentRepository;
use crate::error::{ContentError, ContentResult};

/// Update comment use case
pub struct UpdateCommentUseCase<R>
where
    R: CommentRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateCommentUseCase<R>
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
        content: String,
    ) -> ContentResult<Comment> {
        let mut comment = self
            .repo
            .find_comment_by_id(comment_id)
            .await?
            .ok_or(ContentError::CommentNotFound)?;

        ensure_allowed(principal, Action::UpdateComment, Some(comment.author.user_id))?;

        comment.set_content(content);
        self.repo.update_comment(&comment).await?;

        tracing::info!(comment_id = %comment.comment_id, "Comment updated");

        Ok(comment)
    }
}
