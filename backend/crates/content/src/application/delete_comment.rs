//! Delete Comment Use Case
//!
//! Editors, or the owning commentator.

use std::sync::Arc;

use kernel::id::CommentId;
use kernel::policy::Action;
use kernel::principal::Principal;

use crate::application::ensure_allowed;
use crate::domain::repository::CommentRepository;
use crate::error::{ContentError, ContentResult};

/// Delete comment use case
pub struct DeleteCommentUseCase<R>
where
    R: CommentRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteCommentUseCase<R>
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
    ) -> ContentResult<()> {
        let comment = self
            .repo
            .find_comment_by_id(comment_id)
            .await?
            .ok_or(ContentError::CommentNotFound)?;

        ensure_allowed(principal, Action::DeleteComment, Some(comment.author.user_id))?;

        self.repo.delete_comment(comment_id).await?;

        tracing::info!(comment_id = %comment_id, "Comment deleted");

        Ok(())
    }
}
