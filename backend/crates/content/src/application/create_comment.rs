//! Create Comment Use Case
//!
//! Commentators only. Author and publish timestamp are stamped from the
//! principal and the server clock between validation and persistence.

use std::sync::Arc;

use chrono::Utc;
use kernel::policy::Action;
use kernel::principal::Principal;

use crate::application::ensure_allowed;
use crate::domain::entities::{Comment, CommentDraft};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::domain::services::assign_comment_attribution;
use crate::error::{ContentError, ContentResult};

/// Create comment use case
pub struct CreateCommentUseCase<R>
where
    R: PostRepository + CommentRepository,
{
    repo: Arc<R>,
}

impl<R> CreateCommentUseCase<R>
where
    R: PostRepository + CommentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        principal: Option<&Principal>,
        draft: CommentDraft,
    ) -> ContentResult<Comment> {
        ensure_allowed(principal, Action::CreateComment, None)?;
        // The policy only admits authenticated commentators
        let principal = principal.ok_or(ContentError::Unauthorized)?;

        // The parent post must exist before anything is written
        if self.repo.find_post_by_id(draft.post_id).await?.is_none() {
            return Err(ContentError::PostNotFound);
        }

        let new_comment = assign_comment_attribution(draft, principal, Utc::now());
        let comment = self.repo.create_comment(&new_comment).await?;

        tracing::info!(
            comment_id = %comment.comment_id,
            post_id = %comment.post_id,
            author_id = %comment.author.user_id,
            "Comment created"
        );

        Ok(comment)
    }
}
