//! Delete Post Use Case
//!
//! Editors, or the owning writer. Comments on the post are removed with
//! it (database-level cascade).

use std::sync::Arc;

use kernel::id::PostId;
use kernel::policy::Action;
use kernel::principal::Principal;

use crate::application::ensure_allowed;
use crate::domain::repository::PostRepository;
use crate::error::{ContentError, ContentResult};

/// Delete post use case
pub struct DeletePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> DeletePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        principal: Option<&Principal>,
        post_id: PostId,
    ) -> ContentResult<()> {
        let post = self
            .repo
            .find_post_by_id(post_id)
            .await?
            .ok_or(ContentError::PostNotFound)?;

        ensure_allowed(principal, Action::DeletePost, Some(post.author.user_id))?;

        self.repo.delete_post(post_id).await?;

        tracing::info!(post_id = %post_id, "Post deleted");

        Ok(())
    }
}
