//! Update Post Use Case
//!
//! Editors, or the owning writer.

use std::sync::Arc;

use kernel::id::PostId;
use kernel::policy::Action;
use kernel::principal::Principal;

use crate::application::ensure_allowed;
use crate::domain::entities::{Post, PostPatch};
use crate::domain::repository::PostRepository;
use crate::error::{ContentError, ContentResult};

/// Update post use case
pub struct UpdatePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> UpdatePostUseCase<R>
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
        patch: PostPatch,
    ) -> ContentResult<Post> {
        let mut post = self
            .repo
            .find_post_by_id(post_id)
            .await?
            .ok_or(ContentError::PostNotFound)?;

        ensure_allowed(principal, Action::UpdatePost, Some(post.author.user_id))?;

        post.apply(patch);
        self.repo.update_post(&post).await?;

        tracing::info!(post_id = %post.post_id, "Post updated");

        Ok(post)
    }
}
