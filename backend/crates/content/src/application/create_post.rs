//! Create Post Use Case
//!
//! Writers only. The author is stamped from the principal between
//! validation and persistence; nothing in the request body can change
//! it.

use std::sync::Arc;

use chrono::Utc;
use kernel::policy::Action;
use kernel::principal::Principal;

use crate::application::ensure_allowed;
use crate::domain::entities::{Post, PostDraft};
use crate::domain::repository::PostRepository;
use crate::domain::services::assign_post_author;
use crate::error::{ContentError, ContentResult};

/// Create post use case
pub struct CreatePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> CreatePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        principal: Option<&Principal>,
        draft: PostDraft,
    ) -> ContentResult<Post> {
        ensure_allowed(principal, Action::CreatePost, None)?;
        // The policy only admits authenticated writers
        let principal = principal.ok_or(ContentError::Unauthorized)?;

        let new_post = assign_post_author(draft, principal, Utc::now());
        let post = self.repo.create_post(&new_post).await?;

        tracing::info!(
            post_id = %post.post_id,
            author_id = %post.author.user_id,
            slug = %post.slug,
            "Post created"
        );

        Ok(post)
    }
}
