//! Application Layer
//!
//! Use cases. Every mutating use case evaluates the central policy
//! before touching the repository, then runs the write-enrichment step
//! (for creates) and persists.

pub mod config;
pub mod create_comment;
pub mod create_post;
pub mod delete_comment;
pub mod delete_post;
pub mod query_comments;
pub mod query_posts;
pub mod update_comment;
pub mod update_post;

// Re-exports
pub use config::ContentConfig;
pub use create_comment::CreateCommentUseCase;
pub use create_post::CreatePostUseCase;
pub use delete_comment::DeleteCommentUseCase;
pub use delete_post::DeletePostUseCase;
pub use query_comments::{GetCommentUseCase, ListCommentsUseCase};
pub use query_posts::{GetPostUseCase, ListPostsUseCase};
pub use update_comment::UpdateCommentUseCase;
pub use update_post::UpdatePostUseCase;

use kernel::id::UserId;
use kernel::policy::{Action, allowed};
use kernel::principal::Principal;

use crate::error::{ContentError, ContentResult};

/// Evaluate the central policy, distinguishing missing authentication
/// from insufficient rights.
pub(crate) fn ensure_allowed(
    principal: Option<&Principal>,
    action: Action,
    owner: Option<UserId>,
) -> ContentResult<()> {
    if allowed(principal, action, owner) {
        Ok(())
    } else if principal.is_none() {
        Err(ContentError::Unauthorized)
    } else {
        Err(ContentError::Forbidden)
    }
}
