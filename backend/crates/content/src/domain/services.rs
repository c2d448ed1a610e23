//! Write-Enrichment Services
//!
//! Pure functions applied between validation and persistence. They are
//! the only constructors of `NewPost`/`NewComment`, so every persisted
//! post and comment carries the authenticated principal as author no
//! matter what the request body contained.

use chrono::{DateTime, Utc};
use kernel::principal::Principal;

use crate::domain::entities::{CommentDraft, NewComment, NewPost, PostDraft};

/// Stamp the authenticated principal as post author.
///
/// A missing publish timestamp defaults to `now`.
pub fn assign_post_author(draft: PostDraft, principal: &Principal, now: DateTime<Utc>) -> NewPost {
    NewPost {
        title: draft.title,
        slug: draft.slug,
        content: draft.content,
        published: draft.published.unwrap_or(now),
        author_id: principal.user_id,
    }
}

/// Stamp the authenticated principal as comment author and set the
/// publish timestamp to the server clock.
pub fn assign_comment_attribution(
    draft: CommentDraft,
    principal: &Principal,
    now: DateTime<Utc>,
) -> NewComment {
    NewComment {
        content: draft.content,
        post_id: draft.post_id,
        author_id: principal.user_id,
        published: now,
    }
}
