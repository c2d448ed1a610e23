//! Post Query Use Cases

use std::sync::Arc;

use kernel::id::{PostId, UserId};
use kernel::page::{Page, Paged};
use kernel::policy::Action;
use kernel::principal::Principal;

use crate::application::ensure_allowed;
use crate::domain::entities::{Comment, Post};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::error::{ContentError, ContentResult};

/// A post together with its comments (item responses embed them).
pub struct PostDetail {
    pub post: Post,
    pub comments: Vec<Comment>,
}

/// Fetch a single post by id (authenticated) or slug (public).
pub struct GetPostUseCase<R>
where
    R: PostRepository + CommentRepository,
{
    repo: Arc<R>,
}

impl<R> GetPostUseCase<R>
where
    R: PostRepository + CommentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn by_id(
        &self,
        principal: Option<&Principal>,
        post_id: PostId,
    ) -> ContentResult<PostDetail> {
        ensure_allowed(principal, Action::GetPost, None)?;

        let post = self
            .repo
            .find_post_by_id(post_id)
            .await?
            .ok_or(ContentError::PostNotFound)?;

        self.with_comments(post).await
    }

    pub async fn by_slug(&self, slug: &str) -> ContentResult<PostDetail> {
        let post = self
            .repo
            .find_post_by_slug(slug)
            .await?
            .ok_or(ContentError::PostNotFound)?;

        self.with_comments(post).await
    }

    async fn with_comments(&self, post: Post) -> ContentResult<PostDetail> {
        let comments = self
            .repo
            .list_comments_by_post(post.post_id, Page::default())
            .await?;

        Ok(PostDetail {
            post,
            comments: comments.items,
        })
    }
}

/// List posts (public), optionally restricted to one author.
pub struct ListPostsUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> ListPostsUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, page: Page) -> ContentResult<Paged<Post>> {
        self.repo.list_posts(page).await
    }

    pub async fn by_author(&self, author_id: UserId, page: Page) -> ContentResult<Paged<Post>> {
        self.repo.list_posts_by_author(author_id, page).await
    }
}
