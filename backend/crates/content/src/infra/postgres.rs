//! PostgreSQL Repository Implementations
//!
//! Read models join the author's username so responses can embed it
//! without a second query.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use kernel::id::{CommentId, Id, PostId, UserId};
use kernel::page::{Page, Paged};

use crate::domain::entities::{AuthorRef, Comment, NewComment, NewPost, Post};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::error::{ContentError, ContentResult};

/// PostgreSQL-backed content repository
#[derive(Clone)]
pub struct PgContentRepository {
    pool: PgPool,
}

impl PgContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const POST_SELECT: &str = r#"
    SELECT
        p.post_id,
        p.title,
        p.slug,
        p.content,
        p.published,
        p.author_id,
        u.username AS author_username,
        p.created_at,
        p.updated_at
    FROM posts p
    JOIN users u ON u.user_id = p.author_id
"#;

const COMMENT_SELECT: &str = r#"
    SELECT
        c.comment_id,
        c.content,
        c.published,
        c.author_id,
        u.username AS author_username,
        c.post_id,
        c.created_at,
        c.updated_at
    FROM comments c
    JOIN users u ON u.user_id = c.author_id
"#;

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgContentRepository {
    async fn create_post(&self, post: &NewPost) -> ContentResult<Post> {
        let now = Utc::now();

        let post_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO posts (
                title,
                slug,
                content,
                published,
                author_id,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING post_id
            "#,
        )
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.content)
        .bind(post.published)
        .bind(post.author_id.value())
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_post_write_error)?;

        self.find_post_by_id(Id::from_i64(post_id))
            .await?
            .ok_or_else(|| ContentError::Internal("Created post not readable".to_string()))
    }

    async fn find_post_by_id(&self, post_id: PostId) -> ContentResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!("{POST_SELECT} WHERE p.post_id = $1"))
            .bind(post_id.value())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn find_post_by_slug(&self, slug: &str) -> ContentResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!("{POST_SELECT} WHERE p.slug = $1"))
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn list_posts(&self, page: Page) -> ContentResult<Paged<Post>> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await?;

        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "{POST_SELECT} ORDER BY p.published DESC, p.post_id DESC LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(Paged::new(
            rows.into_iter().map(PostRow::into_post).collect(),
            total,
            page,
        ))
    }

    async fn list_posts_by_author(
        &self,
        author_id: UserId,
        page: Page,
    ) -> ContentResult<Paged<Post>> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts WHERE author_id = $1")
            .bind(author_id.value())
            .fetch_one(&self.pool)
            .await?;

        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "{POST_SELECT} WHERE p.author_id = $1 ORDER BY p.published DESC, p.post_id DESC LIMIT $2 OFFSET $3"
        ))
        .bind(author_id.value())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(Paged::new(
            rows.into_iter().map(PostRow::into_post).collect(),
            total,
            page,
        ))
    }

    async fn update_post(&self, post: &Post) -> ContentResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE posts SET
                title = $2,
                slug = $3,
                content = $4,
                published = $5,
                updated_at = $6
            WHERE post_id = $1
            "#,
        )
        .bind(post.post_id.value())
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.content)
        .bind(post.published)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_post_write_error)?;

        if result.rows_affected() == 0 {
            return Err(ContentError::PostNotFound);
        }

        Ok(())
    }

    async fn delete_post(&self, post_id: PostId) -> ContentResult<()> {
        // Comments reference posts with ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM posts WHERE post_id = $1")
            .bind(post_id.value())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ContentError::PostNotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Comment Repository Implementation
// ============================================================================

impl CommentRepository for PgContentRepository {
    async fn create_comment(&self, comment: &NewComment) -> ContentResult<Comment> {
        let now = Utc::now();

        let comment_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO comments (
                content,
                published,
                author_id,
                post_id,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING comment_id
            "#,
        )
        .bind(&comment.content)
        .bind(comment.published)
        .bind(comment.author_id.value())
        .bind(comment.post_id.value())
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                ContentError::PostNotFound
            } else {
                ContentError::Database(e)
            }
        })?;

        self.find_comment_by_id(Id::from_i64(comment_id))
            .await?
            .ok_or_else(|| ContentError::Internal("Created comment not readable".to_string()))
    }

    async fn find_comment_by_id(&self, comment_id: CommentId) -> ContentResult<Option<Comment>> {
        let row =
            sqlx::query_as::<_, CommentRow>(&format!("{COMMENT_SELECT} WHERE c.comment_id = $1"))
                .bind(comment_id.value())
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(CommentRow::into_comment))
    }

    async fn list_comments(&self, page: Page) -> ContentResult<Paged<Comment>> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments")
            .fetch_one(&self.pool)
            .await?;

        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "{COMMENT_SELECT} ORDER BY c.published DESC, c.comment_id DESC LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(Paged::new(
            rows.into_iter().map(CommentRow::into_comment).collect(),
            total,
            page,
        ))
    }

    async fn list_comments_by_post(
        &self,
        post_id: PostId,
        page: Page,
    ) -> ContentResult<Paged<Comment>> {
        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments WHERE post_id = $1")
                .bind(post_id.value())
                .fetch_one(&self.pool)
                .await?;

        // Conversation order under a post
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "{COMMENT_SELECT} WHERE c.post_id = $1 ORDER BY c.published ASC, c.comment_id ASC LIMIT $2 OFFSET $3"
        ))
        .bind(post_id.value())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(Paged::new(
            rows.into_iter().map(CommentRow::into_comment).collect(),
            total,
            page,
        ))
    }

    async fn update_comment(&self, comment: &Comment) -> ContentResult<()> {
        let result =
            sqlx::query("UPDATE comments SET content = $2, updated_at = $3 WHERE comment_id = $1")
                .bind(comment.comment_id.value())
                .bind(&comment.content)
                .bind(comment.updated_at)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(ContentError::CommentNotFound);
        }

        Ok(())
    }

    async fn delete_comment(&self, comment_id: CommentId) -> ContentResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(comment_id.value())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ContentError::CommentNotFound);
        }

        Ok(())
    }
}

fn map_post_write_error(err: sqlx::Error) -> ContentError {
    if is_unique_violation(&err) {
        ContentError::SlugTaken
    } else {
        ContentError::Database(err)
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23503"))
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: i64,
    title: String,
    slug: String,
    content: String,
    published: DateTime<Utc>,
    author_id: i64,
    author_username: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            post_id: Id::from_i64(self.post_id),
            title: self.title,
            slug: self.slug,
            content: self.content,
            published: self.published,
            author: AuthorRef {
                user_id: Id::from_i64(self.author_id),
                username: self.author_username,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    comment_id: i64,
    content: String,
    published: DateTime<Utc>,
    author_id: i64,
    author_username: String,
    post_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            comment_id: Id::from_i64(self.comment_id),
            content: self.content,
            published: self.published,
            author: AuthorRef {
                user_id: Id::from_i64(self.author_id),
                username: self.author_username,
            },
            post_id: Id::from_i64(self.post_id),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
