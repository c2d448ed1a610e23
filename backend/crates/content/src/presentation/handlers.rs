//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use std::sync::Arc;

use kernel::id::Id;
use kernel::page::{Page, PageQuery, Paged};
use kernel::principal::{OptionalPrincipal, Principal};

use crate::application::config::ContentConfig;
use crate::application::{
    CreateCommentUseCase, CreatePostUseCase, DeleteCommentUseCase, DeletePostUseCase,
    GetCommentUseCase, GetPostUseCase, ListCommentsUseCase, ListPostsUseCase,
    UpdateCommentUseCase, UpdatePostUseCase,
};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::error::{ContentError, ContentResult};
use crate::presentation::dto::{
    CommentResponse, CreateCommentRequest, CreatePostRequest, PostDetailResponse, PostResponse,
    UpdateCommentRequest, UpdatePostRequest,
};

/// Shared state for content handlers
#[derive(Clone)]
pub struct ContentAppState<R>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<ContentConfig>,
}

// ============================================================================
// Posts
// ============================================================================

/// GET /api/posts
pub async fn list_posts<R>(
    State(state): State<ContentAppState<R>>,
    Query(query): Query<PageQuery>,
) -> ContentResult<Json<Paged<PostResponse>>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListPostsUseCase::new(state.repo.clone());
    let posts = use_case.execute(Page::from(query)).await?;

    Ok(Json(posts.map(PostResponse::from)))
}

/// POST /api/posts
pub async fn create_post<R>(
    State(state): State<ContentAppState<R>>,
    OptionalPrincipal(principal): OptionalPrincipal,
    Json(req): Json<CreatePostRequest>,
) -> ContentResult<(StatusCode, Json<PostResponse>)>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let draft = req
        .validate(&state.config)
        .map_err(ContentError::Validation)?;

    let use_case = CreatePostUseCase::new(state.repo.clone());
    let post = use_case.execute(principal.as_ref(), draft).await?;

    Ok((StatusCode::CREATED, Json(PostResponse::from(post))))
}

/// GET /api/posts/{id}
pub async fn get_post<R>(
    State(state): State<ContentAppState<R>>,
    principal: Principal,
    Path(id): Path<i64>,
) -> ContentResult<Json<PostDetailResponse>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetPostUseCase::new(state.repo.clone());
    let detail = use_case.by_id(Some(&principal), Id::from_i64(id)).await?;

    Ok(Json(PostDetailResponse::from(detail)))
}

/// GET /api/posts/slug/{slug}
pub async fn get_post_by_slug<R>(
    State(state): State<ContentAppState<R>>,
    Path(slug): Path<String>,
) -> ContentResult<Json<PostDetailResponse>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetPostUseCase::new(state.repo.clone());
    let detail = use_case.by_slug(&slug).await?;

    Ok(Json(PostDetailResponse::from(detail)))
}

/// PUT /api/posts/{id}
pub async fn update_post<R>(
    State(state): State<ContentAppState<R>>,
    OptionalPrincipal(principal): OptionalPrincipal,
    Path(id): Path<i64>,
    Json(req): Json<UpdatePostRequest>,
) -> ContentResult<Json<PostResponse>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let patch = req
        .validate(&state.config)
        .map_err(ContentError::Validation)?;

    let use_case = UpdatePostUseCase::new(state.repo.clone());
    let post = use_case
        .execute(principal.as_ref(), Id::from_i64(id), patch)
        .await?;

    Ok(Json(PostResponse::from(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post<R>(
    State(state): State<ContentAppState<R>>,
    OptionalPrincipal(principal): OptionalPrincipal,
    Path(id): Path<i64>,
) -> ContentResult<StatusCode>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeletePostUseCase::new(state.repo.clone());
    use_case.execute(principal.as_ref(), Id::from_i64(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/posts/{id}/comments
pub async fn list_post_comments<R>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> ContentResult<Json<Paged<CommentResponse>>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListCommentsUseCase::new(state.repo.clone());
    let comments = use_case
        .by_post(Id::from_i64(id), Page::from(query))
        .await?;

    Ok(Json(comments.map(CommentResponse::from)))
}

/// GET /api/users/{id}/posts
pub async fn list_user_posts<R>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> ContentResult<Json<Paged<PostResponse>>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListPostsUseCase::new(state.repo.clone());
    let posts = use_case
        .by_author(Id::from_i64(id), Page::from(query))
        .await?;

    Ok(Json(posts.map(PostResponse::from)))
}

// ============================================================================
// Comments
// ============================================================================

/// GET /api/comments
pub async fn list_comments<R>(
    State(state): State<ContentAppState<R>>,
    Query(query): Query<PageQuery>,
) -> ContentResult<Json<Paged<CommentResponse>>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListCommentsUseCase::new(state.repo.clone());
    let comments = use_case.execute(Page::from(query)).await?;

    Ok(Json(comments.map(CommentResponse::from)))
}

/// POST /api/comments
pub async fn create_comment<R>(
    State(state): State<ContentAppState<R>>,
    OptionalPrincipal(principal): OptionalPrincipal,
    Json(req): Json<CreateCommentRequest>,
) -> ContentResult<(StatusCode, Json<CommentResponse>)>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let draft = req
        .validate(&state.config)
        .map_err(ContentError::Validation)?;

    let use_case = CreateCommentUseCase::new(state.repo.clone());
    let comment = use_case.execute(principal.as_ref(), draft).await?;

    Ok((StatusCode::CREATED, Json(CommentResponse::from(comment))))
}

/// GET /api/comments/{id}
pub async fn get_comment<R>(
    State(state): State<ContentAppState<R>>,
    principal: Principal,
    Path(id): Path<i64>,
) -> ContentResult<Json<CommentResponse>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetCommentUseCase::new(state.repo.clone());
    let comment = use_case.execute(Some(&principal), Id::from_i64(id)).await?;

    Ok(Json(CommentResponse::from(comment)))
}

/// PUT /api/comments/{id}
pub async fn update_comment<R>(
    State(state): State<ContentAppState<R>>,
    OptionalPrincipal(principal): OptionalPrincipal,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCommentRequest>,
) -> ContentResult<Json<CommentResponse>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let content = req
        .validate(&state.config)
        .map_err(ContentError::Validation)?;

    let use_case = UpdateCommentUseCase::new(state.repo.clone());
    let comment = use_case
        .execute(principal.as_ref(), Id::from_i64(id), content)
        .await?;

    Ok(Json(CommentResponse::from(comment)))
}

/// DELETE /api/comments/{id}
pub async fn delete_comment<R>(
    State(state): State<ContentAppState<R>>,
    OptionalPrincipal(principal): OptionalPrincipal,
    Path(id): Path<i64>,
) -> ContentResult<StatusCode>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteCommentUseCase::new(state.repo.clone());
    use_case
        .execute(principal.as_ref(), Id::from_i64(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
