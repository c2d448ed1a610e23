//! Content Router

use axum::{
    Router,
    routing::get,
};
use std::sync::Arc;

use crate::application::config::ContentConfig;
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::infra::postgres::PgContentRepository;
use crate::presentation::handlers::{self, ContentAppState};

/// Create the content router with the PostgreSQL repository
pub fn content_router(repo: PgContentRepository, config: ContentConfig) -> Router {
    content_router_generic(repo, config)
}

/// Create a generic content router for any repository implementation
pub fn content_router_generic<R>(repo: R, config: ContentConfig) -> Router
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let state = ContentAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/posts",
            get(handlers::list_posts::<R>).post(handlers::create_post::<R>),
        )
        .route("/posts/slug/{slug}", get(handlers::get_post_by_slug::<R>))
        .route(
            "/posts/{id}",
            get(handlers::get_post::<R>)
                .put(handlers::update_post::<R>)
                .delete(handlers::delete_post::<R>),
        )
        .route(
            "/posts/{id}/comments",
            get(handlers::list_post_comments::<R>),
        )
        .route(
            "/comments",
            get(handlers::list_comments::<R>).post(handlers::create_comment::<R>),
        )
        .route(
            "/comments/{id}",
            get(handlers::get_comment::<R>)
                .put(handlers::update_comment::<R>)
                .delete(handlers::delete_comment::<R>),
        )
        .route("/users/{id}/posts", get(handlers::list_user_posts::<R>))
        .with_state(state)
}
