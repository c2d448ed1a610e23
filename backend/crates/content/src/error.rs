//! Content Error Types
//!
//! Post/comment-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use kernel::validate::Violations;
use thiserror::Error;

/// Content-specific result type alias
pub type ContentResult<T> = Result<T, ContentError>;

/// Content-specific error variants
#[derive(Debug, Error)]
pub enum ContentError {
    /// Post not found
    #[error("Post not found")]
    PostNotFound,

    /// Comment not found
    #[error("Comment not found")]
    CommentNotFound,

    /// Post slug already in use
    #[error("This slug is already in use")]
    SlugTaken,

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Principal lacks the required role or ownership
    #[error("Operation not allowed")]
    Forbidden,

    /// Field-level validation failures
    #[error("Validation failed: {0}")]
    Validation(Violations),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ContentError {
    /// Convert into the unified application error.
    pub fn into_app_error(self) -> AppError {
        match self {
            ContentError::PostNotFound => AppError::not_found("Post not found"),
            ContentError::CommentNotFound => AppError::not_found("Comment not found"),
            ContentError::SlugTaken => AppError::conflict("This slug is already in use"),
            ContentError::Unauthorized => AppError::unauthorized("Authentication required"),
            ContentError::Forbidden => AppError::forbidden("Operation not allowed"),
            ContentError::Validation(violations) => AppError::validation(violations),
            ContentError::Database(e) => e.into(),
            ContentError::Internal(msg) => AppError::internal(msg),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ContentError::Database(e) => {
                tracing::error!(error = %e, "Content database error");
            }
            ContentError::Internal(msg) => {
                tracing::error!(message = %msg, "Content internal error");
            }
            ContentError::Forbidden => {
                tracing::warn!("Rejected content operation");
            }
            _ => {
                tracing::debug!(error = %self, "Content error");
            }
        }
    }
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<AppError> for ContentError {
    fn from(err: AppError) -> Self {
        ContentError::Internal(err.to_string())
    }
}
