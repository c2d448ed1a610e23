//! Accounts Error Types
//!
//! Account-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use kernel::validate::Violations;
use thiserror::Error;

/// Accounts-specific result type alias
pub type AccountsResult<T> = Result<T, AccountsError>;

/// Accounts-specific error variants
#[derive(Debug, Error)]
pub enum AccountsError {
    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// Username already exists
    #[error("This username already exists")]
    UsernameTaken,

    /// Invalid credentials (unknown user or wrong password)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Bearer token missing, malformed, or expired
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Principal lacks the required role or ownership
    #[error("Operation not allowed")]
    Forbidden,

    /// Field-level validation failures
    #[error("Validation failed: {0}")]
    Validation(Violations),

    /// User still referenced by posts or comments
    #[error("User has authored content and cannot be deleted")]
    HasAuthoredContent,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountsError {
    /// Convert into the unified application error.
    pub fn into_app_error(self) -> AppError {
        match self {
            AccountsError::UserNotFound => AppError::not_found("User not found"),
            AccountsError::UsernameTaken => AppError::conflict("This username already exists"),
            AccountsError::InvalidCredentials => AppError::unauthorized("Invalid credentials"),
            AccountsError::InvalidToken => AppError::unauthorized("Invalid or expired token"),
            AccountsError::Unauthorized => AppError::unauthorized("Authentication required"),
            AccountsError::Forbidden => AppError::forbidden("Operation not allowed"),
            AccountsError::Validation(violations) => AppError::validation(violations),
            AccountsError::HasAuthoredContent => {
                AppError::conflict("User has authored content and cannot be deleted")
            }
            AccountsError::Database(e) => e.into(),
            AccountsError::Internal(msg) => AppError::internal(msg),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccountsError::Database(e) => {
                tracing::error!(error = %e, "Accounts database error");
            }
            AccountsError::Internal(msg) => {
                tracing::error!(message = %msg, "Accounts internal error");
            }
            AccountsError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AccountsError::InvalidToken => {
                tracing::warn!("Rejected bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Accounts error");
            }
        }
    }
}

impl IntoResponse for AccountsError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<AppError> for AccountsError {
    fn from(err: AppError) -> Self {
        AccountsError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_error_status_codes() {
        let cases: Vec<(AccountsError, StatusCode)> = vec![
            (AccountsError::UserNotFound, StatusCode::NOT_FOUND),
            (AccountsError::UsernameTaken, StatusCode::CONFLICT),
            (AccountsError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AccountsError::InvalidToken, StatusCode::UNAUTHORIZED),
            (AccountsError::Unauthorized, StatusCode::UNAUTHORIZED),
            (AccountsError::Forbidden, StatusCode::FORBIDDEN),
            (
                AccountsError::Validation(Violations::new()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (AccountsError::HasAuthoredContent, StatusCode::CONFLICT),
            (
                AccountsError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_validation_keeps_violations() {
        let mut v = Violations::new();
        v.add("username", "must be at least 6 characters");
        let app = AccountsError::Validation(v).into_app_error();
        assert_eq!(app.violations().len(), 1);
    }
}
