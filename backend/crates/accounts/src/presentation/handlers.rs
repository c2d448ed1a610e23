//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use std::sync::Arc;

use kernel::id::{Id, UserId};
use kernel::page::{Page, PageQuery, Paged};
use kernel::principal::Principal;

use crate::application::config::AccountsConfig;
use crate::application::{
    DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, LoginUseCase, ResetPasswordUseCase,
    SignUpUseCase, UpdateUserUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::{AccountsError, AccountsResult};
use crate::presentation::dto::{
    CreateUserRequest, LoginRequest, ResetPasswordRequest, TokenResponse, UpdateUserRequest,
    UserResponse,
};

/// Shared state for accounts handlers
#[derive(Clone)]
pub struct AccountsAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AccountsConfig>,
}

// ============================================================================
// Auth
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AccountsAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AccountsResult<Json<TokenResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(req.into()).await?;

    Ok(Json(TokenResponse {
        token: output.token,
    }))
}

// ============================================================================
// Users
// ============================================================================

/// POST /api/users
pub async fn create_user<R>(
    State(state): State<AccountsAppState<R>>,
    Json(req): Json<CreateUserRequest>,
) -> AccountsResult<(StatusCode, Json<UserResponse>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let input = req.validate().map_err(AccountsError::Validation)?;

    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());
    let user = use_case.execute(input).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// GET /api/users
pub async fn list_users<R>(
    State(state): State<AccountsAppState<R>>,
    Query(query): Query<PageQuery>,
) -> AccountsResult<Json<Paged<UserResponse>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListUsersUseCase::new(state.repo.clone());
    let users = use_case.execute(Page::from(query)).await?;

    Ok(Json(users.map(UserResponse::from)))
}

/// GET /api/users/{id}
pub async fn get_user<R>(
    State(state): State<AccountsAppState<R>>,
    principal: Principal,
    Path(id): Path<i64>,
) -> AccountsResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetUserUseCase::new(state.repo.clone());
    let user = use_case
        .execute(Some(&principal), user_id(id))
        .await?;

    Ok(Json(UserResponse::from(user)))
}

/// PUT /api/users/{id}
pub async fn update_user<R>(
    State(state): State<AccountsAppState<R>>,
    principal: Principal,
    Path(id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> AccountsResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let input = req.validate().map_err(AccountsError::Validation)?;

    let use_case = UpdateUserUseCase::new(state.repo.clone());
    let user = use_case.execute(&principal, user_id(id), input).await?;

    Ok(Json(UserResponse::from(user)))
}

/// PUT /api/users/{id}/reset-password
pub async fn reset_password<R>(
    State(state): State<AccountsAppState<R>>,
    principal: Principal,
    Path(id): Path<i64>,
    Json(req): Json<ResetPasswordRequest>,
) -> AccountsResult<Json<TokenResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let input = req.validate().map_err(AccountsError::Validation)?;

    let use_case = ResetPasswordUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(&principal, user_id(id), input).await?;

    Ok(Json(TokenResponse {
        token: output.token,
    }))
}

/// DELETE /api/users/{id}
pub async fn delete_user<R>(
    State(state): State<AccountsAppState<R>>,
    principal: Principal,
    Path(id): Path<i64>,
) -> AccountsResult<StatusCode>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteUserUseCase::new(state.repo.clone());
    use_case.execute(&principal, user_id(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn user_id(raw: i64) -> UserId {
    Id::from_i64(raw)
}
