//! User Query Use Cases

use std::sync::Arc;

use kernel::id::UserId;
use kernel::page::{Page, Paged};
use kernel::policy::Action;
use kernel::principal::Principal;

use crate::application::ensure_allowed;
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::error::{AccountsError, AccountsResult};

/// Fetch a single user (authenticated callers only)
pub struct GetUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> GetUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        principal: Option<&Principal>,
        user_id: UserId,
    ) -> AccountsResult<User> {
        ensure_allowed(principal, Action::GetUser, None)?;

        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(AccountsError::UserNotFound)
    }
}

/// List users (public)
pub struct ListUsersUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> ListUsersUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, page: Page) -> AccountsResult<Paged<User>> {
        self.repo.list(page).await
    }
}
