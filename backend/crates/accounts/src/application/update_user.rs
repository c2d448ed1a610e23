//! Update User Use Case
//!
//! Profile updates are self-service only.

use std::sync::Arc;

use kernel::id::UserId;
use kernel::policy::Action;
use kernel::principal::Principal;

use crate::application::ensure_allowed;
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::error::{AccountsError, AccountsResult};

/// Update user input (already field-validated by the request DTO)
#[derive(Debug)]
pub struct UpdateUserInput {
    pub display_name: String,
}

/// Update user use case
pub struct UpdateUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        principal: &Principal,
        target: UserId,
        input: UpdateUserInput,
    ) -> AccountsResult<User> {
        ensure_allowed(Some(principal), Action::UpdateUser, Some(target))?;

        let mut user = self
            .repo
            .find_by_id(target)
            .await?
            .ok_or(AccountsError::UserNotFound)?;

        user.set_display_name(input.display_name);
        self.repo.update(&user).await?;

        tracing::info!(user_id = %user.user_id, "User profile updated");

        Ok(user)
    }
}
