//! Sign Up Use Case
//!
//! Creates a new user account. The clear-text password is hashed here,
//! before the repository ever sees it.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AccountsConfig;
use crate::domain::entity::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::Username;
use crate::error::{AccountsError, AccountsResult};

/// Sign up input (already field-validated by the request DTO)
#[derive(Debug)]
pub struct SignUpInput {
    pub username: Username,
    pub display_name: String,
    pub password: ClearTextPassword,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AccountsConfig>,
}

impl<R> SignUpUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AccountsConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AccountsResult<User> {
        if self.repo.exists_by_username(&input.username).await? {
            return Err(AccountsError::UsernameTaken);
        }

        let password_hash = input
            .password
            .hash(self.config.pepper())
            .map_err(|e| AccountsError::Internal(e.to_string()))?;

        let user = self
            .repo
            .create(&NewUser::new(
                input.username,
                input.display_name,
                password_hash,
            ))
            .await?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User signed up"
        );

        Ok(user)
    }
}
