//! Login Use Case
//!
//! Authenticates a user and issues a bearer token.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AccountsConfig;
use crate::application::issue_access_token;
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::Username;
use crate::error::{AccountsError, AccountsResult};

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    /// Bearer token for the Authorization header
    pub token: String,
    pub user: User,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AccountsConfig>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AccountsConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AccountsResult<LoginOutput> {
        // Any shape failure maps to the same opaque credential error
        let username =
            Username::new(&input.username).map_err(|_| AccountsError::InvalidCredentials)?;

        let user = self
            .repo
            .find_by_username(&username)
            .await?
            .ok_or(AccountsError::InvalidCredentials)?;

        let password = ClearTextPassword::new(input.password)
            .map_err(|_| AccountsError::InvalidCredentials)?;

        if !user.password_hash.verify(&password, self.config.pepper()) {
            return Err(AccountsError::InvalidCredentials);
        }

        let token = issue_access_token(&user, &self.config);

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User logged in"
        );

        Ok(LoginOutput { token, user })
    }
}
