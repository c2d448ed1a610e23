//! Reset Password Use Case
//!
//! A distinct write path, separate from the generic profile update:
//! re-authenticates with the old password, replaces the stored hash and
//! issues a fresh bearer token. Storage is untouched on any failure.

use std::sync::Arc;

use kernel::id::UserId;
use kernel::policy::Action;
use kernel::principal::Principal;
use platform::password::ClearTextPassword;

use crate::application::config::AccountsConfig;
use crate::application::{ensure_allowed, issue_access_token};
use crate::domain::repository::UserRepository;
use crate::error::{AccountsError, AccountsResult};

/// Reset password input (new password already validated by the DTO)
#[derive(Debug)]
pub struct ResetPasswordInput {
    pub old_password: String,
    pub new_password: ClearTextPassword,
}

/// Reset password output
pub struct ResetPasswordOutput {
    /// Fresh bearer token
    pub token: String,
}

/// Reset password use case
pub struct ResetPasswordUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AccountsConfig>,
}

impl<R> ResetPasswordUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AccountsConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(
        &self,
        principal: &Principal,
        target: UserId,
        input: ResetPasswordInput,
    ) -> AccountsResult<ResetPasswordOutput> {
        ensure_allowed(Some(principal), Action::ResetPassword, Some(target))?;

        let user = self
            .repo
            .find_by_id(target)
            .await?
            .ok_or(AccountsError::UserNotFound)?;

        // Re-authenticate with the old password; a password that cannot
        // even pass the policy cannot match the stored hash either.
        let old_password = ClearTextPassword::new(input.old_password)
            .map_err(|_| AccountsError::InvalidCredentials)?;

        if !user
            .password_hash
            .verify(&old_password, self.config.pepper())
        {
            return Err(AccountsError::InvalidCredentials);
        }

        let new_hash = input
            .new_password
            .hash(self.config.pepper())
            .map_err(|e| AccountsError::Internal(e.to_string()))?;

        self.repo.update_password(target, &new_hash).await?;

        let token = issue_access_token(&user, &self.config);

        tracing::info!(user_id = %user.user_id, "Password reset");

        Ok(ResetPasswordOutput { token })
    }
}
