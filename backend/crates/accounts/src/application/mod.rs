//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod delete_user;
pub mod login;
pub mod query_users;
pub mod reset_password;
pub mod sign_up;
pub mod update_user;

// Re-exports
pub use config::AccountsConfig;
pub use delete_user::DeleteUserUseCase;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use query_users::{GetUserUseCase, ListUsersUseCase};
pub use reset_password::{ResetPasswordInput, ResetPasswordOutput, ResetPasswordUseCase};
pub use sign_up::{SignUpInput, SignUpUseCase};
pub use update_user::{UpdateUserInput, UpdateUserUseCase};

use chrono::Utc;
use kernel::id::UserId;
use kernel::policy::{Action, allowed};
use kernel::principal::Principal;
use platform::token::TokenClaims;

use crate::domain::entity::User;
use crate::error::{AccountsError, AccountsResult};

/// Evaluate the central policy, distinguishing missing authentication
/// from insufficient rights.
pub(crate) fn ensure_allowed(
    principal: Option<&Principal>,
    action: Action,
    owner: Option<UserId>,
) -> AccountsResult<()> {
    if allowed(principal, action, owner) {
        Ok(())
    } else if principal.is_none() {
        Err(AccountsError::Unauthorized)
    } else {
        Err(AccountsError::Forbidden)
    }
}

/// Issue a bearer token for `user` carrying its current role codes.
pub(crate) fn issue_access_token(user: &User, config: &AccountsConfig) -> String {
    let claims = TokenClaims {
        sub: user.user_id.value(),
        roles: user.roles.codes(),
        exp_ms: Utc::now().timestamp_millis() + config.token_ttl_ms(),
    };
    config.signer().issue(&claims)
}
