//! Delete User Use Case

use std::sync::Arc;

use kernel::id::UserId;
use kernel::policy::Action;
use kernel::principal::Principal;

use crate::application::ensure_allowed;
use crate::domain::repository::UserRepository;
use crate::error::AccountsResult;

/// Delete user use case (SuperAdmin only)
pub struct DeleteUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, principal: &Principal, target: UserId) -> AccountsResult<()> {
        ensure_allowed(Some(principal), Action::DeleteUser, Some(target))?;

        self.repo.delete(target).await?;

        tracing::info!(
            user_id = %target,
            deleted_by = %principal.user_id,
            "User deleted"
        );

        Ok(())
    }
}
