//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;
use kernel::page::{Page, Paged};
use platform::password::HashedPassword;

use crate::domain::entity::{NewUser, User};
use crate::domain::value_object::Username;
use crate::error::AccountsResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user; the database assigns the id.
    async fn create(&self, user: &NewUser) -> AccountsResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: UserId) -> AccountsResult<Option<User>>;

    /// Find user by canonical username
    async fn find_by_username(&self, username: &Username) -> AccountsResult<Option<User>>;

    /// Check if the canonical username is taken
    async fn exists_by_username(&self, username: &Username) -> AccountsResult<bool>;

    /// One page of users, newest first, plus the total count
    async fn list(&self, page: Page) -> AccountsResult<Paged<User>>;

    /// Update mutable profile fields
    async fn update(&self, user: &User) -> AccountsResult<()>;

    /// Replace the stored password hash
    async fn update_password(&self, user_id: UserId, hash: &HashedPassword) -> AccountsResult<()>;

    /// Delete a user; fails while posts/comments still reference it
    async fn delete(&self, user_id: UserId) -> AccountsResult<()>;
}
