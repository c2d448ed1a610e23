//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use kernel::principal::{Principal, RoleSet};
use platform::password::HashedPassword;

use crate::domain::value_object::Username;

/// A persisted user.
///
/// The password field always holds an Argon2id hash; clear text is
/// hashed before any repository call.
#[derive(Debug, Clone)]
pub struct User {
    /// Database-assigned identifier
    pub user_id: UserId,
    /// Unique username (login + display)
    pub username: Username,
    /// Display name shown alongside posts and comments
    pub display_name: String,
    /// Hashed password (PHC string)
    pub password_hash: HashedPassword,
    /// Role tags; never empty
    pub roles: RoleSet,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Update the display name.
    pub fn set_display_name(&mut self, display_name: String) {
        self.display_name = display_name;
        self.updated_at = Utc::now();
    }

    /// The principal this user acts as.
    pub fn principal(&self) -> Principal {
        Principal::new(self.user_id, self.roles.clone())
    }
}

/// A user about to be created; the id is assigned by the database.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub display_name: String,
    pub password_hash: HashedPassword,
    pub roles: RoleSet,
}

impl NewUser {
    /// New user with the default role set (Commentator).
    pub fn new(username: Username, display_name: String, password_hash: HashedPassword) -> Self {
        Self {
            username,
            display_name,
            password_hash,
            roles: RoleSet::default(),
        }
    }

    /// Override the role set (fixtures and operator tooling).
    pub fn with_roles(mut self, roles: RoleSet) -> Self {
        self.roles = roles;
        self
    }
}
