//! Principal - Roles and the authenticated caller
//!
//! The principal is the authenticated user attached to the in-flight
//! request. Roles are plain tags; authorization decisions over them live
//! in [`crate::policy`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::id::UserId;

/// Role tags a user can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Commentator,
    Writer,
    Editor,
    Admin,
    SuperAdmin,
}

impl Role {
    /// Stable string code used on the wire and in the database.
    #[inline]
    pub const fn code(&self) -> &'static str {
        use Role::*;
        match self {
            Commentator => "commentator",
            Writer => "writer",
            Editor => "editor",
            Admin => "admin",
            SuperAdmin => "super_admin",
        }
    }

    /// Parse a stored role code.
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use Role::*;
        match code {
            "commentator" => Some(Commentator),
            "writer" => Some(Writer),
            "editor" => Some(Editor),
            "admin" => Some(Admin),
            "super_admin" => Some(SuperAdmin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A user's role tags.
///
/// Never empty: constructing from an empty list falls back to the
/// default [`Role::Commentator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(Vec<Role>);

impl RoleSet {
    /// Build a role set, deduplicating and defaulting to Commentator
    /// when `roles` is empty.
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Self {
        let mut set = Vec::new();
        for role in roles {
            if !set.contains(&role) {
                set.push(role);
            }
        }
        if set.is_empty() {
            set.push(Role::Commentator);
        }
        Self(set)
    }

    /// Parse stored role codes; unknown codes are reported back.
    pub fn from_codes<'a>(codes: impl IntoIterator<Item = &'a str>) -> Result<Self, String> {
        let mut roles = Vec::new();
        for code in codes {
            match Role::from_code(code) {
                Some(role) => roles.push(role),
                None => return Err(code.to_string()),
            }
        }
        Ok(Self::new(roles))
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.0.iter().copied()
    }

    /// Wire/database representation.
    pub fn codes(&self) -> Vec<String> {
        self.0.iter().map(|r| r.code().to_string()).collect()
    }
}

impl Default for RoleSet {
    fn default() -> Self {
        Self(vec![Role::Commentator])
    }
}

/// The authenticated user attached to the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: UserId,
    pub roles: RoleSet,
}

impl Principal {
    pub fn new(user_id: UserId, roles: RoleSet) -> Self {
        Self { user_id, roles }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(role)
    }
}

/// Extractor wrapper for routes that work with or without a caller.
#[cfg(feature = "axum")]
#[derive(Debug, Clone)]
pub struct OptionalPrincipal(pub Option<Principal>);

#[cfg(feature = "axum")]
mod extract {
    use super::{OptionalPrincipal, Principal};
    use crate::error::app_error::AppError;
    use axum::extract::FromRequestParts;
    use axum::http::request::Parts;
    use std::convert::Infallible;

    impl<S> FromRequestParts<S> for Principal
    where
        S: Send + Sync,
    {
        type Rejection = AppError;

        async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
            parts
                .extensions
                .get::<Principal>()
                .cloned()
                .ok_or_else(|| AppError::unauthorized("Authentication required"))
        }
    }

    impl<S> FromRequestParts<S> for OptionalPrincipal
    where
        S: Send + Sync,
    {
        type Rejection = Infallible;

        async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
            Ok(OptionalPrincipal(
                parts.extensions.get::<Principal>().cloned(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::Id;

    #[test]
    fn test_role_code_roundtrip() {
        for role in [
            Role::Commentator,
            Role::Writer,
            Role::Editor,
            Role::Admin,
            Role::SuperAdmin,
        ] {
            assert_eq!(Role::from_code(role.code()), Some(role));
        }
        assert_eq!(Role::from_code("moderator"), None);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Commentator.to_string(), "commentator");
        assert_eq!(Role::SuperAdmin.to_string(), "super_admin");
    }

    #[test]
    fn test_empty_role_set_defaults_to_commentator() {
        let set = RoleSet::new([]);
        assert!(set.contains(Role::Commentator));
        assert_eq!(set.codes(), vec!["commentator"]);
    }

    #[test]
    fn test_role_set_dedup() {
        let set = RoleSet::new([Role::Writer, Role::Writer, Role::Editor]);
        assert_eq!(set.codes(), vec!["writer", "editor"]);
    }

    #[test]
    fn test_role_set_from_codes() {
        let set = RoleSet::from_codes(["writer", "editor"]).unwrap();
        assert!(set.contains(Role::Writer));
        assert!(set.contains(Role::Editor));
        assert!(!set.contains(Role::Admin));

        assert_eq!(RoleSet::from_codes(["nope"]).unwrap_err(), "nope");
    }

    #[test]
    fn test_principal_has_role() {
        let p = Principal::new(Id::from_i64(1), RoleSet::new([Role::Writer]));
        assert!(p.has_role(Role::Writer));
        assert!(!p.has_role(Role::Editor));
    }
}
