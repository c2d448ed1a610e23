//! API DTOs (Data Transfer Objects)
//!
//! One request/response shape per operation. Write requests carry an
//! explicit `validate` step that aggregates every failing field into a
//! violation list before the use case runs.

use serde::{Deserialize, Serialize};

use kernel::id::UserId;
use kernel::validate::{Violations, check_not_blank};
use platform::password::ClearTextPassword;

use crate::application::{LoginInput, ResetPasswordInput, SignUpInput, UpdateUserInput};
use crate::domain::entity::User;
use crate::domain::value_object::Username;

// ============================================================================
// Sign Up
// ============================================================================

/// Create user request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub retyped_password: String,
    /// Display name
    pub name: String,
}

impl CreateUserRequest {
    /// Field-validate and convert into typed use-case input.
    pub fn validate(&self) -> Result<SignUpInput, Violations> {
        let mut violations = Violations::new();

        let username = Username::new(&self.username)
            .map_err(|e| violations.add("username", e.to_string()))
            .ok();

        check_not_blank(&mut violations, "name", &self.name);

        if self.password != self.retyped_password {
            violations.add("retypedPassword", "The two passwords do not match");
        }

        let password = ClearTextPassword::new(self.password.clone())
            .map_err(|e| violations.add("password", e.to_string()))
            .ok();

        match (username, password) {
            (Some(username), Some(password)) if violations.is_empty() => Ok(SignUpInput {
                username,
                display_name: self.name.trim().to_string(),
                password,
            }),
            _ => Err(violations),
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl From<LoginRequest> for LoginInput {
    fn from(req: LoginRequest) -> Self {
        LoginInput {
            username: req.username,
            password: req.password,
        }
    }
}

// ============================================================================
// Profile Update
// ============================================================================

/// Update user request (display name only; passwords go through the
/// dedicated reset path)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: String,
}

impl UpdateUserRequest {
    pub fn validate(&self) -> Result<UpdateUserInput, Violations> {
        let mut violations = Violations::new();
        check_not_blank(&mut violations, "name", &self.name);
        violations.into_result()?;

        Ok(UpdateUserInput {
            display_name: self.name.trim().to_string(),
        })
    }
}

// ============================================================================
// Password Reset
// ============================================================================

/// Reset password request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub old_password: String,
    pub new_password: String,
    pub new_retyped_password: String,
}

impl ResetPasswordRequest {
    pub fn validate(&self) -> Result<ResetPasswordInput, Violations> {
        let mut violations = Violations::new();

        check_not_blank(&mut violations, "oldPassword", &self.old_password);

        if self.new_password != self.new_retyped_password {
            violations.add("newRetypedPassword", "The two passwords do not match");
        }

        let new_password = ClearTextPassword::new(self.new_password.clone())
            .map_err(|e| violations.add("newPassword", e.to_string()))
            .ok();

        match new_password {
            Some(new_password) if violations.is_empty() => Ok(ResetPasswordInput {
                old_password: self.old_password.clone(),
                new_password,
            }),
            _ => Err(violations),
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// User as exposed by the API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.user_id,
            username: user.username.original().to_string(),
            name: user.display_name,
        }
    }
}

/// Bearer token response (login, password reset)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request() -> CreateUserRequest {
        CreateUserRequest {
            username: "alice1".into(),
            password: "GoodPassword1!".into(),
            retyped_password: "GoodPassword1!".into(),
            name: "Alice".into(),
        }
    }

    #[test]
    fn test_create_user_valid() {
        let input = create_request().validate().unwrap();
        assert_eq!(input.username.original(), "alice1");
        assert_eq!(input.display_name, "Alice");
    }

    #[test]
    fn test_create_user_aggregates_all_violations() {
        let req = CreateUserRequest {
            username: "ab".into(),
            password: "short".into(),
            retyped_password: "different".into(),
            name: "  ".into(),
        };
        let violations = req.validate().unwrap_err();
        let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
        assert!(fields.contains(&"username"));
        assert!(fields.contains(&"password"));
        assert!(fields.contains(&"retypedPassword"));
        assert!(fields.contains(&"name"));
    }

    #[test]
    fn test_create_user_password_mismatch_only() {
        let mut req = create_request();
        req.retyped_password = "Other1234!".into();
        let violations = req.validate().unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations.iter().next().unwrap().field, "retypedPassword");
    }

    #[test]
    fn test_create_user_request_ignores_unknown_fields() {
        // A client-supplied role list has no field to land in
        let json = r#"{
            "username": "mallory1",
            "password": "GoodPassword1!",
            "retypedPassword": "GoodPassword1!",
            "name": "Mallory",
            "roles": ["super_admin"]
        }"#;
        let req: CreateUserRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_update_user_blank_name() {
        let req = UpdateUserRequest { name: " ".into() };
        let violations = req.validate().unwrap_err();
        assert_eq!(violations.iter().next().unwrap().field, "name");
    }

    #[test]
    fn test_reset_password_mismatch() {
        let req = ResetPasswordRequest {
            old_password: "OldPassword1!".into(),
            new_password: "NewPassword1!".into(),
            new_retyped_password: "Different1!".into(),
        };
        let violations = req.validate().unwrap_err();
        assert!(
            violations
                .iter()
                .any(|v| v.field == "newRetypedPassword" && v.message.contains("do not match"))
        );
    }

    #[test]
    fn test_reset_password_valid() {
        let req = ResetPasswordRequest {
            old_password: "OldPassword1!".into(),
            new_password: "NewPassword1!".into(),
            new_retyped_password: "NewPassword1!".into(),
        };
        let input = req.validate().unwrap();
        assert_eq!(input.old_password, "OldPassword1!");
    }

    #[test]
    fn test_request_field_names_are_camel_case() {
        let json = r#"{
            "oldPassword": "OldPassword1!",
            "newPassword": "NewPassword1!",
            "newRetypedPassword": "NewPassword1!"
        }"#;
        let req: ResetPasswordRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_ok());
    }
}
