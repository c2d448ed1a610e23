//! Domain Value Objects

pub mod username;

pub use username::{USERNAME_MAX_LENGTH, USERNAME_MIN_LENGTH, Username, UsernameError};
