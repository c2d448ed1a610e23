//! Platform - infrastructure primitives shared by the domain crates
//!
//! No domain knowledge lives here; only cryptographic and encoding
//! building blocks:
//! - `password` - Argon2id hashing with zeroized clear text
//! - `crypto` - random bytes, SHA-256, HMAC, base64, constant-time compare
//! - `token` - HMAC-signed bearer access tokens

pub mod crypto;
pub mod password;
pub mod token;
