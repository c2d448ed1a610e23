//! Application Configuration

use platform::token::TokenSigner;
use std::time::Duration;

/// Accounts application configuration
#[derive(Debug, Clone)]
pub struct AccountsConfig {
    /// Secret key for HMAC token signing (32 bytes)
    pub token_secret: [u8; 32],
    /// Access token lifetime
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            token_ttl: Duration::from_secs(3600), // 1 hour
            password_pepper: None,
        }
    }
}

impl AccountsConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        Self {
            token_secret: platform::crypto::random_secret(),
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Token lifetime in milliseconds
    pub fn token_ttl_ms(&self) -> i64 {
        self.token_ttl.as_millis() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Token signer bound to this configuration's secret
    pub fn signer(&self) -> TokenSigner {
        TokenSigner::new(self.token_secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AccountsConfig::default();
        assert_eq!(config.token_ttl, Duration::from_secs(3600));
        assert_eq!(config.token_ttl_ms(), 3_600_000);
        assert!(config.pepper().is_none());
    }

    #[test]
    fn test_with_random_secret() {
        let a = AccountsConfig::with_random_secret();
        let b = AccountsConfig::with_random_secret();
        assert_ne!(a.token_secret, b.token_secret);
        assert!(a.token_secret.iter().any(|&x| x != 0));
    }
}
