//! Bearer Access Tokens
//!
//! Opaque bearer tokens: `base64url(claims_json).base64url(signature)`
//! where the signature is HMAC-SHA256 over the claims segment. The
//! claims carry the user id, role codes, and expiry so verification
//! needs no storage round trip.

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

use crate::crypto::{constant_time_eq, from_base64url, to_base64url};

/// Claims carried inside an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject user id
    pub sub: i64,
    /// Role codes at issuance time
    pub roles: Vec<String>,
    /// Expiry, unix milliseconds
    pub exp_ms: i64,
}

/// Token verification errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Malformed token")]
    Malformed,

    #[error("Invalid token signature")]
    BadSignature,

    #[error("Token expired")]
    Expired,
}

/// Issues and verifies HMAC-signed bearer tokens.
#[derive(Clone)]
pub struct TokenSigner {
    secret: [u8; 32],
}

impl TokenSigner {
    pub fn new(secret: [u8; 32]) -> Self {
        Self { secret }
    }

    /// Serialize and sign `claims` into a bearer token string.
    pub fn issue(&self, claims: &TokenClaims) -> String {
        let payload = serde_json::to_vec(claims).expect("token claims serialize to JSON");
        let encoded = to_base64url(&payload);
        let signature = self.sign(encoded.as_bytes());
        format!("{}.{}", encoded, to_base64url(&signature))
    }

    /// Verify signature and expiry, returning the embedded claims.
    pub fn verify(&self, token: &str, now_ms: i64) -> Result<TokenClaims, TokenError> {
        let (encoded, sig_b64) = token.split_once('.').ok_or(TokenError::Malformed)?;

        let presented = from_base64url(sig_b64).map_err(|_| TokenError::Malformed)?;
        let expected = self.sign(encoded.as_bytes());
        if !constant_time_eq(&presented, &expected) {
            return Err(TokenError::BadSignature);
        }

        let payload = from_base64url(encoded).map_err(|_| TokenError::Malformed)?;
        let claims: TokenClaims =
            serde_json::from_slice(&payload).map_err(|_| TokenError::Malformed)?;

        if claims.exp_ms <= now_ms {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    fn sign(&self, data: &[u8]) -> [u8; 32] {
        let mut mac =
            Hmac::<Sha256>::new_from_slice(&self.secret).expect("HMAC can take key of any size");
        mac.update(data);
        mac.finalize().into_bytes().into()
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header value.
pub fn parse_bearer(header_value: &str) -> Option<&str> {
    let rest = header_value.strip_prefix("Bearer ")?;
    let token = rest.trim();
    if token.is_empty() { None } else { Some(token) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::random_secret;

    fn claims(exp_ms: i64) -> TokenClaims {
        TokenClaims {
            sub: 42,
            roles: vec!["writer".to_string()],
            exp_ms,
        }
    }

    #[test]
    fn test_issue_verify_roundtrip() {
        let signer = TokenSigner::new(random_secret());
        let issued = claims(10_000);
        let token = signer.issue(&issued);
        let verified = signer.verify(&token, 5_000).unwrap();
        assert_eq!(verified, issued);
    }

    #[test]
    fn test_expired_token() {
        let signer = TokenSigner::new(random_secret());
        let token = signer.issue(&claims(10_000));
        assert_eq!(signer.verify(&token, 10_000), Err(TokenError::Expired));
        assert_eq!(signer.verify(&token, 20_000), Err(TokenError::Expired));
    }

    #[test]
    fn test_tampered_payload() {
        let signer = TokenSigner::new(random_secret());
        let token = signer.issue(&claims(10_000));

        let (payload, sig) = token.split_once('.').unwrap();
        let other = signer.issue(&TokenClaims {
            sub: 43,
            roles: vec!["super_admin".to_string()],
            exp_ms: 10_000,
        });
        let (other_payload, _) = other.split_once('.').unwrap();
        assert_ne!(payload, other_payload);

        let forged = format!("{}.{}", other_payload, sig);
        assert_eq!(signer.verify(&forged, 5_000), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_wrong_key() {
        let signer = TokenSigner::new([1u8; 32]);
        let other = TokenSigner::new([2u8; 32]);
        let token = signer.issue(&claims(10_000));
        assert_eq!(other.verify(&token, 5_000), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_malformed_tokens() {
        let signer = TokenSigner::new(random_secret());
        assert_eq!(signer.verify("", 0), Err(TokenError::Malformed));
        assert_eq!(signer.verify("nodot", 0), Err(TokenError::Malformed));
        assert_eq!(
            signer.verify("seg.!!!not-base64!!!", 0),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn test_parse_bearer() {
        assert_eq!(parse_bearer("Bearer abc.def"), Some("abc.def"));
        assert_eq!(parse_bearer("Bearer   abc "), Some("abc"));
        assert_eq!(parse_bearer("Bearer "), None);
        assert_eq!(parse_bearer("Basic abc"), None);
        assert_eq!(parse_bearer("bearer abc"), None);
    }
}
