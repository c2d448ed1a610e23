//! Principal Middleware
//!
//! Verifies a presented `Authorization: Bearer` token and attaches the
//! resulting [`Principal`] to request extensions. Requests without an
//! Authorization header pass through unauthenticated; a header that is
//! present but invalid is rejected outright.

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use chrono::Utc;

use kernel::id::Id;
use kernel::principal::{Principal, RoleSet};
use platform::token::{TokenSigner, parse_bearer};

use crate::application::config::AccountsConfig;
use crate::error::AccountsError;

/// Middleware state
#[derive(Clone)]
pub struct PrincipalLayerState {
    signer: TokenSigner,
}

impl PrincipalLayerState {
    pub fn new(config: &AccountsConfig) -> Self {
        Self {
            signer: config.signer(),
        }
    }
}

/// Middleware attaching the authenticated principal, if any.
pub async fn attach_principal(
    State(state): State<PrincipalLayerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    if let Some(value) = header_value {
        let Some(token) = parse_bearer(&value) else {
            return Err(AccountsError::InvalidToken.into_response());
        };

        let claims = match state.signer.verify(token, Utc::now().timestamp_millis()) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!(error = %e, "Bearer token rejected");
                return Err(AccountsError::InvalidToken.into_response());
            }
        };

        let roles = match RoleSet::from_codes(claims.roles.iter().map(String::as_str)) {
            Ok(roles) => roles,
            Err(_) => return Err(AccountsError::InvalidToken.into_response()),
        };

        req.extensions_mut()
            .insert(Principal::new(Id::from_i64(claims.sub), roles));
    }

    Ok(next.run(req).await)
}
