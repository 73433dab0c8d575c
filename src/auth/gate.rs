// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Bearer token verification.
//!
//! ## Checks, in order
//!
//! 1. `Authorization` header present, else `MissingToken`
//! 2. Header is `Bearer <token>`, else `MalformedToken`
//! 3. Token decodes and its HS256 signature verifies, else `InvalidSignature`
//! 4. `now < exp`, else `Expired`
//!
//! Expiry is checked here against an explicit clock rather than inside
//! `jsonwebtoken`, so `exp` is exclusive and there is no leeway.

use axum::http::HeaderValue;
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, DecodingKey, Validation};

use super::claims::{IdentityClaim, TokenClaims};
use super::issuer::TOKEN_ALGORITHM;
use super::AuthError;
use crate::config::AuthConfig;

const BEARER_PREFIX: &str = "Bearer ";

/// Verifies bearer tokens issued by [`super::TokenIssuer`].
#[derive(Clone)]
pub struct TokenGate {
    key: DecodingKey,
    validation: Validation,
}

impl TokenGate {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(TOKEN_ALGORITHM);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        }
    }

    /// Authenticate a request from its raw `Authorization` header.
    pub fn authenticate(&self, header: Option<&HeaderValue>) -> Result<IdentityClaim, AuthError> {
        self.authenticate_at(header, Utc::now())
    }

    /// Authenticate as if the current time were `now`.
    pub fn authenticate_at(
        &self,
        header: Option<&HeaderValue>,
        now: DateTime<Utc>,
    ) -> Result<IdentityClaim, AuthError> {
        let header = header.ok_or(AuthError::MissingToken)?;
        let token = bearer_token(header)?;
        let claims = self.verify_signature(token)?;

        if claims.is_expired_at(now.timestamp()) {
            return Err(AuthError::Expired);
        }
        Ok(claims.identity())
    }

    fn verify_signature(&self, token: &str) -> Result<TokenClaims, AuthError> {
        decode::<TokenClaims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "token failed verification");
                AuthError::InvalidSignature
            })
    }
}

/// Extract the token from a `Bearer <token>` header value.
fn bearer_token(header: &HeaderValue) -> Result<&str, AuthError> {
    let value = header.to_str().map_err(|_| AuthError::MalformedToken)?;
    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or(AuthError::MalformedToken)?
        .trim();
    if token.is_empty() {
        return Err(AuthError::MalformedToken);
    }
    Ok(token)
}
