// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Signed token issuance.

use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use super::claims::{IdentityClaim, TokenClaims};
use crate::config::AuthConfig;

/// Signing algorithm for every token this service issues and accepts.
pub const TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

/// Issues HS256 JWTs for verified identities.
#[derive(Clone)]
pub struct TokenIssuer {
    key: EncodingKey,
    ttl_secs: i64,
}

impl TokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            key: EncodingKey::from_secret(config.secret.as_bytes()),
            ttl_secs: config.token_ttl_secs,
        }
    }

    /// Issue a token for `claim`, valid from now for the configured lifetime.
    pub fn issue(&self, claim: &IdentityClaim) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(claim, Utc::now())
    }

    /// Issue a token as if the current time were `now`.
    pub fn issue_at(
        &self,
        claim: &IdentityClaim,
        now: DateTime<Utc>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = TokenClaims::new(claim, now.timestamp(), self.ttl_secs);
        encode(&Header::new(TOKEN_ALGORITHM), &claims, &self.key)
    }
}
