// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Identity claim and JWT payload.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Authenticated identity.
///
/// This is the only fact a token carries about its holder, and the value the
/// token gate attaches to admitted requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IdentityClaim {
    /// Username the credentials were verified for
    pub username: String,
}

impl IdentityClaim {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// JWT payload: the identity claim plus its validity window.
///
/// Timestamps are seconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub username: String,
    /// Issued at
    pub iat: i64,
    /// Expiration
    pub exp: i64,
}

impl TokenClaims {
    pub fn new(claim: &IdentityClaim, issued_at: i64, ttl_secs: i64) -> Self {
        Self {
            username: claim.username.clone(),
            iat: issued_at,
            exp: issued_at.saturating_add(ttl_secs),
        }
    }

    /// Whether the token is past its lifetime at `now`. `exp` itself is expired.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }

    pub fn identity(&self) -> IdentityClaim {
        IdentityClaim::new(self.username.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_window_from_ttl() {
        let claims = TokenClaims::new(&IdentityClaim::new("react"), 1_700_000_000, 3600);
        assert_eq!(claims.username, "react");
        assert_eq!(claims.iat, 1_700_000_000);
        assert_eq!(claims.exp, 1_700_003_600);
    }

    #[test]
    fn expiry_boundary_is_exclusive() {
        let claims = TokenClaims::new(&IdentityClaim::new("react"), 100, 10);
        assert!(!claims.is_expired_at(109));
        assert!(claims.is_expired_at(110));
        assert!(claims.is_expired_at(111));
    }

    #[test]
    fn payload_uses_username_key() {
        let claims = TokenClaims::new(&IdentityClaim::new("react"), 1, 2);
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json, serde_json::json!({ "username": "react", "iat": 1, "exp": 3 }));
    }
}
