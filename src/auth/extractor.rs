// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for authenticated identities.
//!
//! Use the `Auth` extractor in handlers to require authentication:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(claim): Auth) -> impl IntoResponse {
//!     // claim is IdentityClaim
//! }
//! ```

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use super::{AuthError, IdentityClaim};
use crate::state::AppState;

/// Extractor for the authenticated identity.
///
/// Uses the claim attached by [`super::middleware::require_auth`] when the
/// route is guarded; otherwise runs the token gate itself.
pub struct Auth(pub IdentityClaim);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        if let Some(claim) = parts.extensions.get::<IdentityClaim>().cloned() {
            return Ok(Auth(claim));
        }

        let claim = state.gate.authenticate(parts.headers.get(AUTHORIZATION))?;
        Ok(Auth(claim))
    }
}
