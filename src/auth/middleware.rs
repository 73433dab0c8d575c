// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication guard for Axum routers.
//!
//! Layer it onto the protected subtree with
//! `axum::middleware::from_fn_with_state`:
//!
//! ```rust,ignore
//! let protected = Router::new()
//!     .route("/random-number", get(random_number))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));
//! ```
//!
//! Admitted requests carry the [`IdentityClaim`](super::IdentityClaim) in
//! their extensions, where the [`Auth`](super::Auth) extractor picks it up.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::state::AppState;

/// Reject the request unless it carries a valid bearer token.
pub async fn require_auth(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    match state.gate.authenticate(request.headers().get(AUTHORIZATION)) {
        Ok(claim) => {
            tracing::debug!(username = %claim.username, "request admitted");
            request.extensions_mut().insert(claim);
            next.run(request).await
        }
        Err(e) => {
            tracing::warn!(
                reason = e.error_code(),
                path = %request.uri().path(),
                "request rejected by token gate"
            );
            e.into_response()
        }
    }
}
