// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Outward message for every login failure.
pub const AUTHENTICATION_ERROR_MESSAGE: &str = "Authentication error";

/// Outward message for every token gate rejection.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Reason an authentication attempt was rejected.
///
/// The variants are distinguishable internally (logs, tests) but the HTTP
/// response collapses them into two messages: one for login, one for the
/// token gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Login attempted with an empty username or password
    #[error("Username and password are required")]
    NoCredentials,
    /// Unknown username or wrong password
    #[error("Username or password is incorrect")]
    BadCredentials,
    /// No authorization header present
    #[error("Authorization header is required")]
    MissingToken,
    /// Header is not of the form `Bearer <token>`
    #[error("Invalid authorization header format (expected 'Bearer <token>')")]
    MalformedToken,
    /// Token failed to decode or its signature does not verify
    #[error("Token signature is invalid")]
    InvalidSignature,
    /// Token lifetime has elapsed
    #[error("Token has expired")]
    Expired,
}

#[derive(Serialize)]
struct AuthErrorBody {
    message: &'static str,
}

impl AuthError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::NoCredentials => "no_credentials",
            AuthError::BadCredentials => "bad_credentials",
            AuthError::MissingToken => "missing_token",
            AuthError::MalformedToken => "malformed_token",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::Expired => "token_expired",
        }
    }

    /// True for failures raised at login rather than at the token gate.
    pub fn is_login_failure(&self) -> bool {
        matches!(self, AuthError::NoCredentials | AuthError::BadCredentials)
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    /// Message shown to the client. Never reveals which check failed.
    pub fn public_message(&self) -> &'static str {
        if self.is_login_failure() {
            AUTHENTICATION_ERROR_MESSAGE
        } else {
            UNAUTHORIZED_MESSAGE
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(AuthErrorBody {
            message: self.public_message(),
        });
        (self.status_code(), body).into_response()
    }
}
