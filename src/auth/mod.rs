// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Stateless bearer-token authentication: there is no session table, the
//! signed token is the only record of a login.
//!
//! ## Auth Flow
//!
//! 1. Client posts `{username, password}` to the login endpoint
//! 2. [`CredentialVerifier`] checks them against the [`UserDirectory`]
//! 3. [`TokenIssuer`] signs `{username, iat, exp}` as an HS256 JWT
//! 4. Client sends `Authorization: Bearer <token>` on protected routes
//! 5. [`TokenGate`] (run by [`middleware::require_auth`]) verifies the
//!    signature, then expiry, and attaches the [`IdentityClaim`]
//!
//! ## Security
//!
//! - Login failures all answer "Authentication error"
//! - Gate failures all answer "Unauthorized"
//! - The precise reason ([`AuthError::error_code`]) only reaches the logs
//! - The signing secret is fixed for the process lifetime

pub mod claims;
pub mod credentials;
pub mod error;
pub mod extractor;
pub mod gate;
pub mod issuer;
pub mod middleware;
pub mod password;

pub use claims::{IdentityClaim, TokenClaims};
pub use credentials::{CredentialRecord, CredentialVerifier, UserDirectory};
pub use error::AuthError;
pub use extractor::Auth;
pub use gate::TokenGate;
pub use issuer::TokenIssuer;
pub use password::{PasswordError, PasswordHash};
