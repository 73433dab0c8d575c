// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Username/password verification against a user directory.

use std::sync::Arc;

use super::{AuthError, IdentityClaim, PasswordHash};
use super::password::DEFAULT_ITERATIONS;

/// Credentials held by the user directory for one user.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    pub username: String,
    pub password: PasswordHash,
}

/// Read-only lookup of credential records by username.
pub trait UserDirectory: Send + Sync {
    fn find(&self, username: &str) -> Option<CredentialRecord>;
}

/// Checks login credentials and produces the identity claim for a token.
#[derive(Clone)]
pub struct CredentialVerifier {
    directory: Arc<dyn UserDirectory>,
    /// Compared against on a directory miss so a miss costs the same as a
    /// wrong password.
    decoy: Arc<PasswordHash>,
}

impl CredentialVerifier {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            directory,
            decoy: Arc::new(PasswordHash::with_salt("", [0; 16], DEFAULT_ITERATIONS)),
        }
    }

    /// Verify `username`/`password`.
    ///
    /// Unknown users and wrong passwords both yield
    /// [`AuthError::BadCredentials`].
    pub fn verify(&self, username: &str, password: &str) -> Result<IdentityClaim, AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::NoCredentials);
        }

        match self.directory.find(username) {
            Some(record) if record.password.verify(password) => {
                Ok(IdentityClaim::new(record.username))
            }
            Some(_) => Err(AuthError::BadCredentials),
            None => {
                let _ = self.decoy.verify(password);
                Err(AuthError::BadCredentials)
            }
        }
    }
}
