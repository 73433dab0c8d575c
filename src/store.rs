// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory user directory.
//!
//! Populated at startup (see `SEED_USERNAME` / `SEED_PASSWORD`) and read-only
//! once the server is running.

use std::collections::HashMap;

use crate::auth::{CredentialRecord, PasswordError, PasswordHash, UserDirectory};

#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: HashMap<String, CredentialRecord>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user, hashing the plaintext password.
    pub fn insert_user(
        &mut self,
        username: impl Into<String>,
        password: &str,
    ) -> Result<(), PasswordError> {
        let username = username.into();
        let record = CredentialRecord {
            username: username.clone(),
            password: PasswordHash::new(password)?,
        };
        self.users.insert(username, record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn find(&self, username: &str) -> Option<CredentialRecord> {
        self.users.get(username).cloned()
    }
}
