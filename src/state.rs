// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::auth::{CredentialVerifier, TokenGate, TokenIssuer};
use crate::config::AuthConfig;
use crate::store::InMemoryUserDirectory;

/// Shared, read-only request state. Built once before the server starts.
#[derive(Clone)]
pub struct AppState {
    pub verifier: CredentialVerifier,
    pub issuer: TokenIssuer,
    pub gate: TokenGate,
}

impl AppState {
    pub fn new(config: &AuthConfig, directory: InMemoryUserDirectory) -> Self {
        Self {
            verifier: CredentialVerifier::new(Arc::new(directory)),
            issuer: TokenIssuer::new(config),
            gate: TokenGate::new(config),
        }
    }
}
