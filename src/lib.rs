// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Relational Auth - Stateless Bearer-Token Authentication Service
//!
//! Users log in with a username and password and receive a signed,
//! time-bounded JWT. Protected routes admit a request only if it carries a
//! valid `Authorization: Bearer <token>` header. No session state is kept on
//! the server.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Credential verification, token issuance and the token gate
//! - `config` - Environment configuration
//! - `store` - In-memory user directory

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod store;
