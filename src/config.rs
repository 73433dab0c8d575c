// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names, default values, and the
//! configuration structs built from them. Configuration is loaded from the
//! environment once at startup and is immutable afterwards.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `JWT_SECRET` | HS256 signing secret for issued tokens | Required |
//! | `API_VERSION` | Version segment of the `/api/v{N}` prefix | `1` |
//! | `TOKEN_TTL_SECS` | Lifetime of issued tokens, in seconds | `3600` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `SEED_USERNAME` | Username inserted into the user directory at startup | Optional |
//! | `SEED_PASSWORD` | Password for `SEED_USERNAME` | Optional |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::fmt;

/// Environment variable holding the token signing secret.
///
/// A missing or empty secret is fatal at startup.
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";

pub const API_VERSION_ENV: &str = "API_VERSION";
pub const TOKEN_TTL_SECS_ENV: &str = "TOKEN_TTL_SECS";
pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const SEED_USERNAME_ENV: &str = "SEED_USERNAME";
pub const SEED_PASSWORD_ENV: &str = "SEED_PASSWORD";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_API_VERSION: &str = "1";
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Configuration errors. All of them abort startup.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Symmetric signing key. `Debug` never prints the key material.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningSecret(String);

impl SigningSecret {
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(ConfigError::Missing(JWT_SECRET_ENV));
        }
        Ok(Self(secret))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(<redacted>)")
    }
}

/// Token policy shared by the issuer and the gate.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub secret: SigningSecret,
    /// Lifetime of issued tokens, in seconds. Always positive.
    pub token_ttl_secs: i64,
}

impl AuthConfig {
    pub fn new(secret: SigningSecret) -> Self {
        Self {
            secret,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }

    pub fn with_token_ttl_secs(mut self, ttl: i64) -> Self {
        self.token_ttl_secs = ttl;
        self
    }
}

/// Log output format selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

impl LogFormat {
    /// Anything other than `json` selects the pretty formatter.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// A user inserted into the directory at startup.
#[derive(Clone)]
pub struct SeedUser {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for SeedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedUser")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Process configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub auth: AuthConfig,
    pub api_version: String,
    pub host: String,
    pub port: u16,
    pub seed_user: Option<SeedUser>,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup(JWT_SECRET_ENV).ok_or(ConfigError::Missing(JWT_SECRET_ENV))?;
        let secret = SigningSecret::new(secret)?;

        let token_ttl_secs = match lookup(TOKEN_TTL_SECS_ENV) {
            Some(raw) => parse_ttl(&raw)?,
            None => DEFAULT_TOKEN_TTL_SECS,
        };

        let api_version = lookup(API_VERSION_ENV).unwrap_or_else(|| DEFAULT_API_VERSION.to_string());
        if api_version.is_empty() || api_version.contains('/') {
            return Err(ConfigError::Invalid {
                name: API_VERSION_ENV,
                reason: format!("'{api_version}' is not a path segment"),
            });
        }

        let port = match lookup(PORT_ENV) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: PORT_ENV,
                reason: format!("'{raw}' is not a port number"),
            })?,
            None => DEFAULT_PORT,
        };

        let seed_user = match (lookup(SEED_USERNAME_ENV), lookup(SEED_PASSWORD_ENV)) {
            (Some(username), Some(password)) => Some(SeedUser { username, password }),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Missing(SEED_PASSWORD_ENV)),
            (None, Some(_)) => return Err(ConfigError::Missing(SEED_USERNAME_ENV)),
        };

        let log_format = LogFormat::parse(lookup(LOG_FORMAT_ENV).as_deref());

        Ok(Self {
            auth: AuthConfig::new(secret).with_token_ttl_secs(token_ttl_secs),
            api_version,
            host: lookup(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            seed_user,
            log_format,
        })
    }

    /// Path prefix under which the versioned API is mounted, e.g. `/api/v1`.
    pub fn api_prefix(&self) -> String {
        format!("/api/v{}", self.api_version)
    }
}

fn parse_ttl(raw: &str) -> Result<i64, ConfigError> {
    match raw.parse::<i64>() {
        Ok(ttl) if ttl > 0 => Ok(ttl),
        _ => Err(ConfigError::Invalid {
            name: TOKEN_TTL_SECS_ENV,
            reason: format!("'{raw}' is not a positive number of seconds"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn missing_secret_is_fatal() {
        assert_eq!(load(&[]).unwrap_err(), ConfigError::Missing(JWT_SECRET_ENV));
    }

    #[test]
    fn blank_secret_is_fatal() {
        let err = load(&[(JWT_SECRET_ENV, "   ")]).unwrap_err();
        assert_eq!(err, ConfigError::Missing(JWT_SECRET_ENV));
    }

    #[test]
    fn defaults_apply() {
        let config = load(&[(JWT_SECRET_ENV, "s3cr3t")]).unwrap();
        assert_eq!(config.api_version, "1");
        assert_eq!(config.api_prefix(), "/api/v1");
        assert_eq!(config.auth.token_ttl_secs, DEFAULT_TOKEN_TTL_SECS);
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.seed_user.is_none());
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn overrides_are_read() {
        let config = load(&[
            (JWT_SECRET_ENV, "s3cr3t"),
            (API_VERSION_ENV, "2"),
            (TOKEN_TTL_SECS_ENV, "60"),
            (PORT_ENV, "9000"),
            (SEED_USERNAME_ENV, "react"),
            (SEED_PASSWORD_ENV, "express"),
            (LOG_FORMAT_ENV, "json"),
        ])
        .unwrap();
        assert_eq!(config.api_prefix(), "/api/v2");
        assert_eq!(config.auth.token_ttl_secs, 60);
        assert_eq!(config.port, 9000);
        assert_eq!(config.seed_user.unwrap().username, "react");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn non_positive_ttl_is_rejected() {
        for raw in ["0", "-5", "soon"] {
            let err = load(&[(JWT_SECRET_ENV, "s3cr3t"), (TOKEN_TTL_SECS_ENV, raw)]).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { name: TOKEN_TTL_SECS_ENV, .. }));
        }
    }

    #[test]
    fn half_configured_seed_user_is_rejected() {
        let err = load(&[(JWT_SECRET_ENV, "s3cr3t"), (SEED_USERNAME_ENV, "react")]).unwrap_err();
        assert_eq!(err, ConfigError::Missing(SEED_PASSWORD_ENV));
    }

    #[test]
    fn secret_debug_is_redacted() {
        let secret = SigningSecret::new("hunter2").unwrap();
        assert!(!format!("{secret:?}").contains("hunter2"));
    }
}
