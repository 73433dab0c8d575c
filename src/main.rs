// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::net::SocketAddr;

use relational_auth_server::{
    api::router,
    config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER, LOG_FORMAT_ENV},
    state::AppState,
    store::InMemoryUserDirectory,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // LOG_FORMAT is read ahead of the full config so config errors are logged
    // in the requested format.
    init_tracing(LogFormat::parse(std::env::var(LOG_FORMAT_ENV).ok().as_deref()));

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration, refusing to start");
            std::process::exit(1);
        }
    };

    let mut directory = InMemoryUserDirectory::new();
    if let Some(seed) = &config.seed_user {
        if let Err(e) = directory.insert_user(seed.username.clone(), &seed.password) {
            tracing::error!(error = %e, "failed to seed user directory");
            std::process::exit(1);
        }
        tracing::info!(username = %seed.username, "seeded user directory");
    }
    if directory.is_empty() {
        tracing::warn!("user directory is empty; every login will be rejected");
    }

    let state = AppState::new(&config.auth, directory);
    let api_prefix = config.api_prefix();
    let app = router(state, &api_prefix);

    let addr: SocketAddr = match format!("{}:{}", config.host, config.port).parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(error = %e, host = %config.host, "failed to parse bind address");
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(
        %addr,
        api_prefix = %api_prefix,
        token_ttl_secs = config.auth.token_ttl_secs,
        "Relational Auth server listening (docs at /docs)"
    );

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
