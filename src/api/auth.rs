// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Login and the token-protected random number endpoint.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use ring::rand::{SecureRandom, SystemRandom};

use crate::{
    auth::Auth,
    error::ApiError,
    models::{LoginRequest, LoginResponse, MessageResponse, RandomNumberResponse},
    state::AppState,
};

/// Exchange a username and password for a signed bearer token.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "Credentials accepted", body = LoginResponse),
        (status = 400, description = "Body is not valid JSON", body = MessageResponse),
        (status = 401, description = "Authentication error", body = MessageResponse),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(request) = payload?;

    let claim = state
        .verifier
        .verify(&request.username, &request.password)
        .inspect_err(|e| {
            tracing::warn!(reason = e.error_code(), "login rejected");
        })?;

    let token = state.issuer.issue(&claim).map_err(|e| {
        tracing::error!(error = %e, "failed to sign token");
        ApiError::internal("Failed to issue token")
    })?;

    tracing::info!(username = %claim.username, "login succeeded");
    Ok(Json(LoginResponse { token }))
}

/// Return a random number to an authenticated caller.
#[utoipa::path(
    get,
    path = "/api/v1/auth/random-number",
    tag = "Auth",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Random number in [0, 100)", body = RandomNumberResponse),
        (status = 401, description = "Unauthorized - invalid or missing token", body = MessageResponse),
    )
)]
pub async fn random_number(Auth(user): Auth) -> Result<Json<RandomNumberResponse>, ApiError> {
    let num = random_percent().map_err(|_| ApiError::internal("Random source unavailable"))?;
    Ok(Json(RandomNumberResponse { user, num }))
}

/// Uniform `f64` in `[0, 100)` from the system CSPRNG.
fn random_percent() -> Result<f64, ring::error::Unspecified> {
    let mut bytes = [0u8; 8];
    SystemRandom::new().fill(&mut bytes)?;
    // 53 random bits fill an f64 mantissa exactly
    let bits = u64::from_le_bytes(bytes) >> 11;
    Ok(bits as f64 / (1u64 << 53) as f64 * 100.0)
}
