// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::{middleware::require_auth, IdentityClaim},
    error::ApiError,
    models::{LoginRequest, LoginResponse, MessageResponse, RandomNumberResponse},
    state::AppState,
};

pub mod auth;
pub mod health;

/// Build the application router, mounting the API under `api_prefix`
/// (e.g. `/api/v1`).
pub fn router(state: AppState, api_prefix: &str) -> Router {
    let protected = Router::new()
        .route("/auth/random-number", get(auth::random_number))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let api_routes = Router::new()
        .route("/auth/login", post(auth::login))
        .merge(protected)
        .with_state(state);

    Router::new()
        .route("/health", get(health::liveness))
        .nest(api_prefix, api_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .fallback(api_not_found)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(CorsLayer::permissive())
}

async fn api_not_found() -> ApiError {
    ApiError::not_found("API not found")
}

#[derive(OpenApi)]
#[openapi(
    paths(auth::login, auth::random_number, health::liveness),
    components(
        schemas(
            LoginRequest,
            LoginResponse,
            RandomNumberResponse,
            IdentityClaim,
            MessageResponse,
            health::HealthResponse
        )
    ),
    tags(
        (name = "Auth", description = "Login and token-protected endpoints"),
        (name = "Health", description = "Liveness probe")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuthConfig, SigningSecret};
    use crate::store::InMemoryUserDirectory;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn app(prefix: &str) -> Router {
        let config = AuthConfig::new(SigningSecret::new("test-secret").unwrap());
        router(AppState::new(&config, InMemoryUserDirectory::new()), prefix)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_is_public() {
        let (status, body) = get_json(app("/api/v1"), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn unknown_route_is_api_not_found() {
        let (status, body) = get_json(app("/api/v1"), "/api/v1/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "API not found");
    }

    #[tokio::test]
    async fn api_is_mounted_under_configured_prefix() {
        let (status, _) = get_json(app("/api/v2"), "/api/v2/auth/random-number").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = get_json(app("/api/v2"), "/api/v1/auth/random-number").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn openapi_document_lists_auth_paths() {
        let (status, body) = get_json(app("/api/v1"), "/api-doc/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/api/v1/auth/login"].is_object());
        assert!(body["paths"]["/api/v1/auth/random-number"].is_object());
    }
}
