#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use casting_api::app::build_app;
use casting_api::auth::jwt::{Audience, AuthConfig, Claims, KeySource, TokenVerifier};
use casting_api::config::{CorsOrigins, ServerConfig};
use casting_api::state::AppState;
use casting_db::MemoryCatalogStore;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use tower::ServiceExt;

pub const SECRET: &str = "integration-test-secret-long-enough-for-hs256";
pub const ISSUER: &str = "https://casting.test/";
pub const AUDIENCE: &str = "casting";

/// Build a test `ServerConfig` with safe defaults and an HS256 secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: "postgres://unused-in-memory-tests".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: CorsOrigins::Any,
        request_timeout_secs: 30,
        database_max_connections: 1,
        auth: AuthConfig {
            issuer: ISSUER.to_string(),
            audience: AUDIENCE.to_string(),
            key: KeySource::Secret(SECRET.to_string()),
            leeway_secs: 0,
        },
    }
}

/// Build the full application router backed by the given in-memory store.
///
/// Goes through `build_app`, so tests exercise the same middleware stack
/// (CORS, request ID, timeout, tracing, panic recovery) that production uses.
pub fn build_test_app(store: Arc<MemoryCatalogStore>) -> Router {
    let config = test_config();
    let verifier = TokenVerifier::from_config(&config.auth).expect("verifier should build");

    build_app(AppState {
        store,
        config: Arc::new(config),
        verifier: Arc::new(verifier),
    })
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

pub fn claims(permissions: Option<&[&str]>, exp_offset_secs: i64) -> Claims {
    let now = chrono::Utc::now().timestamp();
    Claims {
        sub: "auth0|test-user".to_string(),
        iss: ISSUER.to_string(),
        aud: Audience::One(AUDIENCE.to_string()),
        exp: now + exp_offset_secs,
        iat: Some(now),
        permissions: permissions.map(|p| p.iter().map(|s| s.to_string()).collect()),
    }
}

pub fn sign(claims: &Claims, secret: &str) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("encoding should succeed")
}

/// A valid token granting exactly `permissions`.
pub fn token(permissions: &[&str]) -> String {
    sign(&claims(Some(permissions), 3600), SECRET)
}

/// A valid token granting every permission the API checks.
pub fn admin_token() -> String {
    token(&casting_core::permissions::ALL)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Send a request with an optional raw `Authorization` header and raw body.
pub async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    authorization: Option<&str>,
    body: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = authorization {
        builder = builder.header("authorization", value);
    }
    let body = match body {
        Some(raw) => {
            builder = builder.header("content-type", "application/json");
            Body::from(raw.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

/// Send a request authenticated with `token`, with an optional JSON body.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let body = body.map(|v| v.to_string());
    send_raw(
        app,
        method,
        uri,
        Some(&format!("Bearer {token}")),
        body.as_deref(),
    )
    .await
}

pub async fn get(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, token, None).await
}

pub async fn post_json(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, token, Some(body)).await
}

pub async fn patch_json(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PATCH, uri, token, Some(body)).await
}

pub async fn delete(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, token, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a movie through the API and return its id.
pub async fn create_movie(app: Router, body: serde_json::Value) -> i64 {
    let response = post_json(app, "/movies/new", &admin_token(), body).await;
    assert_eq!(response.status(), 200);
    let json = body_json(response).await;
    json["id"].as_i64().expect("create should echo the id")
}

/// Create an actor through the API and return their id.
pub async fn create_actor(app: Router, body: serde_json::Value) -> i64 {
    let response = post_json(app, "/actors/new", &admin_token(), body).await;
    assert_eq!(response.status(), 200);
    let json = body_json(response).await;
    json["id"].as_i64().expect("create should echo the id")
}
