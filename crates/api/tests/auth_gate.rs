//! Integration tests for the bearer-token permission gate.
//!
//! Every protected endpoint must reject missing, malformed, invalid and
//! under-privileged tokens before its body runs, leaving the store untouched.

mod common;

use assert_matches::assert_matches;
use axum::http::{Method, StatusCode};
use casting_db::MemoryCatalogStore;
use common::*;
use serde_json::json;

/// Every protected route with a syntactically valid body, paired with the
/// permission it requires.
fn protected_routes() -> Vec<(Method, &'static str, Option<&'static str>, &'static str)> {
    vec![
        (Method::GET, "/movies", None, "get:movies"),
        (Method::GET, "/movies/1", None, "get:movies"),
        (Method::POST, "/movies/new", Some(r#"{"name":"Heat"}"#), "post:movies"),
        (Method::PATCH, "/movies/1", Some(r#"{"genre":"Crime"}"#), "patch:movies"),
        (Method::DELETE, "/movies/1", None, "delete:movies"),
        (Method::GET, "/actors", None, "get:actors"),
        (Method::GET, "/actors/1", None, "get:actors"),
        (Method::POST, "/actors/new", Some(r#"{"name":"Al"}"#), "post:actors"),
        (Method::PATCH, "/actors/1", Some(r#"{"age":40}"#), "patch:actors"),
        (Method::DELETE, "/actors/1", None, "delete:actors"),
        (Method::POST, "/actors/1/movies/1", None, "patch:actors"),
        (Method::DELETE, "/actors/1/movies/1", None, "patch:actors"),
    ]
}

async fn assert_auth_error(
    response: axum::http::Response<axum::body::Body>,
    status: StatusCode,
    code: &str,
) {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], status.as_u16());
    assert_eq!(json["code"], code);
}

// ---------------------------------------------------------------------------
// 401: header problems
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_header_is_rejected_on_every_protected_route() {
    let store = MemoryCatalogStore::new_shared();
    let app = build_test_app(store.clone());

    for (method, uri, body, _) in protected_routes() {
        let response = send_raw(app.clone(), method.clone(), uri, None, body).await;
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{method} {uri} should require a token"
        );
    }

    assert_eq!(store.movie_count().await, 0);
    assert_eq!(store.actor_count().await, 0);
}

#[tokio::test]
async fn missing_header_reports_its_code() {
    let app = build_test_app(MemoryCatalogStore::new_shared());

    let response = send_raw(app, Method::GET, "/movies", None, None).await;

    assert_auth_error(response, StatusCode::UNAUTHORIZED, "MISSING_HEADER").await;
}

#[tokio::test]
async fn malformed_headers_are_rejected() {
    let app = build_test_app(MemoryCatalogStore::new_shared());
    let token = admin_token();

    let malformed = [
        token.clone(),
        format!("Basic {token}"),
        "Bearer".to_string(),
        format!("Bearer {token} extra"),
    ];

    for header in malformed {
        let response = send_raw(app.clone(), Method::GET, "/movies", Some(&header), None).await;
        assert_auth_error(response, StatusCode::UNAUTHORIZED, "MALFORMED_HEADER").await;
    }
}

#[tokio::test]
async fn bearer_scheme_is_case_insensitive() {
    let app = build_test_app(MemoryCatalogStore::new_shared());
    let header = format!("bearer {}", token(&["get:movies"]));

    let response = send_raw(app, Method::GET, "/movies", Some(&header), None).await;

    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// 401: token problems
// ---------------------------------------------------------------------------

#[tokio::test]
async fn garbage_token_is_invalid() {
    let app = build_test_app(MemoryCatalogStore::new_shared());

    let response = get(app, "/movies", "not-a-jwt").await;

    assert_auth_error(response, StatusCode::UNAUTHORIZED, "INVALID_TOKEN").await;
}

#[tokio::test]
async fn token_signed_with_another_key_is_invalid() {
    let app = build_test_app(MemoryCatalogStore::new_shared());
    let forged = sign(
        &claims(Some(&["get:movies"]), 3600),
        "some-other-secret-that-is-also-long",
    );

    let response = get(app, "/movies", &forged).await;

    assert_auth_error(response, StatusCode::UNAUTHORIZED, "INVALID_TOKEN").await;
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let app = build_test_app(MemoryCatalogStore::new_shared());
    let expired = sign(&claims(Some(&["get:movies"]), -600), SECRET);

    let response = get(app, "/movies", &expired).await;

    assert_auth_error(response, StatusCode::UNAUTHORIZED, "TOKEN_EXPIRED").await;
}

#[tokio::test]
async fn wrong_audience_is_rejected() {
    let app = build_test_app(MemoryCatalogStore::new_shared());
    let mut c = claims(Some(&["get:movies"]), 3600);
    c.aud = casting_api::auth::jwt::Audience::One("someone-else".to_string());

    let response = get(app, "/movies", &sign(&c, SECRET)).await;

    assert_auth_error(response, StatusCode::UNAUTHORIZED, "INVALID_CLAIMS").await;
}

#[tokio::test]
async fn wrong_issuer_is_rejected() {
    let app = build_test_app(MemoryCatalogStore::new_shared());
    let mut c = claims(Some(&["get:movies"]), 3600);
    c.iss = "https://evil.test/".to_string();

    let response = get(app, "/movies", &sign(&c, SECRET)).await;

    assert_auth_error(response, StatusCode::UNAUTHORIZED, "INVALID_CLAIMS").await;
}

// ---------------------------------------------------------------------------
// 403: permission problems
// ---------------------------------------------------------------------------

#[tokio::test]
async fn token_without_permissions_claim_is_forbidden() {
    let app = build_test_app(MemoryCatalogStore::new_shared());
    let bare = sign(&claims(None, 3600), SECRET);

    let response = get(app, "/movies", &bare).await;

    assert_auth_error(response, StatusCode::FORBIDDEN, "PERMISSIONS_MISSING").await;
}

#[tokio::test]
async fn each_route_requires_exactly_its_permission() {
    let store = MemoryCatalogStore::new_shared();
    let app = build_test_app(store.clone());

    for (method, uri, body, required) in protected_routes() {
        let others: Vec<&str> = casting_core::permissions::ALL
            .iter()
            .copied()
            .filter(|p| *p != required)
            .collect();
        let header = format!("Bearer {}", token(&others));

        let response = send_raw(app.clone(), method.clone(), uri, Some(&header), body).await;
        assert_eq!(
            response.status(),
            StatusCode::FORBIDDEN,
            "{method} {uri} should require {required}"
        );
        let json = body_json(response).await;
        assert_eq!(json["code"], "PERMISSION_DENIED");
    }

    assert_eq!(store.movie_count().await, 0);
    assert_eq!(store.actor_count().await, 0);
}

#[tokio::test]
async fn read_only_token_cannot_delete() {
    let store = MemoryCatalogStore::new_shared();
    let app = build_test_app(store.clone());
    for name in ["A", "B", "C", "D", "E"] {
        create_movie(app.clone(), json!({ "name": name })).await;
    }
    assert_eq!(store.movie_count().await, 5);

    let response = delete(app.clone(), "/movies/5", &token(&["get:movies"])).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(store.movie_count().await, 5);

    let response = get(app, "/movies/5", &token(&["get:movies"])).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn auth_runs_before_body_decoding() {
    let app = build_test_app(MemoryCatalogStore::new_shared());

    let response = send_raw(
        app,
        Method::POST,
        "/movies/new",
        None,
        Some("{not json"),
    )
    .await;

    assert_matches!(response.status(), StatusCode::UNAUTHORIZED);
}
