//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use crate::auth::jwt::Claims;
use crate::auth::AuthError;
use crate::error::AppError;
use crate::state::AppState;

/// Claims of a verified Bearer token from the `Authorization` header.
///
/// ```ignore
/// async fn whoami(Authenticated(claims): Authenticated) -> AppResult<Json<String>> {
///     Ok(Json(claims.sub))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Authenticated(pub Claims);

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).inspect_err(|err| {
            tracing::debug!(code = err.code(), "Rejected Authorization header");
        })?;

        let claims = state.verifier.verify(token).inspect_err(|err| {
            tracing::debug!(code = err.code(), "Rejected bearer token");
        })?;

        Ok(Authenticated(claims))
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively; anything other than exactly
/// two space-separated parts is malformed.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingHeader)?
        .to_str()
        .map_err(|_| AuthError::MalformedHeader)?;

    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}
