//! Request extractors whose rejections use the [`AppError`] envelope.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Request};
use casting_core::error::CoreError;
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

/// `axum::extract::Path` with JSON error responses.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct IdPath<T>(pub T);

/// A raw request body, bound to a payload type only when the handler asks.
///
/// Parsing is deferred so handlers can answer 404 for an unknown id before
/// looking at the body. Decoding then separates the failure modes:
/// non-JSON bodies are 400, well-formed JSON of the wrong shape is 422. The
/// `Content-Type` header is not inspected.
#[derive(Debug)]
pub struct JsonBody(pub Bytes);

impl<S: Send + Sync> FromRequest<S> for JsonBody {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(JsonBody(bytes))
    }
}

impl JsonBody {
    /// Parse the body as JSON without binding it to a type.
    pub fn parse(&self) -> AppResult<serde_json::Value> {
        serde_json::from_slice(&self.0).map_err(|err| {
            AppError::BadRequest(format!("Request body is not valid JSON: {err}"))
        })
    }

    /// Bind the body to a payload type. Shape errors are validation failures.
    pub fn decode<T: DeserializeOwned>(self) -> AppResult<T> {
        let value = self.parse()?;
        if !value.is_object() {
            return Err(CoreError::Validation("request body must be a JSON object".into()).into());
        }
        serde_json::from_value(value).map_err(|err| CoreError::Validation(err.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use casting_db::models::movie::CreateMovie;

    use super::*;

    fn body(raw: &str) -> JsonBody {
        JsonBody(Bytes::from(raw.to_string()))
    }

    #[test]
    fn decode_binds_object() {
        let movie: CreateMovie = body(r#"{"name": "Alien", "length": 117}"#).decode().unwrap();
        assert_eq!(movie.name, "Alien");
        assert_eq!(movie.length, Some(117.0));
    }

    #[test]
    fn decode_rejects_non_objects() {
        let result = body(r#"["Alien"]"#).decode::<CreateMovie>();
        assert_matches!(result, Err(AppError::Core(CoreError::Validation(_))));
    }

    #[test]
    fn decode_reports_missing_field() {
        let result = body(r#"{"genre": "Horror"}"#).decode::<CreateMovie>();
        assert_matches!(
            result,
            Err(AppError::Core(CoreError::Validation(msg))) if msg.contains("name")
        );
    }

    #[test]
    fn invalid_json_is_a_bad_request() {
        assert_matches!(body("{not json").parse(), Err(AppError::BadRequest(_)));
        assert_matches!(body("").decode::<CreateMovie>(), Err(AppError::BadRequest(_)));
    }
}
