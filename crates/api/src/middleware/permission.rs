//! Permission-based access control extractor.
//!
//! [`RequirePermission<P>`] verifies the caller's token and rejects the
//! request with 403 unless the permission named by `P` was granted. Because
//! it is an extractor, the check completes before the handler body runs.

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use casting_core::permissions;

use super::auth::Authenticated;
use crate::auth::jwt::Claims;
use crate::error::AppError;
use crate::state::AppState;

/// A permission checked at the type level.
pub trait Permission: Send + Sync + 'static {
    const NAME: &'static str;
}

/// Requires the permission `P`. Rejects with 401 for a bad token and 403
/// when the permission is absent.
///
/// ```ignore
/// async fn list(RequirePermission { claims, .. }: RequirePermission<GetMovies>) { .. }
/// ```
pub struct RequirePermission<P: Permission> {
    pub claims: Claims,
    _permission: PhantomData<fn() -> P>,
}

impl<P: Permission> FromRequestParts<AppState> for RequirePermission<P> {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Authenticated(claims) = Authenticated::from_request_parts(parts, state).await?;

        claims.require(P::NAME).inspect_err(|err| {
            tracing::debug!(
                code = err.code(),
                required = P::NAME,
                "Permission check failed"
            );
        })?;

        Ok(RequirePermission {
            claims,
            _permission: PhantomData,
        })
    }
}

macro_rules! permission_markers {
    ($($marker:ident => $name:expr),* $(,)?) => {
        $(
            #[derive(Debug)]
            pub struct $marker;

            impl Permission for $marker {
                const NAME: &'static str = $name;
            }
        )*
    };
}

permission_markers! {
    GetMovies => permissions::GET_MOVIES,
    PostMovies => permissions::POST_MOVIES,
    PatchMovies => permissions::PATCH_MOVIES,
    DeleteMovies => permissions::DELETE_MOVIES,
    GetActors => permissions::GET_ACTORS,
    PostActors => permissions::POST_ACTORS,
    PatchActors => permissions::PATCH_ACTORS,
    DeleteActors => permissions::DELETE_ACTORS,
}
