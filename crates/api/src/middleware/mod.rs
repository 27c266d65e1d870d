//! Authentication and authorization extractors.
//!
//! - [`auth::Authenticated`] -- Verifies the Bearer token and yields its claims.
//! - [`permission::RequirePermission`] -- Requires one named permission.

pub mod auth;
pub mod permission;
