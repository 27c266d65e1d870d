//! Bearer token verification.
//!
//! - [`jwt`] -- verifier configuration, claim set, and signature/claim checks.
//! - [`error`] -- [`AuthError`], the 401/403 failure taxonomy.
//!
//! Tokens are issued by an external identity provider; this service only
//! verifies them.

pub mod error;
pub mod jwt;

pub use error::AuthError;
