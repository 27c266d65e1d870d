//! Shared building blocks for the casting agency service.
//!
//! Types here are storage- and transport-agnostic: the database crate and
//! the HTTP crate both depend on them.

pub mod error;
pub mod patch;
pub mod permissions;
pub mod types;
pub mod validation;
