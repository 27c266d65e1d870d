//! Present-vs-absent field handling for partial updates.
//!
//! A PATCH body distinguishes three states per field:
//!
//! | JSON               | Rust                |
//! |--------------------|---------------------|
//! | key omitted        | `None`              |
//! | `"key": null`      | `Some(None)`        |
//! | `"key": value`     | `Some(Some(value))` |
//!
//! Pair [`present`] with `#[serde(default)]` on an `Option<Option<T>>` field.

use serde::{Deserialize, Deserializer};

/// Deserialize a field that was present in the input, keeping `null` distinct
/// from an omitted key.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
