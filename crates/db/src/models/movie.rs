//! Movie models and DTOs.

use casting_core::error::CoreError;
use casting_core::patch::present;
use casting_core::types::DbId;
use casting_core::validation::{validate_genre, validate_length, validate_name, validate_optional};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Entity name used in not-found errors.
pub const MOVIE: &str = "Movie";

/// A movie row plus the names of the actors who play in it.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub name: String,
    /// Running time in minutes.
    pub length: Option<f64>,
    pub genre: Option<String>,
    /// Actor names only, ordered by actor id.
    pub actors: Vec<String>,
}

/// DTO for creating a new movie.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateMovie {
    pub name: String,
    pub length: Option<f64>,
    pub genre: Option<String>,
}

impl CreateMovie {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_name(&self.name)?;
        validate_optional(self.length.as_ref(), |length| validate_length(*length))?;
        validate_optional(self.genre.as_deref(), validate_genre)?;
        Ok(())
    }
}

/// DTO for partially updating a movie. Same three-state fields as
/// [`ActorPatch`](crate::models::actor::ActorPatch).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoviePatch {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub length: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub genre: Option<Option<String>>,
}

impl MoviePatch {
    pub fn validate(&self) -> Result<(), CoreError> {
        match &self.name {
            Some(None) => return Err(CoreError::Validation("name cannot be null".into())),
            Some(Some(name)) => validate_name(name)?,
            None => {}
        }
        validate_optional(self.length.flatten().as_ref(), |length| {
            validate_length(*length)
        })?;
        validate_optional(self.genre.as_ref().and_then(Option::as_deref), validate_genre)?;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.length.is_none() && self.genre.is_none()
    }

    pub fn apply_to(&self, movie: &mut Movie) {
        if let Some(Some(name)) = &self.name {
            movie.name = name.clone();
        }
        if let Some(length) = self.length {
            movie.length = length;
        }
        if let Some(genre) = &self.genre {
            movie.genre = genre.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_accepts_name_only() {
        let input: CreateMovie = serde_json::from_str(r#"{"name": "Heat"}"#).unwrap();
        assert!(input.validate().is_ok());
        assert_eq!(input.length, None);
    }

    #[test]
    fn create_rejects_legacy_fields() {
        let result = serde_json::from_str::<CreateMovie>(
            r#"{"name": "Heat", "requirements": {"age": 30}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn create_rejects_non_positive_length() {
        let input: CreateMovie =
            serde_json::from_str(r#"{"name": "Heat", "length": 0}"#).unwrap();
        assert!(input.validate().is_err());
    }

    #[test]
    fn patch_changes_only_genre() {
        let patch: MoviePatch = serde_json::from_str(r#"{"genre": "Crime"}"#).unwrap();
        let mut movie = Movie {
            id: 7,
            name: "Heat".into(),
            length: Some(170.0),
            genre: None,
            actors: vec![],
        };
        patch.apply_to(&mut movie);
        assert_eq!(movie.genre.as_deref(), Some("Crime"));
        assert_eq!(movie.length, Some(170.0));
        assert_eq!(movie.name, "Heat");
    }
}
