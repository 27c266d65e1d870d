//! Actor models and DTOs.

use casting_core::error::CoreError;
use casting_core::patch::present;
use casting_core::types::DbId;
use casting_core::validation::{
    validate_age, validate_email, validate_name, validate_optional, validate_salary,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Entity name used in not-found errors.
pub const ACTOR: &str = "Actor";

// ---------------------------------------------------------------------------
// Entity struct (response shape)
// ---------------------------------------------------------------------------

/// An actor row plus the names of the movies they play in.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub name: String,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub salary: Option<i64>,
    /// Movie names only, ordered by movie id.
    pub movies: Vec<String>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a new actor.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateActor {
    pub name: String,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub salary: Option<i64>,
}

impl CreateActor {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_name(&self.name)?;
        validate_optional(self.age.as_ref(), |age| validate_age(*age))?;
        validate_optional(self.email.as_deref(), validate_email)?;
        validate_optional(self.salary.as_ref(), |salary| validate_salary(*salary))?;
        Ok(())
    }
}

/// DTO for partially updating an actor.
///
/// Each field is `None` when omitted, `Some(None)` when sent as `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActorPatch {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub age: Option<Option<i32>>,
    #[serde(default, deserialize_with = "present")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub salary: Option<Option<i64>>,
}

impl ActorPatch {
    /// Validate only the fields the patch touches.
    pub fn validate(&self) -> Result<(), CoreError> {
        match &self.name {
            Some(None) => return Err(CoreError::Validation("name cannot be null".into())),
            Some(Some(name)) => validate_name(name)?,
            None => {}
        }
        validate_optional(self.age.flatten().as_ref(), |age| validate_age(*age))?;
        validate_optional(self.email.as_ref().and_then(Option::as_deref), validate_email)?;
        validate_optional(self.salary.flatten().as_ref(), |salary| {
            validate_salary(*salary)
        })?;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.email.is_none() && self.salary.is_none()
    }

    /// Apply the patch to an in-memory actor. Call [`validate`](Self::validate) first.
    pub fn apply_to(&self, actor: &mut Actor) {
        if let Some(Some(name)) = &self.name {
            actor.name = name.clone();
        }
        if let Some(age) = self.age {
            actor.age = age;
        }
        if let Some(email) = &self.email {
            actor.email = email.clone();
        }
        if let Some(salary) = self.salary {
            actor.salary = salary;
        }
    }
}
