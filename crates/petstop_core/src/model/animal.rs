//! Animal catalog record.
//!
//! # Responsibility
//! - Define the record mapped to the `animais` table.
//! - Enforce the animal field rules before persistence.
//!
//! # Invariants
//! - `name` and `species` are non-empty after trimming.
//! - `age` is never negative.

use super::{RecordId, ValidationError};
use serde::{Deserialize, Serialize};

/// One animal in the shop catalog.
///
/// A transient record (`id == None`) becomes persistent when `create`
/// assigns the store id. Updates replace every non-id field wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    /// Store-assigned key; `None` until persisted.
    pub id: Option<RecordId>,
    pub name: String,
    pub species: String,
    /// Age in whole years.
    pub age: i64,
    pub vaccinated: bool,
}

impl Animal {
    /// Creates a transient record with no store id.
    pub fn new(
        name: impl Into<String>,
        species: impl Into<String>,
        age: i64,
        vaccinated: bool,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            species: species.into(),
            age,
            vaccinated,
        }
    }

    /// Rehydrates a persisted record with its store id.
    pub fn with_id(
        id: RecordId,
        name: impl Into<String>,
        species: impl Into<String>,
        age: i64,
        vaccinated: bool,
    ) -> Self {
        Self {
            id: Some(id),
            ..Self::new(name, species, age, vaccinated)
        }
    }

    /// Checks field rules, returning the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }
        if self.species.trim().is_empty() {
            return Err(ValidationError::EmptyField("species"));
        }
        if self.age < 0 {
            return Err(ValidationError::NegativeField("age"));
        }
        Ok(())
    }
}
