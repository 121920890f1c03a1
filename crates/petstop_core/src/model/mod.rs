//! Catalog record models.
//!
//! # Responsibility
//! - Define the canonical animal and product records.
//! - Define the validation rules shared by the repository and editor layers.
//!
//! # Invariants
//! - Records are detached value snapshots; the core never hands out shared
//!   mutable state.
//! - `id` is absent until the store assigns one, then immutable.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod animal;
pub mod product;

/// Store-assigned primary key. Positive once assigned.
pub type RecordId = i64;

/// First violated rule found when checking a record or form input.
///
/// Field names refer to the in-memory record fields, not table columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty after trimming.
    EmptyField(&'static str),
    /// A numeric field holds a negative value.
    NegativeField(&'static str),
    /// A numeric form field did not parse as its declared kind.
    NotANumber {
        field: &'static str,
        value: String,
    },
    /// `create` was handed a record that already carries a store id.
    IdAssigned(RecordId),
    /// `update` requires an assigned id and none was present.
    IdMissing,
    /// The addressed id is not a positive integer.
    IdInvalid(RecordId),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "required field `{field}` is empty"),
            Self::NegativeField(field) => write!(f, "field `{field}` must not be negative"),
            Self::NotANumber { field, value } => {
                write!(f, "field `{field}` value `{value}` is not a valid number")
            }
            Self::IdAssigned(id) => {
                write!(f, "record already has store id {id}; create expects none")
            }
            Self::IdMissing => write!(f, "record has no store id"),
            Self::IdInvalid(id) => write!(f, "id {id} is not a positive integer"),
        }
    }
}

impl Error for ValidationError {}
