//! Record-editing use-case services.
//!
//! # Responsibility
//! - Orchestrate form validation and repository calls per entity kind.
//! - Keep the view shell decoupled from storage and error details.
//!
//! # Invariants
//! - Validation runs before any store call; invalid input never reaches a
//!   repository.
//! - Editors never panic across the view boundary; every operation returns
//!   an [`EditOutcome`].
//! - Editor state is unchanged on every failure path, so the view can let
//!   the user correct and resubmit.

use crate::model::{RecordId, ValidationError};
use crate::repo::RepoError;

pub mod animal_editor;
pub mod product_editor;

/// Tagged result of one edit operation, handed back to the view shell.
#[derive(Debug)]
pub enum EditOutcome {
    /// A new record was persisted with the returned store id.
    Created { id: RecordId },
    /// The selected record was replaced wholesale.
    Updated,
    /// The addressed record was removed.
    Deleted,
    /// Zero rows matched the addressed id: the selection is stale, not a
    /// store fault.
    NotFound,
    /// An update was submitted with no record selected.
    NoSelection,
    /// The view's yes/no gate declined the removal.
    NotConfirmed,
    /// Form input violated a rule; the store was never contacted.
    Invalid(ValidationError),
    /// The repository reported a connection or statement failure.
    Failed(RepoError),
}

impl EditOutcome {
    /// Whether the view should re-query the listing after this outcome.
    pub fn refresh_listing(&self) -> bool {
        matches!(self, Self::Created { .. } | Self::Updated | Self::Deleted)
    }

    /// Human-readable surface text for dialogs and status bars.
    pub fn message(&self) -> String {
        match self {
            Self::Created { id } => format!("record saved with id {id}"),
            Self::Updated => "record updated".to_string(),
            Self::Deleted => "record removed".to_string(),
            Self::NotFound => "record not found; the listing may be stale".to_string(),
            Self::NoSelection => "no record selected".to_string(),
            Self::NotConfirmed => "removal cancelled".to_string(),
            Self::Invalid(err) => err.to_string(),
            Self::Failed(err) => err.to_string(),
        }
    }
}

/// Trims a required text field, rejecting whitespace-only input.
fn required_text(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

/// Parses an integer form field.
fn parse_integer(value: &str, field: &'static str) -> Result<i64, ValidationError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::NotANumber {
            field,
            value: value.trim().to_string(),
        })
}

/// Parses the id form field for update/delete submissions.
fn parse_record_id(value: &str) -> Result<RecordId, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::IdMissing);
    }
    let id = trimmed
        .parse::<RecordId>()
        .map_err(|_| ValidationError::NotANumber {
            field: "id",
            value: trimmed.to_string(),
        })?;
    if id <= 0 {
        return Err(ValidationError::IdInvalid(id));
    }
    Ok(id)
}
