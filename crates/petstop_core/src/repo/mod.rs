//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contracts for both catalogs.
//! - Isolate SQLite statements and row mapping from editor orchestration.
//!
//! # Invariants
//! - Write paths must call the record's `validate()` before SQL mutations.
//! - Each operation acquires exactly one connection and releases it on
//!   every exit path; no connection outlives its operation.
//! - "Zero rows matched" is data (`Ok(false)` / `Ok(None)`), never an
//!   error; store and connection failures are tagged errors.

use crate::db::DbError;
use crate::model::{RecordId, ValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod animal_repo;
pub mod product_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Failure of one repository operation.
#[derive(Debug)]
pub enum RepoError {
    /// Caller-supplied data violated a precondition; the store was never
    /// contacted.
    Validation(ValidationError),
    /// Acquiring a store connection failed; the operation was aborted
    /// before any work.
    Connection(DbError),
    /// A statement failed to execute; stored record state is unchanged.
    Store(rusqlite::Error),
    /// A persisted row could not be mapped to a record.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Connection(err) => write!(f, "store unreachable: {err}"),
            Self::Store(err) => write!(f, "store operation failed: {err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Connection(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Connection(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Store(value)
    }
}

/// Checks the id precondition for `update`: present and positive.
fn require_assigned_id(id: Option<RecordId>) -> Result<RecordId, ValidationError> {
    match id {
        None => Err(ValidationError::IdMissing),
        Some(value) if value <= 0 => Err(ValidationError::IdInvalid(value)),
        Some(value) => Ok(value),
    }
}

/// Checks the id precondition for `delete` and lookups by caller input.
fn require_positive_id(id: RecordId) -> Result<RecordId, ValidationError> {
    if id <= 0 {
        return Err(ValidationError::IdInvalid(id));
    }
    Ok(id)
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

/// Strict boolean column mapping; anything but 0/1 is invalid data.
fn int_to_bool(value: i64, column: &str) -> RepoResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid boolean value `{other}` in {column}"
        ))),
    }
}
