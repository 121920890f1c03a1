//! SQLite storage bootstrap, connection provisioning and schema migration.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the PetStop core.
//! - Hand repositories a per-operation connection factory.
//! - Apply schema migrations in deterministic order.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Repositories must not touch catalog data before migrations succeed.
//! - A connection is released (dropped) on every exit path of the
//!   operation that acquired it; release never fails.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;
mod provider;

pub use open::{open_db, open_db_in_memory};
pub use provider::{ConnectionProvider, SqliteConnectionProvider};

pub type DbResult<T> = Result<T, DbError>;

/// Failure to produce a usable, migrated connection.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
