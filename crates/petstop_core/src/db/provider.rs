//! Per-operation connection provisioning for repositories.
//!
//! # Responsibility
//! - Define how repositories obtain a store connection for one operation.
//! - Keep connection lifetime scoped to a single logical operation.
//!
//! # Invariants
//! - `acquire` returns a fully bootstrapped (migrated) connection or an
//!   error; it never retries.
//! - Release is the connection's `Drop` impl: idempotent, infallible, and
//!   guaranteed to run on every exit path of the acquiring scope.

use super::{open_db, DbResult};
use rusqlite::Connection;
use std::path::PathBuf;

/// Source of exclusively-owned, single-operation store connections.
///
/// Repositories hold a provider and call [`acquire`](Self::acquire) once
/// per operation. Connections are never pooled or shared across
/// operations.
pub trait ConnectionProvider {
    fn acquire(&self) -> DbResult<Connection>;
}

/// File-backed provider that opens a fresh connection per operation.
#[derive(Debug, Clone)]
pub struct SqliteConnectionProvider {
    path: PathBuf,
}

impl SqliteConnectionProvider {
    /// Creates a provider for the database file at `path`.
    ///
    /// The file is created and migrated on first acquire.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the database file path this provider opens.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl ConnectionProvider for SqliteConnectionProvider {
    fn acquire(&self) -> DbResult<Connection> {
        open_db(&self.path)
    }
}
