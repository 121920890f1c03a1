//! Core domain logic for PetStop catalog management.
//! This crate is the single source of truth for persistence and editing
//! invariants; view shells only call into it and render the results.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{ConnectionProvider, DbError, DbResult, SqliteConnectionProvider};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::animal::Animal;
pub use model::product::Product;
pub use model::{RecordId, ValidationError};
pub use repo::animal_repo::{AnimalRepository, SqliteAnimalRepository};
pub use repo::product_repo::{ProductRepository, SqliteProductRepository};
pub use repo::{RepoError, RepoResult};
pub use service::animal_editor::{AnimalEditor, AnimalForm};
pub use service::product_editor::{ProductEditor, ProductForm};
pub use service::EditOutcome;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
