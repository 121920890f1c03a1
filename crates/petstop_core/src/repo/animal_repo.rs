//! Animal repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the fixed CRUD statements over the `animais` table.
//! - Map rows to [`Animal`] records and records to bound parameters.
//!
//! # Invariants
//! - `create` inserts and fetches the generated key on the same
//!   connection, atomically with respect to concurrent inserts elsewhere.
//! - Row mapping is atomic: a row either yields a complete record or is
//!   rejected; single-row reads report the failure, listings skip the row.

use super::{
    bool_to_int, int_to_bool, require_assigned_id, require_positive_id, RepoResult,
};
use crate::db::ConnectionProvider;
use crate::model::animal::Animal;
use crate::model::{RecordId, ValidationError};
use log::warn;
use rusqlite::{params, Row};

const ANIMAL_SELECT_SQL: &str = "SELECT id, nome, especie, idade, vacinado FROM animais";

/// Repository interface for the animal catalog.
pub trait AnimalRepository {
    /// Inserts a transient record and returns the store-assigned id.
    fn create(&self, animal: &Animal) -> RepoResult<RecordId>;
    /// Returns the record with `id`, or `None` when no row matches.
    fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Animal>>;
    /// Returns all records ordered by name ascending.
    fn list_all(&self) -> RepoResult<Vec<Animal>>;
    /// Replaces every non-id field of the matched row wholesale.
    /// Returns `false` when no row matched the record's id.
    fn update(&self, animal: &Animal) -> RepoResult<bool>;
    /// Removes the row with `id`. Returns `false` when no row matched.
    fn delete(&self, id: RecordId) -> RepoResult<bool>;
}

/// SQLite-backed animal repository.
///
/// Holds a [`ConnectionProvider`] and acquires one exclusively-owned
/// connection per operation; the connection is dropped (released) on every
/// exit path.
pub struct SqliteAnimalRepository<P: ConnectionProvider> {
    provider: P,
}

impl<P: ConnectionProvider> SqliteAnimalRepository<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P: ConnectionProvider> AnimalRepository for SqliteAnimalRepository<P> {
    fn create(&self, animal: &Animal) -> RepoResult<RecordId> {
        if let Some(id) = animal.id {
            return Err(ValidationError::IdAssigned(id).into());
        }
        animal.validate()?;

        let conn = self.provider.acquire()?;
        conn.execute(
            "INSERT INTO animais (nome, especie, idade, vacinado)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                animal.name.as_str(),
                animal.species.as_str(),
                animal.age,
                bool_to_int(animal.vaccinated),
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Animal>> {
        let conn = self.provider.acquire()?;
        let mut stmt = conn.prepare(&format!("{ANIMAL_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_animal_row(row)?));
        }

        Ok(None)
    }

    fn list_all(&self) -> RepoResult<Vec<Animal>> {
        let conn = self.provider.acquire()?;
        let mut stmt = conn.prepare(&format!("{ANIMAL_SELECT_SQL} ORDER BY nome ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut animals = Vec::new();
        while let Some(row) = rows.next()? {
            match parse_animal_row(row) {
                Ok(animal) => animals.push(animal),
                Err(err) => {
                    warn!("event=row_skipped module=repo table=animais error={err}");
                }
            }
        }

        Ok(animals)
    }

    fn update(&self, animal: &Animal) -> RepoResult<bool> {
        let id = require_assigned_id(animal.id)?;
        animal.validate()?;

        let conn = self.provider.acquire()?;
        let changed = conn.execute(
            "UPDATE animais
             SET nome = ?1, especie = ?2, idade = ?3, vacinado = ?4
             WHERE id = ?5;",
            params![
                animal.name.as_str(),
                animal.species.as_str(),
                animal.age,
                bool_to_int(animal.vaccinated),
                id,
            ],
        )?;

        Ok(changed > 0)
    }

    fn delete(&self, id: RecordId) -> RepoResult<bool> {
        let id = require_positive_id(id)?;

        let conn = self.provider.acquire()?;
        let changed = conn.execute("DELETE FROM animais WHERE id = ?1;", [id])?;

        Ok(changed > 0)
    }
}

fn parse_animal_row(row: &Row<'_>) -> RepoResult<Animal> {
    let animal = Animal {
        id: Some(row.get("id")?),
        name: row.get("nome")?,
        species: row.get("especie")?,
        age: row.get("idade")?,
        vaccinated: int_to_bool(row.get("vacinado")?, "animais.vacinado")?,
    };
    animal.validate()?;
    Ok(animal)
}
