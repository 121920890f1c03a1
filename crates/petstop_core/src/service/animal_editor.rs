//! Animal record-editing state machine.
//!
//! # Responsibility
//! - Track which animal, if any, is selected for editing.
//! - Validate form input and delegate persistence to the repository.
//!
//! # Invariants
//! - `Idle` (no selection) is both the initial state and the state after
//!   clear, successful update and successful delete; the machine cycles
//!   for the life of the session.
//! - Failure paths leave the selection untouched.

use super::{parse_integer, parse_record_id, required_text, EditOutcome};
use crate::model::animal::Animal;
use crate::model::{RecordId, ValidationError};
use crate::repo::animal_repo::AnimalRepository;
use crate::repo::RepoError;

/// Raw widget values of the animal entry form.
///
/// Numeric fields arrive as text exactly as typed; parsing them is part of
/// validation, not the view's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimalForm {
    /// Store id as displayed; blank until a row is selected.
    pub id: String,
    pub name: String,
    pub species: String,
    pub age: String,
    pub vaccinated: bool,
}

impl AnimalForm {
    /// Populates a form verbatim from a listing record.
    pub fn from_record(animal: &Animal) -> Self {
        Self {
            id: animal.id.map(|id| id.to_string()).unwrap_or_default(),
            name: animal.name.clone(),
            species: animal.species.clone(),
            age: animal.age.to_string(),
            vaccinated: animal.vaccinated,
        }
    }
}

/// Edit-session state machine for the animal catalog.
///
/// Generic over the repository so tests can substitute a counting double.
pub struct AnimalEditor<R: AnimalRepository> {
    repo: R,
    selection: Option<Animal>,
}

impl<R: AnimalRepository> AnimalEditor<R> {
    /// Creates an editor in the `Idle` state.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            selection: None,
        }
    }

    /// The repository this editor persists through. The view shell uses it
    /// to re-query listings when an outcome requests a refresh.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// The record currently selected for editing, if any.
    pub fn selection(&self) -> Option<&Animal> {
        self.selection.as_ref()
    }

    /// Selects a listing record for editing and returns the populated form.
    pub fn select(&mut self, record: Animal) -> AnimalForm {
        let form = AnimalForm::from_record(&record);
        self.selection = Some(record);
        form
    }

    /// Discards the selection and any pending form input.
    pub fn clear(&mut self) {
        self.selection = None;
    }

    /// Validates the form and persists a new record.
    ///
    /// The id field is ignored: a new record never carries one. On store
    /// success the editor returns to `Idle`.
    pub fn submit_create(&mut self, form: &AnimalForm) -> EditOutcome {
        let animal = match parse_animal_form(form) {
            Ok(animal) => animal,
            Err(err) => return EditOutcome::Invalid(err),
        };

        match self.repo.create(&animal) {
            Ok(id) => {
                self.selection = None;
                EditOutcome::Created { id }
            }
            Err(RepoError::Validation(err)) => EditOutcome::Invalid(err),
            Err(err) => EditOutcome::Failed(err),
        }
    }

    /// Validates the form and replaces the selected record wholesale.
    ///
    /// Only valid from the `Selected` state and with the form id present.
    pub fn submit_update(&mut self, form: &AnimalForm) -> EditOutcome {
        if self.selection.is_none() {
            return EditOutcome::NoSelection;
        }

        let id = match parse_record_id(&form.id) {
            Ok(id) => id,
            Err(err) => return EditOutcome::Invalid(err),
        };
        let mut animal = match parse_animal_form(form) {
            Ok(animal) => animal,
            Err(err) => return EditOutcome::Invalid(err),
        };
        animal.id = Some(id);

        match self.repo.update(&animal) {
            Ok(true) => {
                self.selection = None;
                EditOutcome::Updated
            }
            Ok(false) => EditOutcome::NotFound,
            Err(RepoError::Validation(err)) => EditOutcome::Invalid(err),
            Err(err) => EditOutcome::Failed(err),
        }
    }

    /// Removes the addressed record once the view's yes/no gate confirms.
    pub fn submit_delete(&mut self, id: RecordId, confirmed: bool) -> EditOutcome {
        if !confirmed {
            return EditOutcome::NotConfirmed;
        }
        if id <= 0 {
            return EditOutcome::Invalid(ValidationError::IdInvalid(id));
        }

        match self.repo.delete(id) {
            Ok(true) => {
                self.selection = None;
                EditOutcome::Deleted
            }
            Ok(false) => EditOutcome::NotFound,
            Err(RepoError::Validation(err)) => EditOutcome::Invalid(err),
            Err(err) => EditOutcome::Failed(err),
        }
    }
}

fn parse_animal_form(form: &AnimalForm) -> Result<Animal, ValidationError> {
    let name = required_text(&form.name, "name")?;
    let species = required_text(&form.species, "species")?;
    let age = parse_integer(&form.age, "age")?;

    let animal = Animal::new(name, species, age, form.vaccinated);
    animal.validate()?;
    Ok(animal)
}
