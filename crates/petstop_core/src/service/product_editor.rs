//! Product record-editing state machine.
//!
//! # Responsibility
//! - Track which product, if any, is selected for editing.
//! - Validate form input, including exact decimal price parsing, and
//!   delegate persistence to the repository.
//!
//! # Invariants
//! - Same state cycle as the animal editor: `Idle` initially, after clear
//!   and after successful update/delete.
//! - Price text parses to `Decimal` or is rejected; no float fallback.

use super::{parse_integer, parse_record_id, required_text, EditOutcome};
use crate::model::product::Product;
use crate::model::{RecordId, ValidationError};
use crate::repo::product_repo::ProductRepository;
use crate::repo::RepoError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Raw widget values of the product entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    /// Store id as displayed; blank until a row is selected.
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub price: String,
    pub active: bool,
}

impl ProductForm {
    /// Populates a form verbatim from a listing record.
    pub fn from_record(product: &Product) -> Self {
        Self {
            id: product.id.map(|id| id.to_string()).unwrap_or_default(),
            name: product.name.clone(),
            quantity: product.quantity.to_string(),
            price: product.price.to_string(),
            active: product.active,
        }
    }
}

/// Edit-session state machine for the product catalog.
pub struct ProductEditor<R: ProductRepository> {
    repo: R,
    selection: Option<Product>,
}

impl<R: ProductRepository> ProductEditor<R> {
    /// Creates an editor in the `Idle` state.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            selection: None,
        }
    }

    /// The repository this editor persists through.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// The record currently selected for editing, if any.
    pub fn selection(&self) -> Option<&Product> {
        self.selection.as_ref()
    }

    /// Selects a listing record for editing and returns the populated form.
    pub fn select(&mut self, record: Product) -> ProductForm {
        let form = ProductForm::from_record(&record);
        self.selection = Some(record);
        form
    }

    /// Discards the selection and any pending form input.
    pub fn clear(&mut self) {
        self.selection = None;
    }

    /// Validates the form and persists a new record.
    pub fn submit_create(&mut self, form: &ProductForm) -> EditOutcome {
        let product = match parse_product_form(form) {
            Ok(product) => product,
            Err(err) => return EditOutcome::Invalid(err),
        };

        match self.repo.create(&product) {
            Ok(id) => {
                self.selection = None;
                EditOutcome::Created { id }
            }
            Err(RepoError::Validation(err)) => EditOutcome::Invalid(err),
            Err(err) => EditOutcome::Failed(err),
        }
    }

    /// Validates the form and replaces the selected record wholesale.
    pub fn submit_update(&mut self, form: &ProductForm) -> EditOutcome {
        if self.selection.is_none() {
            return EditOutcome::NoSelection;
        }

        let id = match parse_record_id(&form.id) {
            Ok(id) => id,
            Err(err) => return EditOutcome::Invalid(err),
        };
        let mut product = match parse_product_form(form) {
            Ok(product) => product,
            Err(err) => return EditOutcome::Invalid(err),
        };
        product.id = Some(id);

        match self.repo.update(&product) {
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

fn parse_product_form(form: &ProductForm) -> Result<Product, ValidationError> {
    let name = required_text(&form.name, "name")?;
    let quantity = parse_integer(&form.quantity, "quantity")?;
    let price = parse_price(&form.price)?;

    let product = Product::new(name, quantity, price, form.active);
    product.validate()?;
    Ok(product)
}

fn parse_price(value: &str) -> Result<Decimal, ValidationError> {
    let trimmed = value.trim();
    Decimal::from_str(trimmed).map_err(|_| ValidationError::NotANumber {
        field: "price",
        value: trimmed.to_string(),
    })
}
