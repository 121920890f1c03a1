//! Product catalog record.
//!
//! # Responsibility
//! - Define the record mapped to the `produtos` table.
//! - Enforce the product field rules before persistence.
//!
//! # Invariants
//! - `name` is non-empty after trimming.
//! - `quantity` and `price` are never negative.
//! - `price` is exact fixed-point; binary floats never enter the model.

use super::{RecordId, ValidationError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product in the shop catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned key; `None` until persisted.
    pub id: Option<RecordId>,
    pub name: String,
    /// Units in stock.
    pub quantity: i64,
    /// Unit price, exact fixed-point.
    pub price: Decimal,
    /// Whether the product is offered for sale.
    pub active: bool,
}

impl Product {
    /// Creates a transient record with no store id.
    pub fn new(name: impl Into<String>, quantity: i64, price: Decimal, active: bool) -> Self {
        Self {
            id: None,
            name: name.into(),
            quantity,
            price,
            active,
        }
    }

    /// Rehydrates a persisted record with its store id.
    pub fn with_id(
        id: RecordId,
        name: impl Into<String>,
        quantity: i64,
        price: Decimal,
        active: bool,
    ) -> Self {
        Self {
            id: Some(id),
            ..Self::new(name, quantity, price, active)
        }
    }

    /// Checks field rules, returning the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }
        if self.quantity < 0 {
            return Err(ValidationError::NegativeField("quantity"));
        }
        if self.price < Decimal::ZERO {
            return Err(ValidationError::NegativeField("price"));
        }
        Ok(())
    }
}
