//! Product repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the fixed CRUD statements over the `produtos` table.
//! - Map rows to [`Product`] records, converting the stored decimal text
//!   exactly.
//!
//! # Invariants
//! - `preco` round-trips through `rust_decimal::Decimal` with no binary
//!   float in between.
//! - Row mapping is atomic: single-row reads report failures, listings
//!   skip the broken row.

use super::{
    bool_to_int, int_to_bool, require_assigned_id, require_positive_id, RepoError, RepoResult,
};
use crate::db::ConnectionProvider;
use crate::model::product::Product;
use crate::model::{RecordId, ValidationError};
use log::warn;
use rusqlite::{params, Row};
use rust_decimal::Decimal;
use std::str::FromStr;

const PRODUCT_SELECT_SQL: &str = "SELECT id, nome, quantidade, preco, ativo FROM produtos";

/// Repository interface for the product catalog.
pub trait ProductRepository {
    /// Inserts a transient record and returns the store-assigned id.
    fn create(&self, product: &Product) -> RepoResult<RecordId>;
    /// Returns the record with `id`, or `None` when no row matches.
    fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Product>>;
    /// Returns all records ordered by name ascending.
    fn list_all(&self) -> RepoResult<Vec<Product>>;
    /// Replaces every non-id field of the matched row wholesale.
    /// Returns `false` when no row matched the record's id.
    fn update(&self, product: &Product) -> RepoResult<bool>;
    /// Removes the row with `id`. Returns `false` when no row matched.
    fn delete(&self, id: RecordId) -> RepoResult<bool>;
}

/// SQLite-backed product repository.
pub struct SqliteProductRepository<P: ConnectionProvider> {
    provider: P,
}

impl<P: ConnectionProvider> SqliteProductRepository<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P: ConnectionProvider> ProductRepository for SqliteProductRepository<P> {
    fn create(&self, product: &Product) -> RepoResult<RecordId> {
        if let Some(id) = product.id {
            return Err(ValidationError::IdAssigned(id).into());
        }
        product.validate()?;

        let conn = self.provider.acquire()?;
        conn.execute(
            "INSERT INTO produtos (nome, quantidade, preco, ativo)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                product.name.as_str(),
                product.quantity,
                product.price.to_string(),
                bool_to_int(product.active),
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Product>> {
        let conn = self.provider.acquire()?;
        let mut stmt = conn.prepare(&format!("{PRODUCT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_product_row(row)?));
        }

        Ok(None)
    }

    fn list_all(&self) -> RepoResult<Vec<Product>> {
        let conn = self.provider.acquire()?;
        let mut stmt = conn.prepare(&format!("{PRODUCT_SELECT_SQL} ORDER BY nome ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut products = Vec::new();
        while let Some(row) = rows.next()? {
            match parse_product_row(row) {
                Ok(product) => products.push(product),
                Err(err) => {
                    warn!("event=row_skipped module=repo table=produtos error={err}");
                }
            }
        }

        Ok(products)
    }

    fn update(&self, product: &Product) -> RepoResult<bool> {
        let id = require_assigned_id(product.id)?;
        product.validate()?;

        let conn = self.provider.acquire()?;
        let changed = conn.execute(
            "UPDATE produtos
             SET nome = ?1, quantidade = ?2, preco = ?3, ativo = ?4
             WHERE id = ?5;",
            params![
                product.name.as_str(),
                product.quantity,
                product.price.to_string(),
                bool_to_int(product.active),
                id,
            ],
        )?;

        Ok(changed > 0)
    }

    fn delete(&self, id: RecordId) -> RepoResult<bool> {
        let id = require_positive_id(id)?;

        let conn = self.provider.acquire()?;
        let changed = conn.execute("DELETE FROM produtos WHERE id = ?1;", [id])?;

        Ok(changed > 0)
    }
}

fn parse_product_row(row: &Row<'_>) -> RepoResult<Product> {
    let price_text: String = row.get("preco")?;
    let price = Decimal::from_str(&price_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid decimal value `{price_text}` in produtos.preco"
        ))
    })?;

    let product = Product {
        id: Some(row.get("id")?),
        name: row.get("nome")?,
        quantity: row.get("quantidade")?,
        price,
        active: int_to_bool(row.get("ativo")?, "produtos.ativo")?,
    };
    product.validate()?;
    Ok(product)
}
