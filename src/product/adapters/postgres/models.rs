//! Diesel row models for product persistence.

use super::schema::products;
use diesel::prelude::*;

/// Query result row for product records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductRow {
    /// Generated product identifier.
    pub id: i64,
    /// Product name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Unit price.
    pub price: f64,
    /// Units on hand.
    pub stock: i32,
    /// Category in canonical form.
    pub category: String,
}

/// Column values written on insert and full replace.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = products)]
pub struct ProductValues {
    /// Product name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Unit price.
    pub price: f64,
    /// Units on hand.
    pub stock: i32,
    /// Category in canonical form.
    pub category: String,
}
