//! Request and response bodies for the product API.

use crate::product::{
    domain::{Price, Product, ProductCategory, ProductDomainError, ProductName, StockLevel},
    services::ProductRequest,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Field-level validation failures, rendered as `field: message` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .0.join(", "))]
pub struct FieldViolations(pub Vec<String>);

/// Body of `POST /api/products` and `PUT /api/products/{id}`.
///
/// Every field is optional at the serde level so that missing values are
/// reported alongside other violations instead of as a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    /// Product name.
    pub name: Option<String>,
    /// Free-text description; defaults to empty.
    pub description: Option<String>,
    /// Unit price.
    pub price: Option<f64>,
    /// Units on hand.
    pub stock: Option<i64>,
    /// Category name, for example `ELECTRONICS`.
    pub category: Option<String>,
}

impl ProductPayload {
    /// Validates presence and ranges of every field.
    ///
    /// # Errors
    ///
    /// Returns [`FieldViolations`] listing every problem found.
    pub fn into_request(self) -> Result<ProductRequest, FieldViolations> {
        let mut problems = Vec::new();
        let checked_name = check(&mut problems, "name", self.name, |raw| {
            ProductName::new(raw.as_str()).map(drop)
        });
        let checked_price = check(&mut problems, "price", self.price, |raw| {
            Price::new(*raw).map(drop)
        });
        let checked_stock = check(&mut problems, "stock", self.stock, |raw| {
            StockLevel::new(*raw).map(drop)
        });
        let checked_category = match self.category.as_deref().map(ProductCategory::try_from) {
            None => {
                problems.push(required("category"));
                None
            }
            Some(Ok(parsed)) => Some(parsed),
            Some(Err(err)) => {
                problems.push(err.to_string());
                None
            }
        };

        match (checked_name, checked_price, checked_stock, checked_category) {
            (Some(name), Some(price), Some(stock), Some(category)) if problems.is_empty() => {
                Ok(ProductRequest::new(name, price, stock, category)
                    .with_description(self.description.unwrap_or_default()))
            }
            _ => Err(FieldViolations(problems)),
        }
    }
}

/// Body of `PATCH /api/products/{id}/stock`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockPayload {
    /// Replacement stock level.
    pub stock: Option<i64>,
}

impl StockPayload {
    /// Validates the replacement stock level.
    ///
    /// # Errors
    ///
    /// Returns [`FieldViolations`] when the value is missing or negative.
    pub fn into_stock(self) -> Result<i64, FieldViolations> {
        let mut problems = Vec::new();
        let checked = check(&mut problems, "stock", self.stock, |raw| {
            StockLevel::new(*raw).map(drop)
        });
        checked.ok_or(FieldViolations(problems))
    }
}

/// Product representation returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    /// Generated identifier.
    pub id: i64,
    /// Product name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Unit price.
    pub price: f64,
    /// Units on hand.
    pub stock: i32,
    /// Category.
    pub category: ProductCategory,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().value(),
            name: product.name().as_str().to_owned(),
            description: product.description().to_owned(),
            price: product.price().value(),
            stock: product.stock().value(),
            category: product.category(),
        }
    }
}

fn required(field: &str) -> String {
    format!("{field}: is required")
}

fn check<T>(
    problems: &mut Vec<String>,
    field: &str,
    value: Option<T>,
    validate: impl FnOnce(&T) -> Result<(), ProductDomainError>,
) -> Option<T> {
    let Some(inner) = value else {
        problems.push(required(field));
        return None;
    };
    match validate(&inner) {
        Ok(()) => Some(inner),
        Err(err) => {
            problems.push(err.to_string());
            None
        }
    }
}
