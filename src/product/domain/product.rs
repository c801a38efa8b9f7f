//! Product entity and its validated, unsaved counterpart.

use super::{Price, ProductCategory, ProductDomainError, ProductId, ProductName, StockLevel};
use serde::{Deserialize, Serialize};

/// Validated product fields awaiting an identifier from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    name: ProductName,
    description: String,
    price: Price,
    stock: StockLevel,
    category: ProductCategory,
}

impl ProductDraft {
    /// Validates raw product fields.
    ///
    /// # Errors
    ///
    /// Returns the first [`ProductDomainError`] found, checking name, price,
    /// then stock.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        stock: i64,
        category: ProductCategory,
    ) -> Result<Self, ProductDomainError> {
        Ok(Self {
            name: ProductName::new(name)?,
            description: description.into(),
            price: Price::new(price)?,
            stock: StockLevel::new(stock)?,
            category,
        })
    }

    /// Assembles a draft from already validated parts.
    #[must_use]
    pub const fn from_parts(
        name: ProductName,
        description: String,
        price: Price,
        stock: StockLevel,
        category: ProductCategory,
    ) -> Self {
        Self {
            name,
            description,
            price,
            stock,
            category,
        }
    }

    /// Returns the product name.
    #[must_use]
    pub const fn name(&self) -> &ProductName {
        &self.name
    }

    /// Returns the free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the unit price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Returns the stock level.
    #[must_use]
    pub const fn stock(&self) -> StockLevel {
        self.stock
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> ProductCategory {
        self.category
    }

    /// Attaches the store-generated identifier.
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            category: self.category,
        }
    }
}

/// A stored catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: ProductName,
    description: String,
    price: Price,
    stock: StockLevel,
    category: ProductCategory,
}

impl Product {
    /// Returns the product identifier.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.id
    }

    /// Returns the product name.
    #[must_use]
    pub const fn name(&self) -> &ProductName {
        &self.name
    }

    /// Returns the free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the unit price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Returns the stock level.
    #[must_use]
    pub const fn stock(&self) -> StockLevel {
        self.stock
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> ProductCategory {
        self.category
    }

    /// Overwrites the stock level.
    pub const fn set_stock(&mut self, stock: StockLevel) {
        self.stock = stock;
    }
}
