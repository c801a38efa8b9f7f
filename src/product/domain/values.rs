//! Validated scalar values carried by products.

use super::ProductDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum name length, matching the `VARCHAR(255)` column.
const MAX_NAME_LENGTH: usize = 255;

/// Non-blank product name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct ProductName(String);

impl ProductName {
    /// Creates a validated product name.
    ///
    /// # Errors
    ///
    /// Returns [`ProductDomainError::EmptyName`] when the value is blank or
    /// [`ProductDomainError::NameTooLong`] when it exceeds 255 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ProductDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ProductDomainError::EmptyName);
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(ProductDomainError::NameTooLong {
                max: MAX_NAME_LENGTH,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProductName {
    type Error = ProductDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-negative, finite unit price.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64")]
pub struct Price(f64);

impl Price {
    /// Creates a validated price.
    ///
    /// # Errors
    ///
    /// Returns [`ProductDomainError::NonFinitePrice`] for NaN or infinite
    /// values and [`ProductDomainError::NegativePrice`] below zero.
    pub fn new(value: f64) -> Result<Self, ProductDomainError> {
        if !value.is_finite() {
            return Err(ProductDomainError::NonFinitePrice);
        }
        if value < 0.0 {
            return Err(ProductDomainError::NegativePrice);
        }
        Ok(Self(value))
    }

    /// Returns the underlying value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = ProductDomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Units on hand. Never negative and always fits an `INTEGER` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64")]
pub struct StockLevel(i32);

impl StockLevel {
    /// An empty shelf.
    pub const ZERO: Self = Self(0);

    /// Creates a validated stock level.
    ///
    /// # Errors
    ///
    /// Returns [`ProductDomainError::NegativeStock`] below zero and
    /// [`ProductDomainError::StockTooLarge`] above `i32::MAX`.
    pub fn new(value: i64) -> Result<Self, ProductDomainError> {
        if value < 0 {
            return Err(ProductDomainError::NegativeStock(value));
        }
        i32::try_from(value)
            .map(Self)
            .map_err(|_| ProductDomainError::StockTooLarge {
                value,
                max: i64::from(i32::MAX),
            })
    }

    /// Returns the underlying value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl TryFrom<i64> for StockLevel {
    type Error = ProductDomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for StockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
