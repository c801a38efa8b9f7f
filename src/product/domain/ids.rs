//! Identifier type for catalog products.

use super::ProductDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-generated product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64")]
pub struct ProductId(i64);

impl ProductId {
    /// Creates a validated product identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProductDomainError::InvalidId`] when the value is zero or
    /// negative.
    pub const fn new(value: i64) -> Result<Self, ProductDomainError> {
        if value <= 0 {
            return Err(ProductDomainError::InvalidId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for ProductId {
    type Error = ProductDomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
