//! Fixed product category enumeration.

use super::ProductDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Catalog category a product belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCategory {
    /// Devices and gadgets.
    Electronics,
    /// Garments and accessories.
    Clothing,
    /// Groceries.
    Food,
    /// Furniture and household goods.
    Home,
    /// Sporting goods.
    Sports,
    /// Printed and digital books.
    Books,
}

impl ProductCategory {
    /// Every category, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Electronics,
        Self::Clothing,
        Self::Food,
        Self::Home,
        Self::Sports,
        Self::Books,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Electronics => "ELECTRONICS",
            Self::Clothing => "CLOTHING",
            Self::Food => "FOOD",
            Self::Home => "HOME",
            Self::Sports => "SPORTS",
            Self::Books => "BOOKS",
        }
    }
}

impl TryFrom<&str> for ProductCategory {
    type Error = ProductDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| ProductDomainError::UnknownCategory(value.to_owned()))
    }
}

impl FromStr for ProductCategory {
    type Err = ProductDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
