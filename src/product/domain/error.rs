//! Error types for product validation and parsing.

use thiserror::Error;

/// Errors returned while constructing product values.
///
/// Messages are prefixed with the offending field so they can be shown to
/// API clients as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductDomainError {
    /// The product name is empty after trimming.
    #[error("name: must not be blank")]
    EmptyName,

    /// The product name exceeds the storage limit.
    #[error("name: must be at most {max} characters")]
    NameTooLong {
        /// Maximum accepted length.
        max: usize,
    },

    /// The price is negative.
    #[error("price: must not be negative")]
    NegativePrice,

    /// The price is NaN or infinite.
    #[error("price: must be a finite number")]
    NonFinitePrice,

    /// The stock level is negative.
    #[error("stock: must not be negative")]
    NegativeStock(i64),

    /// The stock level does not fit the storage column.
    #[error("stock: must be at most {max}")]
    StockTooLarge {
        /// Rejected value.
        value: i64,
        /// Maximum accepted value.
        max: i64,
    },

    /// The category is not part of the fixed enumeration.
    #[error("category: unknown category '{0}'")]
    UnknownCategory(String),

    /// The product identifier is not a positive integer.
    #[error("id: must be a positive integer, got {0}")]
    InvalidId(i64),
}
