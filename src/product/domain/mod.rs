//! Domain model for the product catalog.
//!
//! Raw input is turned into a validated [`ProductDraft`] before any store is
//! touched. Stored [`Product`] values carry the identifier generated by the
//! store.

mod category;
mod error;
mod ids;
mod product;
mod values;

pub use category::ProductCategory;
pub use error::ProductDomainError;
pub use ids::ProductId;
pub use product::{Product, ProductDraft};
pub use values::{Price, ProductName, StockLevel};
