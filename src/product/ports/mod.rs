//! Port contracts for the product catalog.

pub mod repository;

pub use repository::{ProductRepository, ProductRepositoryError, ProductRepositoryResult};
