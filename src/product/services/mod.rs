//! Application services for the product catalog.

mod catalog;

pub use catalog::{
    ProductCatalogService, ProductRequest, ProductServiceError, ProductServiceResult,
};
