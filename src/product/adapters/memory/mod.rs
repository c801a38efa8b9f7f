//! In-memory adapters for the product catalog.

mod product;

pub use product::InMemoryProductRepository;
