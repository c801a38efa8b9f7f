//! Repository port for product persistence and lookup.

use crate::product::domain::{Product, ProductCategory, ProductDraft, ProductId, StockLevel};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for product repository operations.
pub type ProductRepositoryResult<T> = Result<T, ProductRepositoryError>;

/// Product persistence contract.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Stores a new product and returns it with its generated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProductRepositoryError::Persistence`] when the store rejects
    /// the insert.
    async fn insert(&self, draft: &ProductDraft) -> ProductRepositoryResult<Product>;

    /// Replaces every field of an existing product.
    ///
    /// # Errors
    ///
    /// Returns [`ProductRepositoryError::NotFound`] when the product does not
    /// exist.
    async fn replace(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> ProductRepositoryResult<Product>;

    /// Overwrites the stock level of an existing product.
    ///
    /// # Errors
    ///
    /// Returns [`ProductRepositoryError::NotFound`] when the product does not
    /// exist.
    async fn update_stock(
        &self,
        id: ProductId,
        stock: StockLevel,
    ) -> ProductRepositoryResult<Product>;

    /// Deletes a product.
    ///
    /// # Errors
    ///
    /// Returns [`ProductRepositoryError::NotFound`] when the product does not
    /// exist.
    async fn delete(&self, id: ProductId) -> ProductRepositoryResult<()>;

    /// Finds a product by identifier.
    ///
    /// Returns `None` when the product does not exist.
    async fn find_by_id(&self, id: ProductId) -> ProductRepositoryResult<Option<Product>>;

    /// Returns every product ordered by identifier.
    async fn find_all(&self) -> ProductRepositoryResult<Vec<Product>>;

    /// Returns products whose category equals `category`, ordered by
    /// identifier.
    async fn find_by_category(
        &self,
        category: ProductCategory,
    ) -> ProductRepositoryResult<Vec<Product>>;
}

/// Errors returned by product repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProductRepositoryError {
    /// The product was not found.
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProductRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
