//! Service layer for product creation, lookup, and maintenance.

use crate::product::{
    domain::{Product, ProductCategory, ProductDomainError, ProductDraft, ProductId, StockLevel},
    ports::{ProductRepository, ProductRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating or fully replacing a product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRequest {
    name: String,
    description: String,
    price: f64,
    stock: i64,
    category: ProductCategory,
}

impl ProductRequest {
    /// Creates a request with required product fields and an empty
    /// description.
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64, stock: i64, category: ProductCategory) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price,
            stock,
            category,
        }
    }

    /// Sets the product description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    fn into_draft(self) -> Result<ProductDraft, ProductDomainError> {
        ProductDraft::new(
            self.name,
            self.description,
            self.price,
            self.stock,
            self.category,
        )
    }
}

/// Service-level errors for catalog operations.
#[derive(Debug, Error)]
pub enum ProductServiceError {
    /// Input validation failed; the store was not touched.
    #[error(transparent)]
    Validation(#[from] ProductDomainError),
    /// The referenced product does not exist.
    #[error("product with id {0} not found")]
    NotFound(ProductId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(ProductRepositoryError),
}

impl From<ProductRepositoryError> for ProductServiceError {
    fn from(err: ProductRepositoryError) -> Self {
        match err {
            ProductRepositoryError::NotFound(id) => Self::NotFound(id),
            other @ ProductRepositoryError::Persistence(_) => Self::Repository(other),
        }
    }
}

/// Result type for catalog service operations.
pub type ProductServiceResult<T> = Result<T, ProductServiceError>;

/// Product catalog orchestration service.
#[derive(Clone)]
pub struct ProductCatalogService<R>
where
    R: ProductRepository,
{
    repository: Arc<R>,
}

impl<R> ProductCatalogService<R>
where
    R: ProductRepository,
{
    /// Creates a new catalog service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a product; the store generates its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProductServiceError::Validation`] for invalid fields or
    /// [`ProductServiceError::Repository`] when persistence fails.
    pub async fn create(&self, request: ProductRequest) -> ProductServiceResult<Product> {
        let draft = request.into_draft()?;
        let product = self.repository.insert(&draft).await?;
        tracing::info!(product_id = %product.id(), name = %product.name(), "product created");
        Ok(product)
    }

    /// Retrieves a product by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProductServiceError::NotFound`] when the product does not
    /// exist.
    pub async fn find_by_id(&self, id: ProductId) -> ProductServiceResult<Product> {
        tracing::debug!(product_id = %id, "looking up product");
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductServiceError::NotFound(id))
    }

    /// Lists every product.
    ///
    /// # Errors
    ///
    /// Returns [`ProductServiceError::Repository`] when persistence fails.
    pub async fn list_all(&self) -> ProductServiceResult<Vec<Product>> {
        tracing::debug!("listing products");
        Ok(self.repository.find_all().await?)
    }

    /// Lists products in exactly the given category.
    ///
    /// # Errors
    ///
    /// Returns [`ProductServiceError::Repository`] when persistence fails.
    pub async fn list_by_category(
        &self,
        category: ProductCategory,
    ) -> ProductServiceResult<Vec<Product>> {
        tracing::debug!(%category, "listing products by category");
        Ok(self.repository.find_by_category(category).await?)
    }

    /// Replaces every field of an existing product.
    ///
    /// # Errors
    ///
    /// Returns [`ProductServiceError::Validation`] for invalid fields and
    /// [`ProductServiceError::NotFound`] when the product does not exist.
    pub async fn update(
        &self,
        id: ProductId,
        request: ProductRequest,
    ) -> ProductServiceResult<Product> {
        let draft = request.into_draft()?;
        let product = self
            .repository
            .replace(id, &draft)
            .await
            .map_err(|err| log_miss(id, err))?;
        tracing::info!(product_id = %id, "product updated");
        Ok(product)
    }

    /// Replaces the stock level of an existing product.
    ///
    /// The new value overwrites the old one; it is not added to it.
    ///
    /// # Errors
    ///
    /// Returns [`ProductServiceError::Validation`] for a negative or
    /// oversized value and [`ProductServiceError::NotFound`] when the product
    /// does not exist.
    pub async fn update_stock(&self, id: ProductId, stock: i64) -> ProductServiceResult<Product> {
        let level = StockLevel::new(stock)?;
        let product = self
            .repository
            .update_stock(id, level)
            .await
            .map_err(|err| log_miss(id, err))?;
        tracing::info!(product_id = %id, stock = %level, "stock replaced");
        Ok(product)
    }

    /// Deletes a product.
    ///
    /// # Errors
    ///
    /// Returns [`ProductServiceError::NotFound`] when the product does not
    /// exist.
    pub async fn delete(&self, id: ProductId) -> ProductServiceResult<()> {
        self.repository
            .delete(id)
            .await
            .map_err(|err| log_miss(id, err))?;
        tracing::info!(product_id = %id, "product deleted");
        Ok(())
    }
}

fn log_miss(id: ProductId, err: ProductRepositoryError) -> ProductServiceError {
    let mapped = ProductServiceError::from(err);
    if matches!(mapped, ProductServiceError::NotFound(_)) {
        tracing::warn!(product_id = %id, "product not found");
    }
    mapped
}
