//! In-memory product repository for tests and database-less runs.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::product::{
    domain::{Product, ProductCategory, ProductDraft, ProductId, StockLevel},
    ports::{ProductRepository, ProductRepositoryError, ProductRepositoryResult},
};

/// Thread-safe in-memory product repository.
///
/// Identifiers are generated from a counter starting at 1, mirroring a
/// database identity column.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    state: Arc<RwLock<InMemoryProductState>>,
}

#[derive(Debug, Default)]
struct InMemoryProductState {
    products: BTreeMap<ProductId, Product>,
    last_id: i64,
}

impl InMemoryProductRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> ProductRepositoryResult<RwLockReadGuard<'_, InMemoryProductState>> {
        self.state.read().map_err(|err| {
            ProductRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> ProductRepositoryResult<RwLockWriteGuard<'_, InMemoryProductState>> {
        self.state.write().map_err(|err| {
            ProductRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, draft: &ProductDraft) -> ProductRepositoryResult<Product> {
        let mut state = self.write()?;
        let next = state.last_id.checked_add(1).ok_or_else(|| {
            ProductRepositoryError::persistence(std::io::Error::other(
                "product identifier space exhausted",
            ))
        })?;
        let id = ProductId::new(next).map_err(ProductRepositoryError::persistence)?;
        state.last_id = next;

        let product = draft.clone().into_product(id);
        state.products.insert(id, product.clone());
        Ok(product)
    }

    async fn replace(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> ProductRepositoryResult<Product> {
        let mut state = self.write()?;
        let slot = state
            .products
            .get_mut(&id)
            .ok_or(ProductRepositoryError::NotFound(id))?;
        *slot = draft.clone().into_product(id);
        Ok(slot.clone())
    }

    async fn update_stock(
        &self,
        id: ProductId,
        stock: StockLevel,
    ) -> ProductRepositoryResult<Product> {
        let mut state = self.write()?;
        let slot = state
            .products
            .get_mut(&id)
            .ok_or(ProductRepositoryError::NotFound(id))?;
        slot.set_stock(stock);
        Ok(slot.clone())
    }

    async fn delete(&self, id: ProductId) -> ProductRepositoryResult<()> {
        let mut state = self.write()?;
        state
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or(ProductRepositoryError::NotFound(id))
    }

    async fn find_by_id(&self, id: ProductId) -> ProductRepositoryResult<Option<Product>> {
        let state = self.read()?;
        Ok(state.products.get(&id).cloned())
    }

    async fn find_all(&self) -> ProductRepositoryResult<Vec<Product>> {
        let state = self.read()?;
        Ok(state.products.values().cloned().collect())
    }

    async fn find_by_category(
        &self,
        category: ProductCategory,
    ) -> ProductRepositoryResult<Vec<Product>> {
        let state = self.read()?;
        Ok(state
            .products
            .values()
            .filter(|product| product.category() == category)
            .cloned()
            .collect())
    }
}
