//! `PostgreSQL` repository implementation for the product catalog.

use super::{
    models::{ProductRow, ProductValues},
    schema::products,
};
use crate::product::{
    domain::{
        Price, Product, ProductCategory, ProductDraft, ProductId, ProductName, StockLevel,
    },
    ports::{ProductRepository, ProductRepositoryError, ProductRepositoryResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by product adapters.
pub type ProductPgPool = Pool<ConnectionManager<PgConnection>>;

/// SQL creating the `products` table when it does not exist yet.
pub const SCHEMA_SQL: &str =
    include_str!("../../../../migrations/2026-03-02-000000_create_products/up.sql");

/// `PostgreSQL`-backed product repository.
#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pool: ProductPgPool,
}

impl PostgresProductRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ProductPgPool) -> Self {
        Self { pool }
    }

    /// Creates the `products` table if it is missing.
    ///
    /// # Errors
    ///
    /// Returns [`ProductRepositoryError::Persistence`] when the schema cannot
    /// be applied.
    pub async fn ensure_schema(&self) -> ProductRepositoryResult<()> {
        self.run_blocking(|connection| {
            connection
                .batch_execute(SCHEMA_SQL)
                .map_err(ProductRepositoryError::persistence)
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> ProductRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ProductRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ProductRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ProductRepositoryError::persistence)?
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn insert(&self, draft: &ProductDraft) -> ProductRepositoryResult<Product> {
        let values = to_values(draft);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(products::table)
                .values(&values)
                .returning(ProductRow::as_returning())
                .get_result::<ProductRow>(connection)
                .map_err(ProductRepositoryError::persistence)?;
            row_to_product(row)
        })
        .await
    }

    async fn replace(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> ProductRepositoryResult<Product> {
        let values = to_values(draft);
        self.run_blocking(move |connection| {
            let row = diesel::update(products::table.find(id.value()))
                .set(&values)
                .returning(ProductRow::as_returning())
                .get_result::<ProductRow>(connection)
                .optional()
                .map_err(ProductRepositoryError::persistence)?
                .ok_or(ProductRepositoryError::NotFound(id))?;
            row_to_product(row)
        })
        .await
    }

    async fn update_stock(
        &self,
        id: ProductId,
        stock: StockLevel,
    ) -> ProductRepositoryResult<Product> {
        self.run_blocking(move |connection| {
            let row = diesel::update(products::table.find(id.value()))
                .set(products::stock.eq(stock.value()))
                .returning(ProductRow::as_returning())
                .get_result::<ProductRow>(connection)
                .optional()
                .map_err(ProductRepositoryError::persistence)?
                .ok_or(ProductRepositoryError::NotFound(id))?;
            row_to_product(row)
        })
        .await
    }

    async fn delete(&self, id: ProductId) -> ProductRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(products::table.find(id.value()))
                .execute(connection)
                .map_err(ProductRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(ProductRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: ProductId) -> ProductRepositoryResult<Option<Product>> {
        self.run_blocking(move |connection| {
            let row = products::table
                .find(id.value())
                .select(ProductRow::as_select())
                .first::<ProductRow>(connection)
                .optional()
                .map_err(ProductRepositoryError::persistence)?;
            row.map(row_to_product).transpose()
        })
        .await
    }

    async fn find_all(&self) -> ProductRepositoryResult<Vec<Product>> {
        self.run_blocking(|connection| {
            let rows = products::table
                .order(products::id.asc())
                .select(ProductRow::as_select())
                .load::<ProductRow>(connection)
                .map_err(ProductRepositoryError::persistence)?;
            rows.into_iter().map(row_to_product).collect()
        })
        .await
    }

    async fn find_by_category(
        &self,
        category: ProductCategory,
    ) -> ProductRepositoryResult<Vec<Product>> {
        self.run_blocking(move |connection| {
            let rows = products::table
                .filter(products::category.eq(category.as_str()))
                .order(products::id.asc())
                .select(ProductRow::as_select())
                .load::<ProductRow>(connection)
                .map_err(ProductRepositoryError::persistence)?;
            rows.into_iter().map(row_to_product).collect()
        })
        .await
    }
}

fn to_values(draft: &ProductDraft) -> ProductValues {
    ProductValues {
        name: draft.name().as_str().to_owned(),
        description: draft.description().to_owned(),
        price: draft.price().value(),
        stock: draft.stock().value(),
        category: draft.category().as_str().to_owned(),
    }
}

fn row_to_product(row: ProductRow) -> ProductRepositoryResult<Product> {
    let ProductRow {
        id: raw_id,
        name,
        description,
        price,
        stock,
        category,
    } = row;

    let id = ProductId::new(raw_id).map_err(ProductRepositoryError::persistence)?;
    let draft = ProductDraft::from_parts(
        ProductName::new(name).map_err(ProductRepositoryError::persistence)?,
        description,
        Price::new(price).map_err(ProductRepositoryError::persistence)?,
        StockLevel::new(i64::from(stock)).map_err(ProductRepositoryError::persistence)?,
        ProductCategory::try_from(category.as_str())
            .map_err(ProductRepositoryError::persistence)?,
    );
    Ok(draft.into_product(id))
}
