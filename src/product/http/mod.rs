//! HTTP transport for the product catalog.
//!
//! Routes live under `/api/products`. Failures are reported as an
//! [`ErrorBody`] with a status matching the error kind: 400 for rejected
//! input, 404 for unknown products, 500 for anything else.

pub mod dto;
pub mod error;
mod handlers;

pub use dto::{FieldViolations, ProductPayload, ProductResponse, StockPayload};
pub use error::{ApiError, ErrorBody};

use crate::product::{ports::ProductRepository, services::ProductCatalogService};
use axum::{
    Router,
    routing::{get, patch},
};
use mockable::Clock;
use std::sync::Arc;

/// Shared dependencies for product handlers.
pub struct AppState<R, C>
where
    R: ProductRepository,
    C: Clock + Send + Sync,
{
    service: Arc<ProductCatalogService<R>>,
    clock: Arc<C>,
}

impl<R, C> AppState<R, C>
where
    R: ProductRepository,
    C: Clock + Send + Sync,
{
    /// Creates handler state from a catalog service and a clock used to
    /// timestamp error responses.
    #[must_use]
    pub fn new(service: ProductCatalogService<R>, clock: Arc<C>) -> Self {
        Self {
            service: Arc::new(service),
            clock,
        }
    }
}

impl<R, C> Clone for AppState<R, C>
where
    R: ProductRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            clock: Arc::clone(&self.clock),
        }
    }
}

/// Builds the product API router.
#[must_use]
pub fn router<R, C>(state: AppState<R, C>) -> Router
where
    R: ProductRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/api/products",
            get(handlers::list_products::<R, C>).post(handlers::create_product::<R, C>),
        )
        .route(
            "/api/products/{id}",
            get(handlers::get_product::<R, C>)
                .put(handlers::replace_product::<R, C>)
                .delete(handlers::delete_product::<R, C>),
        )
        .route(
            "/api/products/{id}/stock",
            patch(handlers::update_stock::<R, C>),
        )
        .route(
            "/api/products/category/{category}",
            get(handlers::list_by_category::<R, C>),
        )
        .with_state(state)
}
