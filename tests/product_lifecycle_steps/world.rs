//! Shared world state for product lifecycle BDD scenarios.

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest::fixture;
use stockroom::product::{
    adapters::memory::InMemoryProductRepository,
    http::{AppState, router},
    services::ProductCatalogService,
};
use tower::ServiceExt;

const BODY_LIMIT: usize = 1024 * 1024;

/// Scenario world for product API behaviour tests.
pub struct ProductApiWorld {
    pub app: Router,
    pub last_status: Option<StatusCode>,
    pub last_body: Option<serde_json::Value>,
    pub created_id: Option<i64>,
}

impl ProductApiWorld {
    /// Creates a world backed by an empty in-memory catalog.
    #[must_use]
    pub fn new() -> Self {
        let service = ProductCatalogService::new(Arc::new(InMemoryProductRepository::new()));
        Self {
            app: router(AppState::new(service, Arc::new(DefaultClock))),
            last_status: None,
            last_body: None,
            created_id: None,
        }
    }

    /// Sends a request and records the status and JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or the body is not
    /// valid JSON.
    pub fn send(
        &mut self,
        method: &str,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> Result<(), eyre::Report> {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .wrap_err("build request")?;

        let app = self.app.clone();
        let (status, bytes) = run_async(async move {
            let response = app.oneshot(request).await?;
            let status = response.status();
            let bytes = to_bytes(response.into_body(), BODY_LIMIT).await?;
            Ok::<_, eyre::Report>((status, bytes))
        })?;

        self.last_status = Some(status);
        self.last_body = if bytes.is_empty() {
            None
        } else {
            Some(serde_json::from_slice(&bytes).wrap_err("decode response body")?)
        };
        Ok(())
    }

    /// Returns the id captured from the creation response.
    ///
    /// # Errors
    ///
    /// Returns an error if no product has been created yet.
    pub fn created_id(&self) -> Result<i64, eyre::Report> {
        self.created_id
            .ok_or_else(|| eyre::eyre!("no product has been created in this scenario"))
    }

    /// Returns the last recorded JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the last response had no body.
    pub fn body(&self) -> Result<&serde_json::Value, eyre::Report> {
        self.last_body
            .as_ref()
            .ok_or_else(|| eyre::eyre!("last response had no body"))
    }
}

impl Default for ProductApiWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ProductApiWorld {
    ProductApiWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
