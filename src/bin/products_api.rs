//! Serves the product inventory HTTP API.
//!
//! Usage:
//!
//! ```text
//! products_api [--bind 0.0.0.0:8080] [--database-url postgres://...]
//! ```
//!
//! Without a database URL the catalog lives in memory and is lost on exit.
//! With one, the `products` table is created if missing before serving.

use clap::Parser;
use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use mockable::DefaultClock;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use stockroom::config::{ConfigError, ProductsCliArgs, ProductsConfig};
use stockroom::product::{
    adapters::{memory::InMemoryProductRepository, postgres::PostgresProductRepository},
    http::{AppState, router},
    ports::{ProductRepository, ProductRepositoryError},
    services::ProductCatalogService,
};
use thiserror::Error;
use tokio::net::TcpListener;

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to build database pool: {0}")]
    Pool(#[from] PoolError),
    #[error("failed to prepare database schema: {0}")]
    Schema(#[from] ProductRepositoryError),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: io::Error },
    #[error("server terminated: {0}")]
    Serve(io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = ProductsCliArgs::parse();
    let loaded = ProductsConfig::load(&cli);

    let level = loaded
        .as_ref()
        .map_or("info", |config| config.log_level.as_str());
    init_tracing(level);

    match run(loaded).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "products API failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

async fn run(loaded: Result<ProductsConfig, ConfigError>) -> Result<(), StartupError> {
    let config = loaded?;

    if let Some(url) = config.database_url.as_deref() {
        tracing::info!(pool_size = config.pool_size, "using PostgreSQL product store");
        let pool = Pool::builder()
            .max_size(config.pool_size)
            .build(ConnectionManager::<PgConnection>::new(url))?;
        let repository = PostgresProductRepository::new(pool);
        repository.ensure_schema().await?;
        serve(Arc::new(repository), &config.bind_addr).await
    } else {
        tracing::info!("using in-memory product store");
        serve(Arc::new(InMemoryProductRepository::new()), &config.bind_addr).await
    }
}

async fn serve<R>(repository: Arc<R>, addr: &str) -> Result<(), StartupError>
where
    R: ProductRepository + 'static,
{
    let state = AppState::new(
        ProductCatalogService::new(repository),
        Arc::new(DefaultClock),
    );
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: addr.to_owned(),
            source,
        })?;
    if let Ok(bound) = listener.local_addr() {
        tracing::info!(addr = %bound, "products API listening");
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down products API");
}
