//! Shared test helpers for `PostgreSQL` integration tests.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, TestCustomizer};
use eyre::WrapErr;
use std::sync::Mutex;
use stockroom::product::{
    adapters::postgres::{PostgresProductRepository, SCHEMA_SQL},
    domain::{ProductCategory, ProductDraft},
};

/// Environment variable holding the test database URL.
pub const DATABASE_URL_ENV: &str = "STOCKROOM_TEST_DATABASE_URL";

static SCHEMA_LOCK: Mutex<()> = Mutex::new(());

/// Builds a repository whose single connection runs inside a test
/// transaction.
///
/// # Errors
///
/// Returns an error if `STOCKROOM_TEST_DATABASE_URL` is unset, the database
/// is unreachable, or the schema cannot be applied.
pub fn test_repository() -> eyre::Result<PostgresProductRepository> {
    let url = std::env::var(DATABASE_URL_ENV)
        .wrap_err_with(|| format!("{DATABASE_URL_ENV} must point at a test database"))?;

    {
        let _guard = SCHEMA_LOCK
            .lock()
            .map_err(|err| eyre::eyre!("schema lock poisoned: {err}"))?;
        let mut connection =
            PgConnection::establish(&url).wrap_err("connect to test database")?;
        connection
            .batch_execute(SCHEMA_SQL)
            .wrap_err("apply products schema")?;
    }

    let pool = Pool::builder()
        .max_size(1)
        .connection_customizer(Box::new(TestCustomizer))
        .build(ConnectionManager::<PgConnection>::new(url))
        .wrap_err("build test pool")?;
    Ok(PostgresProductRepository::new(pool))
}

/// Builds a valid draft for tests.
///
/// # Errors
///
/// Returns an error if the draft fails validation.
pub fn draft(name: &str, stock: i64, category: ProductCategory) -> eyre::Result<ProductDraft> {
    Ok(ProductDraft::new(name, "from postgres tests", 2.5, stock, category)?)
}
