//! Product catalog.
//!
//! Products are validated in the domain layer, persisted through the
//! [`ports::ProductRepository`] port (`PostgreSQL` or in-memory), and exposed
//! over HTTP by [`http::router`].
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - HTTP transport in [`http`]

pub mod adapters;
pub mod domain;
pub mod http;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
