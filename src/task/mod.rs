//! In-memory task manager.
//!
//! Tasks live in a bounded in-memory store. The service enforces the
//! configured task ceiling and exposes pending/completed projections. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Placeholder endpoints in [`http`]

pub mod adapters;
pub mod domain;
pub mod http;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
