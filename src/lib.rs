//! Stockroom: a product inventory API and an in-memory task manager.
//!
//! The crate hosts two independent bounded contexts that share one ambient
//! stack for configuration, logging, and error handling.
//!
//! # Architecture
//!
//! Each context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//! - **Services**: Orchestration and business rules on top of the ports
//!
//! # Modules
//!
//! - [`product`]: Product catalog with validation and an HTTP API
//! - [`task`]: Bounded in-memory task store and its service
//! - [`console`]: Profile-specific banners and the task walkthrough
//! - [`config`]: Layered CLI, environment, and file configuration

pub mod config;
pub mod console;
pub mod product;
pub mod task;
