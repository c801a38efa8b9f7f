//! Adapter implementations for product ports.

pub mod memory;
pub mod postgres;
