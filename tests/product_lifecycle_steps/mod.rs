//! Step definitions for product lifecycle scenarios.

mod given;
mod then;
mod when;
pub mod world;
