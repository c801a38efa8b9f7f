//! Step definitions for task capacity scenarios.

mod given;
mod then;
mod when;
pub mod world;
