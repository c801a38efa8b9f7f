//! In-memory adapters for the task manager.

mod task;

pub use task::{InMemoryTaskRepository, sample_tasks};
