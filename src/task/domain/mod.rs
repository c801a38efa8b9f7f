//! Domain model for the task manager.
//!
//! Tasks carry a description, a priority and a completion flag. Identifiers
//! are assigned by the store, so the domain distinguishes unsaved
//! [`NewTask`] values from stored [`Task`] values.

mod error;
mod ids;
mod priority;
mod task;

pub use error::{ParseTaskPriorityError, TaskDomainError};
pub use ids::{TaskDescription, TaskId};
pub use priority::TaskPriority;
pub use task::{NewTask, Task};
