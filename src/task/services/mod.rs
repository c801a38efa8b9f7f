//! Application services for the task manager.

mod manager;

pub use manager::{
    TaskService, TaskServiceConfig, TaskServiceError, TaskServiceResult, TaskStatistics,
};
