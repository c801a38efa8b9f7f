//! Shared world state for task capacity BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use stockroom::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskService, TaskServiceConfig, TaskServiceError},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskRepository>;

/// Scenario world for task capacity behaviour tests.
pub struct TaskCapacityWorld {
    pub service: TestTaskService,
    pub last_add: Option<Result<Task, TaskServiceError>>,
    pub last_completion: Option<bool>,
}

impl TaskCapacityWorld {
    /// Creates a world whose store accepts `max_tasks` tasks.
    #[must_use]
    pub fn with_capacity(max_tasks: usize) -> Self {
        Self {
            service: TaskService::new(
                Arc::new(InMemoryTaskRepository::new()),
                TaskServiceConfig::new("Scenario", max_tasks, true),
            ),
            last_add: None,
            last_completion: None,
        }
    }
}

impl Default for TaskCapacityWorld {
    fn default() -> Self {
        Self::with_capacity(10)
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskCapacityWorld {
    TaskCapacityWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
