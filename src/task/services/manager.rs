//! Service layer enforcing the task manager's business rules.

use crate::task::{
    domain::{NewTask, Task, TaskDescription, TaskDomainError, TaskId, TaskPriority},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Settings consumed by [`TaskService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskServiceConfig {
    app_name: String,
    max_tasks: usize,
    show_statistics: bool,
}

impl TaskServiceConfig {
    /// Creates a service configuration.
    #[must_use]
    pub fn new(app_name: impl Into<String>, max_tasks: usize, show_statistics: bool) -> Self {
        Self {
            app_name: app_name.into(),
            max_tasks,
            show_statistics,
        }
    }

    /// Returns the display name of the application.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Returns the maximum number of tasks the store may hold.
    #[must_use]
    pub const fn max_tasks(&self) -> usize {
        self.max_tasks
    }

    /// Returns whether statistics should be shown.
    #[must_use]
    pub const fn show_statistics(&self) -> bool {
        self.show_statistics
    }
}

/// Snapshot of task counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStatistics {
    /// Number of stored tasks.
    pub total: usize,
    /// Number of completed tasks.
    pub completed: usize,
    /// Number of tasks still pending.
    pub pending: usize,
}

impl fmt::Display for TaskStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=======================================")?;
        writeln!(f, "TASK STATISTICS")?;
        writeln!(f, "=======================================")?;
        writeln!(f, "Total tasks:      {}", self.total)?;
        writeln!(f, "Completed:        {}", self.completed)?;
        writeln!(f, "Pending:          {}", self.pending)?;
        write!(f, "=======================================")
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The configured task ceiling has been reached.
    #[error("cannot add task: the limit of {max_tasks} tasks has been reached")]
    CapacityExceeded {
        /// Configured ceiling.
        max_tasks: usize,
    },
    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::CapacityReached { limit } => {
                Self::CapacityExceeded { max_tasks: limit }
            }
            other @ TaskRepositoryError::Persistence(_) => Self::Repository(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task management service.
#[derive(Clone)]
pub struct TaskService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
    config: TaskServiceConfig,
}

impl<R> TaskService<R>
where
    R: TaskRepository,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, config: TaskServiceConfig) -> Self {
        Self { repository, config }
    }

    /// Returns the service configuration.
    #[must_use]
    pub const fn config(&self) -> &TaskServiceConfig {
        &self.config
    }

    /// Adds a pending task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] for an empty description,
    /// [`TaskServiceError::CapacityExceeded`] when the store already holds
    /// the configured maximum, or [`TaskServiceError::Repository`] when the
    /// store fails.
    pub async fn add_task(
        &self,
        description: impl Into<String>,
        priority: TaskPriority,
    ) -> TaskServiceResult<Task> {
        let validated = TaskDescription::new(description)?;
        tracing::info!(description = %validated, %priority, "adding task");

        let max_tasks = self.config.max_tasks;
        let task = self
            .repository
            .save_within_capacity(NewTask::new(validated, priority), max_tasks)
            .await
            .map_err(|err| {
                let mapped = TaskServiceError::from(err);
                if matches!(mapped, TaskServiceError::CapacityExceeded { .. }) {
                    tracing::error!(max_tasks, "task limit reached");
                }
                mapped
            })?;

        tracing::info!(task_id = %task.id(), "task added");
        Ok(task)
    }

    /// Stores starter tasks until the configured ceiling is reached.
    ///
    /// Seeds that do not fit are skipped with a warning. Returns how many
    /// seeds were stored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn seed(&self, seeds: Vec<NewTask>) -> TaskServiceResult<usize> {
        let max_tasks = self.config.max_tasks;
        let offered = seeds.len();
        let mut stored = 0_usize;
        for seed in seeds {
            match self.repository.save_within_capacity(seed, max_tasks).await {
                Ok(_) => stored = stored.saturating_add(1),
                Err(TaskRepositoryError::CapacityReached { .. }) => {
                    tracing::warn!(
                        max_tasks,
                        skipped = offered.saturating_sub(stored),
                        "starter tasks exceed the task limit"
                    );
                    break;
                }
                Err(err) => return Err(err.into()),
            }
        }
        tracing::info!(stored, "starter tasks loaded");
        Ok(stored)
    }

    /// Lists every task in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn list_all(&self) -> TaskServiceResult<Vec<Task>> {
        tracing::debug!("listing all tasks");
        Ok(self.repository.find_all().await?)
    }

    /// Lists tasks that are not completed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn list_pending(&self) -> TaskServiceResult<Vec<Task>> {
        tracing::debug!("listing pending tasks");
        let tasks = self.repository.find_all().await?;
        Ok(tasks.into_iter().filter(|task| !task.is_completed()).collect())
    }

    /// Lists completed tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn list_completed(&self) -> TaskServiceResult<Vec<Task>> {
        tracing::debug!("listing completed tasks");
        let tasks = self.repository.find_all().await?;
        Ok(tasks.into_iter().filter(Task::is_completed).collect())
    }

    /// Marks a task as completed.
    ///
    /// Returns `false`, without touching the store, when the task does not
    /// exist. Completing an already completed task returns `true`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn mark_completed(&self, id: TaskId) -> TaskServiceResult<bool> {
        tracing::info!(task_id = %id, "completing task");
        let Some(mut task) = self.repository.find_by_id(id).await? else {
            tracing::warn!(task_id = %id, "no task to complete");
            return Ok(false);
        };

        task.mark_completed();
        let updated = self.repository.update(&task).await?;
        if updated {
            tracing::info!(task_id = %id, "task completed");
        } else {
            tracing::warn!(task_id = %id, "task vanished before completion");
        }
        Ok(updated)
    }

    /// Removes a task, returning whether it existed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn remove_task(&self, id: TaskId) -> TaskServiceResult<bool> {
        Ok(self.repository.delete_by_id(id).await?)
    }

    /// Computes total, completed, and pending counts from one snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn statistics(&self) -> TaskServiceResult<TaskStatistics> {
        let tasks = self.repository.find_all().await?;
        let total = tasks.len();
        let completed = tasks.iter().filter(|task| task.is_completed()).count();
        let stats = TaskStatistics {
            total,
            completed,
            pending: total.saturating_sub(completed),
        };
        tracing::debug!(
            total = stats.total,
            completed = stats.completed,
            pending = stats.pending,
            "statistics computed"
        );
        Ok(stats)
    }

    /// Renders the active configuration for display.
    #[must_use]
    pub fn configuration_summary(&self) -> String {
        let show = if self.config.show_statistics { "yes" } else { "no" };
        format!(
            "APPLICATION CONFIGURATION\n\
             =======================================\n\
             Name:                  {}\n\
             Maximum tasks:         {}\n\
             Show statistics:       {}\n\
             =======================================",
            self.config.app_name, self.config.max_tasks, show
        )
    }

    /// Returns whether statistics should be shown.
    #[must_use]
    pub const fn should_show_statistics(&self) -> bool {
        self.config.show_statistics
    }
}
