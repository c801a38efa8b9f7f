//! Repository port for task storage, lookup, and removal.

use crate::task::domain::{NewTask, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task storage contract.
///
/// Absence is reported through `Option` and `bool` results; errors are
/// reserved for capacity rejections and storage failures.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Assigns the next identifier to `task`, appends it, and returns the
    /// stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store cannot be
    /// accessed.
    async fn save(&self, task: NewTask) -> TaskRepositoryResult<Task>;

    /// Stores `task` only while fewer than `limit` tasks are held.
    ///
    /// The count check and the insertion happen as one step, so concurrent
    /// callers can never push the store past `limit`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::CapacityReached`] when the store already
    /// holds `limit` or more tasks. The store is left untouched in that case.
    async fn save_within_capacity(
        &self,
        task: NewTask,
        limit: usize,
    ) -> TaskRepositoryResult<Task>;

    /// Returns a snapshot of all tasks in insertion order.
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Overwrites the stored task that shares `task`'s identifier.
    ///
    /// Returns `false` when no such task exists.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<bool>;

    /// Removes a task by identifier, returning whether anything was removed.
    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool>;

    /// Returns the number of stored tasks.
    async fn count(&self) -> TaskRepositoryResult<usize>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The store already holds the maximum number of tasks.
    #[error("task store is full ({limit} tasks)")]
    CapacityReached {
        /// Configured ceiling that was hit.
        limit: usize,
    },

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
