//! In-memory task store.

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{NewTask, Task, TaskDescription, TaskDomainError, TaskId, TaskPriority},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Tasks are kept in insertion order. Identifier allocation and insertion
/// happen under the same write lock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl Default for InMemoryTaskState {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: TaskId::FIRST,
        }
    }
}

impl InMemoryTaskState {
    fn append(&mut self, task: NewTask) -> Task {
        let id = self.next_id;
        self.next_id = id.next();
        let stored = task.into_task(id);
        self.tasks.push(stored.clone());
        stored
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn save(&self, task: NewTask) -> TaskRepositoryResult<Task> {
        let stored = self.write()?.append(task);
        tracing::debug!(task_id = %stored.id(), "task saved");
        Ok(stored)
    }

    async fn save_within_capacity(
        &self,
        task: NewTask,
        limit: usize,
    ) -> TaskRepositoryResult<Task> {
        let mut state = self.write()?;
        if state.tasks.len() >= limit {
            return Err(TaskRepositoryError::CapacityReached { limit });
        }
        let stored = state.append(task);
        drop(state);
        tracing::debug!(task_id = %stored.id(), "task saved");
        Ok(stored)
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        tracing::debug!(total = state.tasks.len(), "listing tasks");
        Ok(state.tasks.clone())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.iter().find(|task| task.id() == id).cloned())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<bool> {
        let mut state = self.write()?;
        let Some(slot) = state.tasks.iter_mut().find(|stored| stored.id() == task.id()) else {
            return Ok(false);
        };
        slot.clone_from(task);
        Ok(true)
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let mut state = self.write()?;
        let before = state.tasks.len();
        state.tasks.retain(|task| task.id() != id);
        let removed = state.tasks.len() != before;
        drop(state);
        if removed {
            tracing::info!(task_id = %id, "task removed");
        } else {
            tracing::warn!(task_id = %id, "no task to remove");
        }
        Ok(removed)
    }

    async fn count(&self) -> TaskRepositoryResult<usize> {
        Ok(self.read()?.tasks.len())
    }
}

/// Starter tasks used to populate a fresh store.
///
/// The last two entries are already completed.
///
/// # Errors
///
/// Returns [`TaskDomainError`] if a starter description fails validation.
pub fn sample_tasks() -> Result<Vec<NewTask>, TaskDomainError> {
    let pending = [
        ("Learn the axum routing model", TaskPriority::High),
        ("Finish the inventory coursework", TaskPriority::High),
        ("Review dependency injection with traits", TaskPriority::Medium),
    ];
    let done = [
        ("Set up the cargo workspace", TaskPriority::Medium),
        ("Read the serde documentation", TaskPriority::Low),
    ];

    let mut seeds = Vec::with_capacity(pending.len() + done.len());
    for (description, priority) in pending {
        seeds.push(NewTask::new(TaskDescription::new(description)?, priority));
    }
    for (description, priority) in done {
        seeds.push(NewTask::new(TaskDescription::new(description)?, priority).already_completed());
    }
    Ok(seeds)
}
