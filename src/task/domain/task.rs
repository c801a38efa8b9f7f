//! Task entity and its unsaved counterpart.

use super::{TaskDescription, TaskId, TaskPriority};
use serde::{Deserialize, Serialize};

/// A task that has not been stored yet and therefore has no identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    description: TaskDescription,
    priority: TaskPriority,
    completed: bool,
}

impl NewTask {
    /// Creates a pending task.
    #[must_use]
    pub const fn new(description: TaskDescription, priority: TaskPriority) -> Self {
        Self {
            description,
            priority,
            completed: false,
        }
    }

    /// Marks the unsaved task as already completed.
    ///
    /// Only used when seeding a store with historical data.
    #[must_use]
    pub const fn already_completed(mut self) -> Self {
        self.completed = true;
        self
    }

    /// Returns the task description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Attaches the store-assigned identifier.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            description: self.description,
            completed: self.completed,
            priority: self.priority,
        }
    }
}

/// A stored to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    description: TaskDescription,
    completed: bool,
    priority: TaskPriority,
}

impl Task {
    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Flags the task as done. Completing a completed task changes nothing.
    pub const fn mark_completed(&mut self) {
        self.completed = true;
    }
}
