//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use rstest::fixture;
use stockroom::{
    product::{adapters::memory::InMemoryProductRepository, services::ProductCatalogService},
    task::{
        adapters::memory::{InMemoryTaskRepository, sample_tasks},
        ports::TaskRepository,
        services::{TaskService, TaskServiceConfig},
    },
};

/// Task service over the in-memory store.
pub type TestTaskService = TaskService<InMemoryTaskRepository>;

/// Catalog service over the in-memory store.
pub type TestCatalog = ProductCatalogService<InMemoryProductRepository>;

/// Provides an empty product catalog for each test.
#[fixture]
pub fn catalog() -> TestCatalog {
    ProductCatalogService::new(Arc::new(InMemoryProductRepository::new()))
}

/// Builds an empty task service with the given ceiling.
#[must_use]
pub fn task_service(max_tasks: usize) -> TestTaskService {
    TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        TaskServiceConfig::new("Integration", max_tasks, true),
    )
}

/// Builds a task service whose store holds the starter tasks.
///
/// # Errors
///
/// Returns an error if a starter task is invalid or cannot be stored.
pub async fn seeded_task_service(max_tasks: usize) -> eyre::Result<TestTaskService> {
    let repository = Arc::new(InMemoryTaskRepository::new());
    for seed in sample_tasks()? {
        repository.save(seed).await?;
    }
    Ok(TaskService::new(
        repository,
        TaskServiceConfig::new("Integration", max_tasks, true),
    ))
}
