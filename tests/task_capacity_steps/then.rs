//! Then steps for task capacity BDD scenarios.

use super::world::{TaskCapacityWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use stockroom::task::services::TaskServiceError;

#[then("the last addition fails with a capacity error")]
fn last_addition_fails(world: &TaskCapacityWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_add
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no task has been added"))?;
    if !matches!(result, Err(TaskServiceError::CapacityExceeded { .. })) {
        return Err(eyre::eyre!("expected CapacityExceeded, got {result:?}"));
    }
    Ok(())
}

#[then("the last addition succeeds with id {id:u64}")]
fn last_addition_succeeds(world: &TaskCapacityWorld, id: u64) -> Result<(), eyre::Report> {
    let result = world
        .last_add
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no task has been added"))?;
    match result {
        Ok(task) if task.id().value() == id => Ok(()),
        other => Err(eyre::eyre!("expected task with id {id}, got {other:?}")),
    }
}

#[then("the store holds {count:usize} tasks")]
fn store_holds(world: &TaskCapacityWorld, count: usize) -> Result<(), eyre::Report> {
    let tasks = run_async(world.service.list_all()).wrap_err("list tasks in scenario")?;
    if tasks.len() != count {
        return Err(eyre::eyre!("expected {count} tasks, found {}", tasks.len()));
    }
    Ok(())
}

#[then("the last completion reports success")]
fn completion_succeeded(world: &TaskCapacityWorld) -> Result<(), eyre::Report> {
    match world.last_completion {
        Some(true) => Ok(()),
        other => Err(eyre::eyre!("expected successful completion, got {other:?}")),
    }
}

#[then("the last completion reports failure")]
fn completion_failed(world: &TaskCapacityWorld) -> Result<(), eyre::Report> {
    match world.last_completion {
        Some(false) => Ok(()),
        other => Err(eyre::eyre!("expected failed completion, got {other:?}")),
    }
}

#[then("the statistics show {completed:usize} completed and {pending:usize} pending")]
fn statistics_show(
    world: &TaskCapacityWorld,
    completed: usize,
    pending: usize,
) -> Result<(), eyre::Report> {
    let stats = run_async(world.service.statistics()).wrap_err("compute statistics")?;
    if stats.completed != completed || stats.pending != pending {
        return Err(eyre::eyre!(
            "expected {completed} completed and {pending} pending, got {stats:?}"
        ));
    }
    Ok(())
}
