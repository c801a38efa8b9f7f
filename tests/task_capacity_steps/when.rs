//! When steps for task capacity BDD scenarios.

use super::world::{TaskCapacityWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use stockroom::task::domain::{TaskId, TaskPriority};

#[when(r#"the task "{description}" is added with priority "{priority}""#)]
fn add_task(
    world: &mut TaskCapacityWorld,
    description: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let parsed = TaskPriority::try_from(priority.as_str())
        .map_err(|err| eyre::eyre!("invalid priority in scenario: {err}"))?;
    world.last_add = Some(run_async(world.service.add_task(description, parsed)));
    Ok(())
}

#[when("task {id:u64} is removed")]
fn remove_task(world: &mut TaskCapacityWorld, id: u64) -> Result<(), eyre::Report> {
    let removed = run_async(world.service.remove_task(TaskId::new(id)))
        .wrap_err("remove task in scenario")?;
    if !removed {
        return Err(eyre::eyre!("task {id} was not present"));
    }
    Ok(())
}

#[when("task {id:u64} is marked completed")]
fn mark_completed(world: &mut TaskCapacityWorld, id: u64) -> Result<(), eyre::Report> {
    let completed = run_async(world.service.mark_completed(TaskId::new(id)))
        .wrap_err("complete task in scenario")?;
    world.last_completion = Some(completed);
    Ok(())
}
