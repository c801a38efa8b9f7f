//! Scripted tour of the task service used by the console binary.

use super::Announcer;
use crate::task::{
    domain::{Task, TaskPriority},
    ports::TaskRepository,
    services::{TaskService, TaskServiceError},
};
use std::io::{self, Write};
use thiserror::Error;

const DEMO_TASK: &str = "Document the public API with rustdoc";
const RULE: &str = "---------------------------------------";

/// Errors raised while running the walkthrough.
#[derive(Debug, Error)]
pub enum WalkthroughError {
    /// Writing the transcript failed.
    #[error("failed to write walkthrough output: {0}")]
    Output(#[from] io::Error),
    /// The task service failed for a reason other than capacity.
    #[error(transparent)]
    Tasks(#[from] TaskServiceError),
}

/// Drives the task service through its main operations.
///
/// The sequence is: welcome banner, configuration summary, all tasks, add a
/// task, pending tasks, complete the first pending task, completed tasks,
/// statistics when enabled, farewell banner.
pub struct TaskWalkthrough<'a, R>
where
    R: TaskRepository,
{
    service: &'a TaskService<R>,
    announcer: &'a dyn Announcer,
}

impl<'a, R> TaskWalkthrough<'a, R>
where
    R: TaskRepository,
{
    /// Creates a walkthrough over `service`, bracketed by `announcer`.
    #[must_use]
    pub const fn new(service: &'a TaskService<R>, announcer: &'a dyn Announcer) -> Self {
        Self { service, announcer }
    }

    /// Runs the walkthrough, writing the transcript to `out`.
    ///
    /// Hitting the task ceiling while adding the demo task is reported in the
    /// transcript and does not abort the run.
    ///
    /// # Errors
    ///
    /// Returns [`WalkthroughError::Output`] when writing fails, or
    /// [`WalkthroughError::Tasks`] when the task store fails.
    pub async fn run<W>(&self, out: &mut W) -> Result<(), WalkthroughError>
    where
        W: Write + ?Sized,
    {
        writeln!(out, "{}", self.announcer.welcome())?;
        writeln!(out)?;
        writeln!(out, "{}", self.service.configuration_summary())?;

        section(out, "ALL TASKS")?;
        write_tasks(out, &self.service.list_all().await?)?;

        section(out, "ADDING A TASK")?;
        match self.service.add_task(DEMO_TASK, TaskPriority::Medium).await {
            Ok(task) => writeln!(out, "Added {}", describe(&task))?,
            Err(err @ TaskServiceError::CapacityExceeded { .. }) => {
                writeln!(out, "Could not add task: {err}")?;
            }
            Err(err) => return Err(err.into()),
        }

        section(out, "PENDING TASKS")?;
        let pending = self.service.list_pending().await?;
        write_tasks(out, &pending)?;

        section(out, "COMPLETING A TASK")?;
        if let Some(first) = pending.first() {
            if self.service.mark_completed(first.id()).await? {
                writeln!(out, "Completed task #{}", first.id())?;
            } else {
                writeln!(out, "Task #{} no longer exists", first.id())?;
            }
        } else {
            writeln!(out, "Nothing to complete")?;
        }

        section(out, "COMPLETED TASKS")?;
        write_tasks(out, &self.service.list_completed().await?)?;

        if self.service.should_show_statistics() {
            writeln!(out)?;
            writeln!(out, "{}", self.service.statistics().await?)?;
        }

        writeln!(out)?;
        writeln!(out, "{}", self.announcer.farewell())?;
        out.flush()?;
        Ok(())
    }
}

fn section<W: Write + ?Sized>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    writeln!(out, "{RULE}")
}

fn write_tasks<W: Write + ?Sized>(out: &mut W, tasks: &[Task]) -> io::Result<()> {
    if tasks.is_empty() {
        return writeln!(out, "(no tasks)");
    }
    for task in tasks {
        writeln!(out, "{}", describe(task))?;
    }
    Ok(())
}

fn describe(task: &Task) -> String {
    let mark = if task.is_completed() { "x" } else { " " };
    format!(
        "[{mark}] #{} {} ({})",
        task.id(),
        task.description(),
        task.priority()
    )
}
