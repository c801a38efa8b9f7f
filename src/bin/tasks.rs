//! Runs the task manager walkthrough and optionally serves its endpoints.
//!
//! Usage:
//!
//! ```text
//! tasks [--profile dev|prod] [--max-tasks 10] [--bind 127.0.0.1:8081]
//! ```
//!
//! The store is seeded with starter tasks, the walkthrough transcript is
//! written to standard output, and the placeholder endpoints are served when
//! a bind address is configured.

use clap::Parser;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use stockroom::config::{ConfigError, TasksCliArgs, TasksConfig};
use stockroom::console::{TaskWalkthrough, WalkthroughError, announcer_for};
use stockroom::task::{
    adapters::memory::{InMemoryTaskRepository, sample_tasks},
    domain::TaskDomainError,
    http,
    services::{TaskService, TaskServiceError},
};
use thiserror::Error;
use tokio::net::TcpListener;

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid starter task: {0}")]
    Seed(#[from] TaskDomainError),
    #[error("failed to seed task store: {0}")]
    Store(#[from] TaskServiceError),
    #[error(transparent)]
    Walkthrough(#[from] WalkthroughError),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: io::Error },
    #[error("server terminated: {0}")]
    Serve(io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = TasksCliArgs::parse();
    let loaded = TasksConfig::load(&cli);

    let level = loaded
        .as_ref()
        .map_or("info", |config| config.log_level.as_str());
    init_tracing(level);

    match run(loaded).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "task manager failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

async fn run(loaded: Result<TasksConfig, ConfigError>) -> Result<(), StartupError> {
    let config = loaded?;
    tracing::info!(
        profile = %config.profile,
        max_tasks = config.max_tasks,
        "starting task manager"
    );

    let service = TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        config.service_config(),
    );
    service.seed(sample_tasks()?).await?;
    let announcer = announcer_for(config.profile);
    {
        let mut stdout = io::stdout().lock();
        TaskWalkthrough::new(&service, announcer.as_ref())
            .run(&mut stdout)
            .await?;
    }

    match config.bind_addr.as_deref() {
        Some(addr) => serve(addr).await,
        None => Ok(()),
    }
}

async fn serve(addr: &str) -> Result<(), StartupError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: addr.to_owned(),
            source,
        })?;
    if let Ok(bound) = listener.local_addr() {
        tracing::info!(addr = %bound, "task endpoints listening");
    }

    axum::serve(listener, http::router())
        .with_graceful_shutdown(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %err, "failed to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
        })
        .await
        .map_err(StartupError::Serve)
}
