//! Layered configuration for the stockroom binaries.
//!
//! Values are resolved with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/stockroom/config.toml`)
//! 4. Compiled defaults
//!
//! Both binaries read the same file. The tasks console uses the `[tasks]`
//! section and the products API uses `[products]`.

use crate::console::{ParseProfileError, Profile};
use crate::task::services::TaskServiceConfig;
use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_APP_NAME: &str = "Task Manager";
const DEFAULT_MAX_TASKS: usize = 10;
const DEFAULT_PRODUCTS_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_SIZE: u32 = 10;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// The configured profile name is not recognised.
    #[error(transparent)]
    Profile(#[from] ParseProfileError),

    /// A setting holds a value outside its allowed range.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        /// Setting name as written in the config file.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

// TOML file structs. Every field is optional so a file may override a subset.

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StockroomConfigFile {
    log_level: Option<String>,
    tasks: TasksFileConfig,
    products: ProductsFileConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TasksFileConfig {
    app_name: Option<String>,
    max_tasks: Option<usize>,
    show_statistics: Option<bool>,
    profile: Option<String>,
    bind_addr: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProductsFileConfig {
    bind_addr: Option<String>,
    database_url: Option<String>,
    pool_size: Option<u32>,
}

/// CLI arguments for the task manager console.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "In-memory task manager")]
pub struct TasksCliArgs {
    /// Path to config file (default: `~/.config/stockroom/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Display name of the application.
    #[arg(long)]
    pub app_name: Option<String>,

    /// Maximum number of tasks the store may hold.
    #[arg(long)]
    pub max_tasks: Option<usize>,

    /// Whether to print statistics at the end of the walkthrough.
    #[arg(long)]
    pub show_statistics: Option<bool>,

    /// Runtime profile (`dev` or `prod`).
    #[arg(short, long, env = "STOCKROOM_PROFILE")]
    pub profile: Option<String>,

    /// Address for the placeholder HTTP endpoints. Nothing is served when unset.
    #[arg(short, long, env = "STOCKROOM_TASKS_ADDR")]
    pub bind: Option<String>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, env = "STOCKROOM_LOG")]
    pub log_level: Option<String>,
}

/// CLI arguments for the products API server.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Product inventory HTTP API")]
pub struct ProductsCliArgs {
    /// Path to config file (default: `~/.config/stockroom/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to bind the API server to.
    #[arg(short, long, env = "STOCKROOM_PRODUCTS_ADDR")]
    pub bind: Option<String>,

    /// `PostgreSQL` connection URL. The in-memory store is used when unset.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections.
    #[arg(long)]
    pub pool_size: Option<u32>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, env = "STOCKROOM_LOG")]
    pub log_level: Option<String>,
}

/// Fully resolved task manager configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TasksConfig {
    /// Display name of the application.
    pub app_name: String,
    /// Maximum number of stored tasks. Always positive.
    pub max_tasks: usize,
    /// Whether statistics are shown.
    pub show_statistics: bool,
    /// Selected runtime profile.
    pub profile: Profile,
    /// Address for the placeholder endpoints, if they should be served.
    pub bind_addr: Option<String>,
    /// Log level filter string.
    pub log_level: String,
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_owned(),
            max_tasks: DEFAULT_MAX_TASKS,
            show_statistics: true,
            profile: Profile::Dev,
            bind_addr: None,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl TasksConfig {
    /// Loads configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// If `--config` is given and the file does not exist, returns an error.
    /// Otherwise a missing default file is treated as an empty config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config file cannot be read or parsed,
    /// or if a resolved value is invalid.
    pub fn load(cli: &TasksCliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Self::resolve(cli, &file)
    }

    fn resolve(cli: &TasksCliArgs, file: &StockroomConfigFile) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let section = &file.tasks;

        let max_tasks = cli
            .max_tasks
            .or(section.max_tasks)
            .unwrap_or(defaults.max_tasks);
        if max_tasks == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tasks.max_tasks",
                reason: "must be greater than zero",
            });
        }

        let profile = match cli.profile.as_deref().or(section.profile.as_deref()) {
            Some(raw) => raw.parse()?,
            None => defaults.profile,
        };

        Ok(Self {
            app_name: cli
                .app_name
                .clone()
                .or_else(|| section.app_name.clone())
                .unwrap_or(defaults.app_name),
            max_tasks,
            show_statistics: cli
                .show_statistics
                .or(section.show_statistics)
                .unwrap_or(defaults.show_statistics),
            profile,
            bind_addr: cli.bind.clone().or_else(|| section.bind_addr.clone()),
            log_level: resolve_log_level(cli.log_level.as_deref(), file),
        })
    }

    /// Returns the settings consumed by the task service.
    #[must_use]
    pub fn service_config(&self) -> TaskServiceConfig {
        TaskServiceConfig::new(self.app_name.clone(), self.max_tasks, self.show_statistics)
    }
}

/// Fully resolved products API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductsConfig {
    /// Address to bind the server to (e.g., `0.0.0.0:8080`).
    pub bind_addr: String,
    /// `PostgreSQL` connection URL. `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub pool_size: u32,
    /// Log level filter string.
    pub log_level: String,
}

impl Default for ProductsConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_PRODUCTS_ADDR.to_owned(),
            database_url: None,
            pool_size: DEFAULT_POOL_SIZE,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl ProductsConfig {
    /// Loads configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config file cannot be read or parsed,
    /// or if a resolved value is invalid.
    pub fn load(cli: &ProductsCliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Self::resolve(cli, &file)
    }

    fn resolve(cli: &ProductsCliArgs, file: &StockroomConfigFile) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let section = &file.products;

        let pool_size = cli
            .pool_size
            .or(section.pool_size)
            .unwrap_or(defaults.pool_size);
        if pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "products.pool_size",
                reason: "must be greater than zero",
            });
        }

        Ok(Self {
            bind_addr: cli
                .bind
                .clone()
                .or_else(|| section.bind_addr.clone())
                .unwrap_or(defaults.bind_addr),
            database_url: cli
                .database_url
                .clone()
                .or_else(|| section.database_url.clone())
                .filter(|url| !url.trim().is_empty()),
            pool_size,
            log_level: resolve_log_level(cli.log_level.as_deref(), file),
        })
    }
}

fn resolve_log_level(cli: Option<&str>, file: &StockroomConfigFile) -> String {
    cli.or(file.log_level.as_deref())
        .unwrap_or(DEFAULT_LOG_LEVEL)
        .to_owned()
}

/// Loads and parses the TOML config file.
fn load_config_file(explicit_path: Option<&Path>) -> Result<StockroomConfigFile, ConfigError> {
    if let Some(path) = explicit_path {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        return Ok(toml::from_str(&contents)?);
    }

    let Some(config_dir) = dirs::config_dir() else {
        return Ok(StockroomConfigFile::default());
    };
    let path = config_dir.join("stockroom").join("config.toml");

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            Ok(StockroomConfigFile::default())
        }
        Err(source) => Err(ConfigError::ReadFile { path, source }),
    }
}
