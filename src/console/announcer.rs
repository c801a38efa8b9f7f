//! Environment-specific welcome and farewell banners.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Deployment flavour selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Local development: verbose, friendly output.
    #[default]
    Dev,
    /// Production: terse, formal output.
    Prod,
}

impl Profile {
    /// Returns the canonical text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Prod => "prod",
        }
    }
}

/// Error returned while parsing a profile name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown profile '{0}', expected 'dev' or 'prod'")]
pub struct ParseProfileError(pub String);

impl FromStr for Profile {
    type Err = ParseProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dev" | "development" => Ok(Self::Dev),
            "prod" | "production" => Ok(Self::Prod),
            _ => Err(ParseProfileError(s.to_owned())),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Produces the banners shown when the application starts and stops.
pub trait Announcer: Send + Sync {
    /// Returns the startup banner.
    fn welcome(&self) -> String;

    /// Returns the shutdown banner.
    fn farewell(&self) -> String;
}

/// Friendly banners for development runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DevAnnouncer;

impl Announcer for DevAnnouncer {
    fn welcome(&self) -> String {
        tracing::info!("application started in development mode");
        [
            "+-----------------------------------------------------------+",
            "|                                                           |",
            "|   WELCOME TO THE TASK MANAGER!                            |",
            "|                                                           |",
            "|   Mode: DEVELOPMENT (dev)                                 |",
            "|   Version: 0.1.0                                          |",
            "|                                                           |",
            "|   * Verbose logging enabled                               |",
            "|   * Sample tasks loaded                                   |",
            "|                                                           |",
            "+-----------------------------------------------------------+",
        ]
        .join("\n")
    }

    fn farewell(&self) -> String {
        tracing::info!("application finished in development mode");
        [
            "+-----------------------------------------------------------+",
            "|                                                           |",
            "|   THANKS FOR USING THE TASK MANAGER!                      |",
            "|                                                           |",
            "|   Reminder: you are running in DEVELOPMENT mode           |",
            "|   Happy hacking!                                          |",
            "|                                                           |",
            "+-----------------------------------------------------------+",
        ]
        .join("\n")
    }
}

/// Terse banners for production runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProdAnnouncer;

impl Announcer for ProdAnnouncer {
    fn welcome(&self) -> String {
        tracing::info!("application started in production environment");
        [
            "========================================",
            "TASK MANAGEMENT SYSTEM",
            "========================================",
            "Environment: PRODUCTION",
            "Application started successfully",
            "========================================",
        ]
        .join("\n")
    }

    fn farewell(&self) -> String {
        tracing::info!("application finished in production environment");
        [
            "========================================",
            "System shut down successfully",
            "========================================",
        ]
        .join("\n")
    }
}

/// Returns the announcer matching `profile`.
#[must_use]
pub fn announcer_for(profile: Profile) -> Box<dyn Announcer> {
    match profile {
        Profile::Dev => Box::new(DevAnnouncer),
        Profile::Prod => Box::new(ProdAnnouncer),
    }
}
