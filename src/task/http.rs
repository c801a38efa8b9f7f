//! Placeholder HTTP endpoints served next to the task manager.

use axum::{Router, routing::get};

/// Body returned by `GET /`.
pub const ROOT_MESSAGE: &str = "Server running at the root";

/// Body returned by `GET /hello`.
pub const HELLO_MESSAGE: &str = "Hello from the task manager!";

/// Builds the router with the root and greeting endpoints.
#[must_use]
pub fn router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/hello", get(hello))
}

async fn root() -> &'static str {
    ROOT_MESSAGE
}

async fn hello() -> &'static str {
    HELLO_MESSAGE
}
