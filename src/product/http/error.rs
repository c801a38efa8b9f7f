//! Structured error responses for the product API.

use crate::product::services::ProductServiceError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// JSON body sent with every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// When the error was produced.
    pub timestamp: DateTime<Utc>,
    /// HTTP status code.
    pub status: u16,
    /// Short title for the error kind.
    pub error: String,
    /// Human-readable detail.
    pub message: String,
    /// Request path that failed.
    pub path: String,
}

/// An error ready to be turned into an HTTP response.
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    /// Builds an error response with an explicit status and title.
    #[must_use]
    pub fn new(
        status: StatusCode,
        title: &str,
        message: impl Into<String>,
        path: &str,
        clock: &impl Clock,
    ) -> Self {
        Self {
            status,
            body: ErrorBody {
                timestamp: clock.utc(),
                status: status.as_u16(),
                error: title.to_owned(),
                message: message.into(),
                path: path.to_owned(),
            },
        }
    }

    /// Builds a `400 Bad Request` for rejected input.
    #[must_use]
    pub fn validation(message: impl Into<String>, path: &str, clock: &impl Clock) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "Validation error",
            message,
            path,
            clock,
        )
    }

    /// Builds a `404 Not Found` for an unknown product.
    #[must_use]
    pub fn not_found(message: impl Into<String>, path: &str, clock: &impl Clock) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "Product not found",
            message,
            path,
            clock,
        )
    }

    /// Translates a service failure into the matching response.
    #[must_use]
    pub fn from_service(err: &ProductServiceError, path: &str, clock: &impl Clock) -> Self {
        match err {
            ProductServiceError::Validation(_) => Self::validation(err.to_string(), path, clock),
            ProductServiceError::NotFound(_) => Self::not_found(err.to_string(), path, clock),
            ProductServiceError::Repository(_) => {
                tracing::error!(error = %err, path, "unhandled product API failure");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    err.to_string(),
                    path,
                    clock,
                )
            }
        }
    }

    /// Returns the HTTP status.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the JSON body.
    #[must_use]
    pub const fn body(&self) -> &ErrorBody {
        &self.body
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
