//! API error bodies and their mapping to HTTP responses.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::plan::PlanError;

/// One structural problem in a request, addressed by field path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// Field path, e.g. `"powerplants[2].pmin"` or `"body"`.
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl FieldError {
    /// Creates an error for `field` with a constraint description.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Error response body for 4xx responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub message: String,
    /// Per-field details, omitted when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

/// Everything that can stop a request before a plan is returned.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body is not JSON or does not have the request shape.
    #[error("invalid request body: {0}")]
    Rejected(#[from] JsonRejection),

    /// The body parsed but failed structural validation.
    #[error("request failed validation ({} errors)", .0.len())]
    Invalid(Vec<FieldError>),

    /// The planning pipeline refused the fleet.
    #[error(transparent)]
    Plan(#[from] PlanError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(error = %self, "rejecting production plan request");

        let (status, body) = match self {
            Self::Rejected(rejection) => {
                // Keep 413 for oversized bodies; every other shape problem is a 400.
                let status = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    StatusCode::PAYLOAD_TOO_LARGE
                } else {
                    StatusCode::BAD_REQUEST
                };
                let body = ErrorResponse {
                    message: "invalid request body".to_string(),
                    errors: vec![FieldError::new("body", rejection.body_text())],
                };
                (status, body)
            }
            Self::Invalid(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    message: "invalid request body".to_string(),
                    errors,
                },
            ),
            Self::Plan(err) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    message: err.to_string(),
                    errors: Vec::new(),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
