//! REST endpoint modules and shared response types
//!
//! - `GET /api/graph` - Graph snapshot with normalized link endpoints
//! - `POST /api/graph/save` / `DELETE /api/graph/clear` - Persistence contract
//! - `GET /api/graph/stats` - Counts per node/link label
//! - `GET /api/graph/layout` - Parallel-edge curvature hints
//! - `/api/nodes`, `/api/links` - Element CRUD
//! - `/api/export/:format`, `/api/import/:format` - Interchange codecs

pub mod graph;
pub mod interchange;
pub mod links;
pub mod nodes;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::error::GraphError;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Total count (for collection responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data, total: None }
    }

    pub fn with_total(data: T, total: usize) -> Self {
        Self {
            data,
            total: Some(total),
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INVALID_FORMAT".to_string(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "PERSISTENCE_UNAVAILABLE".to_string(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "IN_PROGRESS".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}

/// Map a [`GraphError`] to its HTTP representation
pub fn graph_error_response(err: GraphError) -> (StatusCode, Json<ApiError>) {
    match err {
        GraphError::Validation(message) => {
            (StatusCode::BAD_REQUEST, Json(ApiError::bad_request(message)))
        }
        GraphError::Format(message) => (
            StatusCode::BAD_REQUEST,
            Json(ApiError::invalid_format(message)),
        ),
        GraphError::Unavailable => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiError::unavailable("persistence unavailable")),
        ),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::internal(other.to_string())),
        ),
    }
}
