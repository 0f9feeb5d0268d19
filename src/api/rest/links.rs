//! Link endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::{graph_error_response, ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::types::Link;
use crate::utils::edge_id;

/// POST /api/links - Add a link (interactive create: self-loops rejected)
pub async fn create_link(
    State(state): State<Arc<AppState>>,
    Json(mut link): Json<Link>,
) -> impl IntoResponse {
    if link.id.trim().is_empty() {
        link.id = edge_id();
    }
    let id = link.id.clone();
    match state.engine.add_link(link) {
        Ok(()) => (
            StatusCode::CREATED,
            Json(ApiResponse::new(serde_json::json!({"id": id}))),
        )
            .into_response(),
        Err(err) => graph_error_response(err).into_response(),
    }
}

/// PUT /api/links/:id - Replace a link
pub async fn update_link(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(mut link): Json<Link>,
) -> impl IntoResponse {
    let decoded = urlencoding::decode(&id)
        .unwrap_or_else(|_| id.clone().into())
        .into_owned();
    link.id = decoded.clone();

    match state.engine.update_link(link) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(ApiError::not_found(format!("Link '{}' not found", decoded))),
        )
            .into_response(),
        Err(err) => graph_error_response(err).into_response(),
    }
}

/// DELETE /api/links/:id - Remove a link; no cascade
pub async fn delete_link(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let decoded = urlencoding::decode(&id)
        .unwrap_or_else(|_| id.clone().into())
        .into_owned();

    if state.engine.delete_link(&decoded) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(ApiError::not_found(format!("Link '{}' not found", decoded))),
        )
            .into_response()
    }
}
