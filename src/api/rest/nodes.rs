//! Node endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use super::{graph_error_response, ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::types::{Link, Node};
use crate::utils::node_id;

/// Response for a single node with its incident links
#[derive(Debug, Serialize)]
pub struct NodeDetail {
    #[serde(flatten)]
    pub node: Node,
    /// Links where this node is the source
    pub outgoing_links: Vec<Link>,
    /// Links where this node is the target
    pub incoming_links: Vec<Link>,
}

/// GET /api/nodes/:id - Single node with incident links
pub async fn get_node(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    // URL decode the id (handles spaces and special chars)
    let decoded = urlencoding::decode(&id)
        .unwrap_or_else(|_| id.clone().into())
        .into_owned();

    let graph = state.engine.snapshot();
    match graph.node_by_id(&decoded) {
        Some(node) => {
            let outgoing_links: Vec<Link> = graph
                .links
                .iter()
                .filter(|l| l.source_id() == decoded)
                .map(Link::normalized)
                .collect();
            let incoming_links: Vec<Link> = graph
                .links
                .iter()
                .filter(|l| l.target_id() == decoded)
                .map(Link::normalized)
                .collect();

            (
                StatusCode::OK,
                Json(ApiResponse::new(NodeDetail {
                    node: node.clone(),
                    outgoing_links,
                    incoming_links,
                })),
            )
                .into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiError::not_found(format!("Node '{}' not found", decoded))),
        )
            .into_response(),
    }
}

/// POST /api/nodes - Add a node
///
/// A blank id is filled with a generated `node_<timestamp>` id; id
/// uniqueness beyond that stays the caller's responsibility.
pub async fn create_node(
    State(state): State<Arc<AppState>>,
    Json(mut node): Json<Node>,
) -> impl IntoResponse {
    if node.id.trim().is_empty() {
        node.id = node_id();
    }
    let id = node.id.clone();
    match state.engine.add_node(node) {
        Ok(()) => (
            StatusCode::CREATED,
            Json(ApiResponse::new(serde_json::json!({"id": id}))),
        )
            .into_response(),
        Err(err) => graph_error_response(err).into_response(),
    }
}

/// PUT /api/nodes/:id - Replace a node, propagating to cached link endpoints
pub async fn update_node(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(mut node): Json<Node>,
) -> impl IntoResponse {
    let decoded = urlencoding::decode(&id)
        .unwrap_or_else(|_| id.clone().into())
        .into_owned();
    // Edits preserve identity; the path wins over whatever the body carries.
    node.id = decoded.clone();

    match state.engine.update_node(node) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(ApiError::not_found(format!("Node '{}' not found", decoded))),
        )
            .into_response(),
        Err(err) => graph_error_response(err).into_response(),
    }
}

/// DELETE /api/nodes/:id - Remove a node and every link touching it
pub async fn delete_node(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let decoded = urlencoding::decode(&id)
        .unwrap_or_else(|_| id.clone().into())
        .into_owned();

    if state.engine.delete_node(&decoded) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(ApiError::not_found(format!("Node '{}' not found", decoded))),
        )
            .into_response()
    }
}
