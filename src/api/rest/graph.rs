//! Graph-level endpoints: snapshot, persistence contract, stats, layout

use std::collections::HashMap;
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use super::{ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::layout::link_curvatures;
use crate::types::{Link, Node};

/// Response for GET /api/graph
#[derive(Debug, Serialize)]
pub struct GraphResponse {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

/// GET /api/graph - Graph snapshot with link endpoints normalized to ids
pub async fn get_graph(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let graph = state.engine.normalized_snapshot();
    let total = graph.node_count();
    Json(ApiResponse::with_total(
        GraphResponse {
            nodes: graph.nodes,
            links: graph.links,
        },
        total,
    ))
}

/// Response for save/clear operations
#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub message: String,
}

/// POST /api/graph/save - Persist the current graph
///
/// 503 when no persistence is configured (local mode: the in-memory graph
/// keeps working, changes are just not stored). A save that is already in
/// flight rejects the second request instead of queueing it.
pub async fn save_graph(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    if !AppState::try_begin(&state.saving) {
        return (
            StatusCode::CONFLICT,
            Json(ApiError::conflict("Save already in progress")),
        )
            .into_response();
    }

    let result = match &state.persistence {
        None => Err(None),
        Some(file) => file
            .save(&state.engine.normalized_snapshot())
            .map_err(Some),
    };
    AppState::end(&state.saving);

    match result {
        Ok(()) => Json(StatusMessage {
            message: "Graph saved successfully".to_string(),
        })
        .into_response(),
        Err(None) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiError::unavailable(
                "Persistence unavailable - working in local mode",
            )),
        )
            .into_response(),
        Err(Some(err)) => {
            eprintln!("[Persist] Save failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::internal(err.to_string())),
            )
                .into_response()
        }
    }
}

/// DELETE /api/graph/clear - Clear the graph
///
/// The in-memory graph always clears, even when the persistence side fails
/// or is absent; a remote error must never leave the user stuck with local
/// state they cannot reset.
pub async fn clear_graph(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    if !AppState::try_begin(&state.clearing) {
        return (
            StatusCode::CONFLICT,
            Json(ApiError::conflict("Clear already in progress")),
        )
            .into_response();
    }

    state.engine.clear();

    let message = match &state.persistence {
        None => "Persistence unavailable - cleared in-memory graph only".to_string(),
        Some(file) => match file.clear() {
            Ok(()) => "Graph cleared successfully".to_string(),
            Err(err) => {
                eprintln!("[Persist] Clear failed: {}", err);
                format!("Graph cleared locally; persistence error: {}", err)
            }
        },
    };
    AppState::end(&state.clearing);

    Json(StatusMessage { message }).into_response()
}

/// GET /api/graph/stats - Node/link counts and per-label counts
#[derive(Debug, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub link_count: usize,
    pub node_labels: HashMap<String, usize>,
    pub link_labels: HashMap<String, usize>,
}

pub async fn get_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let graph = state.engine.snapshot();

    let mut node_labels: HashMap<String, usize> = HashMap::new();
    for node in &graph.nodes {
        *node_labels.entry(node.label.clone()).or_insert(0) += 1;
    }

    let mut link_labels: HashMap<String, usize> = HashMap::new();
    for link in &graph.links {
        *link_labels.entry(link.label.clone()).or_insert(0) += 1;
    }

    Json(ApiResponse::new(GraphStats {
        node_count: graph.node_count(),
        link_count: graph.link_count(),
        node_labels,
        link_labels,
    }))
}

/// GET /api/graph/layout - Curvature hints for parallel edges
///
/// Links absent from the map render straight. Recomputed from the current
/// link collection on every call; the map has no identity of its own.
pub async fn get_layout(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let graph = state.engine.snapshot();
    Json(ApiResponse::new(link_curvatures(&graph.links)))
}
