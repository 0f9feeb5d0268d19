//! Import/export endpoints over the codec strategies
//!
//! `:format` selects the codec: `entities` (instance level) or `schema`
//! (type level). Import replaces the whole graph; there is no merge.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use super::{graph_error_response, ApiError};
use crate::api::state::AppState;
use crate::codec::codec_for;

/// GET /api/export/:format - Interchange document for the current graph
pub async fn export_graph(
    State(state): State<Arc<AppState>>,
    Path(format): Path<String>,
) -> impl IntoResponse {
    let Some(codec) = codec_for(&format) else {
        return unknown_format(&format).into_response();
    };

    let graph = state.engine.snapshot();
    match codec.export_graph(&graph) {
        Ok(document) => Json(document).into_response(),
        Err(err) => graph_error_response(err).into_response(),
    }
}

/// POST /api/import/:format - Parse a document and replace the graph
///
/// All-or-nothing: a file that fails validation leaves the graph untouched.
pub async fn import_graph(
    State(state): State<Arc<AppState>>,
    Path(format): Path<String>,
    Json(document): Json<Value>,
) -> impl IntoResponse {
    let Some(codec) = codec_for(&format) else {
        return unknown_format(&format).into_response();
    };

    match codec.import_graph(&document) {
        Ok(graph) => {
            let (nodes, links) = (graph.node_count(), graph.link_count());
            state.engine.replace(graph);
            Json(serde_json::json!({
                "message": "Graph imported successfully",
                "nodes": nodes,
                "links": links,
            }))
            .into_response()
        }
        Err(err) => graph_error_response(err).into_response(),
    }
}

fn unknown_format(format: &str) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError::bad_request(format!(
            "Unknown interchange format '{}'",
            format
        ))),
    )
}
