//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::rest::{graph, interchange, links, nodes};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Graph snapshot + persistence contract
        .route("/api/graph", get(graph::get_graph))
        .route("/api/graph/save", post(graph::save_graph))
        .route("/api/graph/clear", delete(graph::clear_graph))
        .route("/api/graph/stats", get(graph::get_stats))
        .route("/api/graph/layout", get(graph::get_layout))
        // Element CRUD
        .route("/api/nodes", post(nodes::create_node))
        .route("/api/nodes/:id", get(nodes::get_node))
        .route("/api/nodes/:id", put(nodes::update_node))
        .route("/api/nodes/:id", delete(nodes::delete_node))
        .route("/api/links", post(links::create_link))
        .route("/api/links/:id", put(links::update_link))
        .route("/api/links/:id", delete(links::delete_link))
        // Interchange codecs
        .route("/api/export/:format", get(interchange::export_graph))
        .route("/api/import/:format", post(interchange::import_graph))
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GraphEngine;
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let engine = Arc::new(GraphEngine::new());
        let state = Arc::new(AppState::new(engine));
        let app = create_router(state);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }
}
