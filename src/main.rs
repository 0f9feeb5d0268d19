//! Sutra Graph Server - Binary Entry Point

use std::env;
use std::sync::Arc;

use sutra_graph::api::http::create_router;
use sutra_graph::api::state::AppState;
use sutra_graph::engine::GraphEngine;
use sutra_graph::persistence::GraphFile;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let bind_addr = env::var("GRAPH_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3001".to_string());

    let persistence = GraphFile::from_env();
    let engine = match &persistence {
        Some(file) => match file.load() {
            Ok(graph) => {
                eprintln!(
                    "[Server] Loaded {} nodes, {} links from {}",
                    graph.node_count(),
                    graph.link_count(),
                    file.path().display()
                );
                Arc::new(GraphEngine::with_graph(graph))
            }
            Err(err) => {
                // Local mode: the in-memory graph still works, it just
                // starts empty and nothing is persisted back.
                eprintln!("[Server] Failed to load graph file: {}", err);
                eprintln!("[Server] Working in local mode");
                Arc::new(GraphEngine::new())
            }
        },
        None => {
            eprintln!("[Server] No GRAPH_FILE_PATH set - working in local mode");
            Arc::new(GraphEngine::new())
        }
    };

    let state = Arc::new(AppState::with_persistence(engine, persistence));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    eprintln!("[Server] Listening on {}", bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
