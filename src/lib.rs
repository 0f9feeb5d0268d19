//! Sutra Graph - Labeled-Property-Graph Workbench Engine
//!
//! The shared core behind the graph editing tools: an in-memory node/link
//! graph with referential-integrity invariants, parallel-edge layout hints
//! for a force-directed renderer, and two interchange formats with their
//! round-trip transformations.
//!
//! # Features
//!
//! - **Mutation Engine**: Atomic add/update/delete with cascade deletion and
//!   selection consistency
//! - **Dual Endpoint Representation**: Links accept node-id strings or cached
//!   node objects everywhere, normalized through one accessor
//! - **Layout Annotator**: Deterministic curvature assignment for parallel
//!   edges
//! - **Interchange Codecs**: Entity/relationship instance form and LPG
//!   schema form, selected per tool through one trait
//! - **Edge Draft**: The canvas interaction state machine for picking edge
//!   endpoints before an edge exists
//! - **HTTP API**: Axum REST service with optional file persistence and a
//!   degraded "local mode" when persistence is absent
//!
//! # Modules
//!
//! - `types`: Core data structures (Node, Link, NodeRef, GraphData)
//! - `engine`: Mutation engine and the edge-creation draft
//! - `layout`: Parallel-edge curvature assignment
//! - `codec`: Interchange codecs and the codec strategy trait
//! - `validation`: Input validation for the interactive mutation paths
//! - `persistence`: Optional on-disk graph document
//! - `api`: Axum REST endpoints
//! - `utils`: Timestamps and id generation
//!
//! # Example
//!
//! ```
//! use sutra_graph::engine::{EdgeDraft, GraphEngine, SelectionSlot};
//! use sutra_graph::types::Node;
//!
//! let engine = GraphEngine::new();
//! engine.add_node(Node::new("a", "Patient")).unwrap();
//! engine.add_node(Node::new("b", "Doctor")).unwrap();
//!
//! let mut draft = EdgeDraft::create();
//! draft.start_selecting(SelectionSlot::Source);
//! draft.assign_node("a");
//! draft.start_selecting(SelectionSlot::Target);
//! draft.assign_node("b");
//! draft.label = "sees".to_string();
//!
//! let link = engine.commit_draft(draft).unwrap();
//! assert_eq!(link.source_id(), "a");
//! ```

pub mod api;
pub mod codec;
pub mod engine;
pub mod error;
pub mod layout;
pub mod persistence;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export commonly used items at crate root
pub use codec::{EntityCodec, GraphCodec, SchemaCodec};
pub use engine::{EdgeDraft, GraphEngine, SelectionSlot};
pub use error::{GraphError, GraphResult};
pub use layout::link_curvatures;
pub use types::{GraphData, Link, Node, NodeRef};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
