//! Interchange codecs
//!
//! Two formats convert between the in-memory graph and downloadable JSON:
//! the entity/relationship instance form ([`entity::EntityCodec`]) and the
//! LPG schema form ([`schema::SchemaCodec`]). The three graph tools share one
//! mutation engine and pick their codec through the [`GraphCodec`] trait
//! instead of carrying per-tool copies of the conversion logic.

pub mod entity;
pub mod schema;

pub use entity::EntityCodec;
pub use schema::SchemaCodec;

use serde_json::{Map, Value};

use crate::error::GraphResult;
use crate::types::GraphData;

/// Node fields owned by the renderer or the identity scheme, excluded from
/// every interchange view
pub const INTERNAL_NODE_FIELDS: &[&str] = &[
    "id",
    "label",
    "x",
    "y",
    "vx",
    "vy",
    "index",
    "fx",
    "fy",
    "__indexColor",
];

/// Link fields owned by the renderer or the identity scheme, excluded from
/// every interchange view
pub const INTERNAL_LINK_FIELDS: &[&str] = &[
    "id",
    "label",
    "source",
    "target",
    "index",
    "__controlPoints",
    "__indexColor",
];

/// Strategy interface for graph ⇄ interchange-JSON conversion
pub trait GraphCodec {
    /// Convert the graph into its interchange document
    fn export_graph(&self, graph: &GraphData) -> GraphResult<Value>;

    /// Parse an interchange document into a graph, all-or-nothing
    fn import_graph(&self, raw: &Value) -> GraphResult<GraphData>;
}

/// Look up a codec by its wire format name
pub fn codec_for(format: &str) -> Option<Box<dyn GraphCodec + Send + Sync>> {
    match format {
        "entities" => Some(Box::new(EntityCodec)),
        "schema" => Some(Box::new(SchemaCodec)),
        _ => None,
    }
}

/// Copy of an attribute map with internal fields removed
pub(crate) fn semantic_attributes(
    attributes: &Map<String, Value>,
    internal: &[&str],
) -> Map<String, Value> {
    attributes
        .iter()
        .filter(|(key, _)| !internal.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
