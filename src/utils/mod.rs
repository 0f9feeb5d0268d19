//! Utility functions (timestamps, id generation)

pub mod id;
pub mod time;

pub use id::{edge_id, imported_link_id, node_id, schema_edge_id};
pub use time::timestamp_millis;
