//! Data types for the graph workbench
//!
//! This module contains the core data structures shared by the mutation
//! engine, the layout annotator, and the interchange codecs.

mod graph;
mod link;
mod node;

pub use graph::GraphData;
pub use link::{Link, NodeRef};
pub use node::Node;
