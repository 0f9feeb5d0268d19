//! Graph container type

use serde::{Deserialize, Serialize};

use super::{Link, Node};

/// Canonical graph state: the node and link collections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphData {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl GraphData {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph from node and link collections
    pub fn with_data(nodes: Vec<Node>, links: Vec<Link>) -> Self {
        Self { nodes, links }
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty()
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of links
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Find a node by id
    pub fn node_by_id(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Find a link by id
    pub fn link_by_id(&self, id: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.id == id)
    }

    /// Copy of the graph with every link endpoint collapsed to a bare id
    ///
    /// This is the shape expected by the persistence contract.
    pub fn normalized(&self) -> GraphData {
        GraphData {
            nodes: self.nodes.clone(),
            links: self.links.iter().map(Link::normalized).collect(),
        }
    }
}
