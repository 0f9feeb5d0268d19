//! Link type and the id-or-object endpoint union

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Node;

/// Endpoint reference held by a link
///
/// The force-graph client rewrites `source`/`target` from an id string to a
/// full node object in place after layout, so both representations must be
/// accepted everywhere a link is read. [`NodeRef::id`] is the single point
/// of normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeRef {
    Id(String),
    Inline(Box<Node>),
}

impl NodeRef {
    /// The endpoint's node id regardless of representation
    pub fn id(&self) -> &str {
        match self {
            NodeRef::Id(id) => id,
            NodeRef::Inline(node) => &node.id,
        }
    }

    /// The cached node object, if this endpoint holds one
    pub fn as_inline(&self) -> Option<&Node> {
        match self {
            NodeRef::Id(_) => None,
            NodeRef::Inline(node) => Some(node),
        }
    }

    /// Whether this endpoint holds a cached node object
    pub fn is_inline(&self) -> bool {
        matches!(self, NodeRef::Inline(_))
    }
}

impl From<&str> for NodeRef {
    fn from(id: &str) -> Self {
        NodeRef::Id(id.to_string())
    }
}

impl From<String> for NodeRef {
    fn from(id: String) -> Self {
        NodeRef::Id(id)
    }
}

impl From<Node> for NodeRef {
    fn from(node: Node) -> Self {
        NodeRef::Inline(Box::new(node))
    }
}

/// Directed edge between two nodes
///
/// `label` is the predicate/relationship type. The open `attributes` map
/// follows the same convention as [`Node::attributes`], including tolerance
/// of renderer caches (`index`, `__controlPoints`, `__indexColor`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    pub source: NodeRef,
    pub target: NodeRef,
    #[serde(default)]
    pub label: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Link {
    /// Create a link with no attributes
    pub fn new(
        id: impl Into<String>,
        source: impl Into<NodeRef>,
        target: impl Into<NodeRef>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            label: label.into(),
            attributes: Map::new(),
        }
    }

    /// Normalized source node id
    pub fn source_id(&self) -> &str {
        self.source.id()
    }

    /// Normalized target node id
    pub fn target_id(&self) -> &str {
        self.target.id()
    }

    /// Whether either endpoint resolves to the given node id
    pub fn touches(&self, node_id: &str) -> bool {
        self.source_id() == node_id || self.target_id() == node_id
    }

    /// Copy of this link with both endpoints collapsed to bare ids
    pub fn normalized(&self) -> Link {
        Link {
            id: self.id.clone(),
            source: NodeRef::Id(self.source_id().to_string()),
            target: NodeRef::Id(self.target_id().to_string()),
            label: self.label.clone(),
            attributes: self.attributes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_ref_deserializes_both_shapes() {
        let by_id: NodeRef = serde_json::from_value(json!("a")).unwrap();
        assert_eq!(by_id.id(), "a");
        assert!(!by_id.is_inline());

        let inline: NodeRef =
            serde_json::from_value(json!({"id": "a", "label": "Patient"})).unwrap();
        assert_eq!(inline.id(), "a");
        assert_eq!(inline.as_inline().unwrap().label, "Patient");
    }

    #[test]
    fn test_normalized_collapses_inline_endpoints() {
        let link = Link::new("l1", Node::new("a", "Patient"), "b", "sees");
        assert!(link.source.is_inline());

        let normalized = link.normalized();
        assert!(!normalized.source.is_inline());
        assert_eq!(normalized.source_id(), "a");
        assert_eq!(normalized.target_id(), "b");
    }

    #[test]
    fn test_touches_normalizes_both_endpoints() {
        let link = Link::new("l1", "a", Node::new("b", "Doctor"), "sees");
        assert!(link.touches("a"));
        assert!(link.touches("b"));
        assert!(!link.touches("c"));
    }
}
