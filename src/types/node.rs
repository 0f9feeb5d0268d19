//! Node type for the property graph

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Node in the property graph
///
/// `label` carries the semantic type of the node (e.g. "Patient"). Every
/// other property lives in the open `attributes` map, which is flattened on
/// the wire. That map also absorbs render-owned fields (`x`, `y`, `vx`,
/// `fx`, ...) written in place by the force-graph client; the core tolerates
/// them and filters them at the interchange boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Node {
    /// Create a node with no attributes
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            attributes: Map::new(),
        }
    }

    /// Create a node with an attribute map
    pub fn with_attributes(
        id: impl Into<String>,
        label: impl Into<String>,
        attributes: Map<String, Value>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            attributes,
        }
    }

    /// Get an attribute value by key
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Set an attribute value, replacing any existing one
    pub fn set_attribute(&mut self, key: impl Into<String>, value: Value) {
        self.attributes.insert(key.into(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_attributes_flatten_on_the_wire() {
        let mut node = Node::new("a", "Patient");
        node.set_attribute("name", json!("Ada"));

        let raw = serde_json::to_value(&node).unwrap();
        assert_eq!(raw["id"], "a");
        assert_eq!(raw["label"], "Patient");
        assert_eq!(raw["name"], "Ada");
    }

    #[test]
    fn test_render_fields_are_tolerated() {
        let raw = json!({"id": "a", "label": "Patient", "x": 1.5, "vy": -0.2, "index": 0});
        let node: Node = serde_json::from_value(raw).unwrap();
        assert_eq!(node.id, "a");
        assert_eq!(node.attribute("x"), Some(&json!(1.5)));
    }
}
