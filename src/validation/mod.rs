//! Input validation for nodes, links, and their attribute maps
//!
//! These checks guard the interactive mutation paths. Wholesale replacement
//! (import) bypasses them on purpose: imported data is validated at the file
//! level by the codecs, and tolerated element-wise (dangling endpoints and
//! self-loops may exist after an import).

use serde_json::{Map, Value};

use crate::error::{GraphError, GraphResult};
use crate::types::{Link, Node};

/// Reject blank labels
pub fn validate_label(label: &str, kind: &str) -> GraphResult<()> {
    if label.trim().is_empty() {
        return Err(GraphError::validation(format!("{} label is required", kind)));
    }
    Ok(())
}

/// Reject attribute maps containing empty-named properties
///
/// An empty key is a validation error, never a silently-dropped field.
pub fn validate_attribute_keys(attributes: &Map<String, Value>) -> GraphResult<()> {
    if attributes.keys().any(|k| k.trim().is_empty()) {
        return Err(GraphError::validation(
            "Property names cannot be empty. Please fill in or remove the empty property.",
        ));
    }
    Ok(())
}

/// Validate a node for the interactive add/edit paths
pub fn validate_node(node: &Node) -> GraphResult<()> {
    if node.id.trim().is_empty() {
        return Err(GraphError::validation("Node id is required"));
    }
    validate_label(&node.label, "Node")?;
    validate_attribute_keys(&node.attributes)
}

/// Validate a link for the interactive edit path (endpoints already fixed)
pub fn validate_link(link: &Link) -> GraphResult<()> {
    if link.id.trim().is_empty() {
        return Err(GraphError::validation("Edge id is required"));
    }
    if link.source_id().is_empty() {
        return Err(GraphError::validation("Please select a source node."));
    }
    if link.target_id().is_empty() {
        return Err(GraphError::validation("Please select a target node."));
    }
    validate_label(&link.label, "Edge")?;
    validate_attribute_keys(&link.attributes)
}

/// Validate a link for the interactive create path
///
/// Same as [`validate_link`] plus the self-loop rejection that only applies
/// when an edge is first created.
pub fn validate_new_link(link: &Link) -> GraphResult<()> {
    validate_link(link)?;
    if link.source_id() == link.target_id() {
        return Err(GraphError::validation(
            "Source and target nodes cannot be the same.",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_label_rejected() {
        let node = Node::new("a", "  ");
        assert!(validate_node(&node).is_err());
    }

    #[test]
    fn test_empty_property_name_rejected() {
        let mut node = Node::new("a", "Patient");
        node.set_attribute("", json!("value"));
        let err = validate_node(&node).unwrap_err();
        assert!(err.to_string().contains("Property names cannot be empty"));
    }

    #[test]
    fn test_self_loop_rejected_on_create_only() {
        let link = Link::new("l1", "a", "a", "sees");
        assert!(validate_new_link(&link).is_err());
        // Editing an existing self-loop (e.g. one that arrived via import)
        // does not re-reject it.
        assert!(validate_link(&link).is_ok());
    }

    #[test]
    fn test_well_formed_link_passes() {
        let link = Link::new("l1", "a", "b", "sees");
        assert!(validate_new_link(&link).is_ok());
    }
}
