//! Entity/relationship interchange codec (instance level)
//!
//! Export produces `{entities, relationships}` arrays carrying every node and
//! link instance. Import accepts two shapes behind the same entry point: the
//! array shape written by [`EntityCodec::export_graph`] and the keyed-map
//! shape (`entities`/`predicates` objects keyed by id) that the read-only
//! viewer receives. Files are accepted or rejected wholesale; individual
//! entries missing required fields are skipped, and relationship endpoints
//! are NOT checked against the entity list (dangling ids import as-is).

use serde_json::{json, Map, Value};

use crate::error::{GraphError, GraphResult};
use crate::types::{GraphData, Link, Node, NodeRef};
use crate::utils::imported_link_id;

use super::{semantic_attributes, GraphCodec, INTERNAL_LINK_FIELDS, INTERNAL_NODE_FIELDS};

/// Instance-level codec used by the editor tools
pub struct EntityCodec;

impl GraphCodec for EntityCodec {
    fn export_graph(&self, graph: &GraphData) -> GraphResult<Value> {
        let mut entities = Vec::new();
        let mut relationships = Vec::new();

        for node in &graph.nodes {
            // Nodes without an id or label cannot round-trip; skip silently
            if node.id.is_empty() || node.label.is_empty() {
                continue;
            }
            entities.push(json!({
                "id": node.id,
                "type": node.label,
                "attributes": semantic_attributes(&node.attributes, INTERNAL_NODE_FIELDS),
            }));
        }

        for link in &graph.links {
            if link.label.is_empty() || link.source_id().is_empty() || link.target_id().is_empty()
            {
                continue;
            }
            relationships.push(json!({
                "predicate": link.label,
                "subject": link.source_id(),
                "object": link.target_id(),
                "attributes": semantic_attributes(&link.attributes, INTERNAL_LINK_FIELDS),
            }));
        }

        Ok(json!({
            "entities": entities,
            "relationships": relationships,
        }))
    }

    fn import_graph(&self, raw: &Value) -> GraphResult<GraphData> {
        match raw.get("entities") {
            Some(Value::Array(entities)) => {
                let Some(Value::Array(relationships)) = raw.get("relationships") else {
                    return Err(GraphError::format(
                        "missing entities or relationships",
                    ));
                };
                Ok(import_array_shape(entities, relationships))
            }
            Some(Value::Object(entities)) => {
                let Some(Value::Object(predicates)) = raw.get("predicates") else {
                    return Err(GraphError::format("missing entities or predicates"));
                };
                Ok(import_keyed_shape(entities, predicates))
            }
            _ => Err(GraphError::format("missing entities or relationships")),
        }
    }
}

/// Array shape: `entities: [{id, type, attributes}]`,
/// `relationships: [{predicate, subject, object, attributes}]`
fn import_array_shape(entities: &[Value], relationships: &[Value]) -> GraphData {
    let mut graph = GraphData::new();

    for entity in entities {
        let (Some(id), Some(entity_type)) = (
            entity.get("id").and_then(Value::as_str),
            entity.get("type").and_then(Value::as_str),
        ) else {
            continue;
        };
        if id.is_empty() || entity_type.is_empty() {
            continue;
        }
        graph.nodes.push(Node::with_attributes(
            id,
            entity_type,
            attributes_of(entity),
        ));
    }

    for (index, relationship) in relationships.iter().enumerate() {
        let (Some(predicate), Some(subject), Some(object)) = (
            relationship.get("predicate").and_then(Value::as_str),
            relationship.get("subject").and_then(Value::as_str),
            relationship.get("object").and_then(Value::as_str),
        ) else {
            continue;
        };
        if predicate.is_empty() || subject.is_empty() || object.is_empty() {
            continue;
        }
        graph.links.push(Link {
            id: imported_link_id(index),
            source: NodeRef::Id(subject.to_string()),
            target: NodeRef::Id(object.to_string()),
            label: predicate.to_string(),
            attributes: attributes_of(relationship),
        });
    }

    graph
}

/// Keyed-map shape: `entities`/`predicates` are objects keyed by id, each
/// value carrying `type` (plus `subject`/`object` for predicates)
fn import_keyed_shape(
    entities: &Map<String, Value>,
    predicates: &Map<String, Value>,
) -> GraphData {
    let mut graph = GraphData::new();

    for (id, entity) in entities {
        let Some(entity_type) = entity.get("type").and_then(Value::as_str) else {
            continue;
        };
        graph.nodes.push(Node::with_attributes(
            id.clone(),
            entity_type,
            keyed_attributes(entity),
        ));
    }

    for (key, predicate) in predicates {
        let (Some(predicate_type), Some(subject), Some(object)) = (
            predicate.get("type").and_then(Value::as_str),
            predicate.get("subject").and_then(Value::as_str),
            predicate.get("object").and_then(Value::as_str),
        ) else {
            continue;
        };
        graph.links.push(Link {
            id: format!("link_{}", key),
            source: NodeRef::Id(subject.to_string()),
            target: NodeRef::Id(object.to_string()),
            label: predicate_type.to_string(),
            attributes: attributes_of(predicate),
        });
    }

    graph
}

/// The entry's `attributes` object, or empty when absent/malformed
fn attributes_of(entry: &Value) -> Map<String, Value> {
    match entry.get("attributes") {
        Some(Value::Object(attributes)) => attributes.clone(),
        _ => Map::new(),
    }
}

/// Keyed-map entity attributes: the `attributes` object when present,
/// otherwise every field other than `type`
fn keyed_attributes(entity: &Value) -> Map<String, Value> {
    if let Some(Value::Object(attributes)) = entity.get("attributes") {
        return attributes.clone();
    }
    match entity {
        Value::Object(fields) => fields
            .iter()
            .filter(|(key, _)| key.as_str() != "type")
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
        _ => Map::new(),
    }
}
