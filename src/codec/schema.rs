//! LPG schema interchange codec (type level)
//!
//! Export infers `{entity_types, predicates}` from instance data: property
//! keys per node label, and subject/object label sets per predicate. No
//! property values cross this boundary.
//!
//! Import goes the other way by materializing one exemplar node per entity
//! type and one exemplar link per (predicate × subject-type × object-type)
//! combination, every declared attribute initialized to the empty string.
//! That is a schema preview, not a data restore: exemplar links wire to the
//! lowest-insertion-order exemplar of each type, and real relationship
//! instances are not reconstructed.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde_json::{json, Map, Value};

use crate::error::{GraphError, GraphResult};
use crate::types::{GraphData, Link, Node, NodeRef};
use crate::utils::schema_edge_id;

use super::{GraphCodec, INTERNAL_LINK_FIELDS, INTERNAL_NODE_FIELDS};

/// Type-level codec used by the schema editor tool
pub struct SchemaCodec;

/// Accumulated type information for one predicate label
#[derive(Default)]
struct PredicateInfo {
    subject_types: BTreeSet<String>,
    object_types: BTreeSet<String>,
    attributes: BTreeSet<String>,
}

impl GraphCodec for SchemaCodec {
    fn export_graph(&self, graph: &GraphData) -> GraphResult<Value> {
        let mut entity_types: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        let mut predicates: BTreeMap<String, PredicateInfo> = BTreeMap::new();

        for node in &graph.nodes {
            if node.label.is_empty() {
                continue;
            }
            let keys = entity_types.entry(node.label.clone()).or_default();
            for key in node.attributes.keys() {
                if !INTERNAL_NODE_FIELDS.contains(&key.as_str()) {
                    keys.insert(key.clone());
                }
            }
        }

        for link in &graph.links {
            if link.label.is_empty() {
                continue;
            }
            let source = graph.node_by_id(link.source_id());
            let target = graph.node_by_id(link.target_id());
            let (Some(source), Some(target)) = (source, target) else {
                skip_warning(&link.label);
                continue;
            };
            if source.label.is_empty() || target.label.is_empty() {
                skip_warning(&link.label);
                continue;
            }

            let info = predicates.entry(link.label.clone()).or_default();
            info.subject_types.insert(source.label.clone());
            info.object_types.insert(target.label.clone());
            for key in link.attributes.keys() {
                if !INTERNAL_LINK_FIELDS.contains(&key.as_str()) {
                    info.attributes.insert(key.clone());
                }
            }
        }

        let entity_types: Map<String, Value> = entity_types
            .into_iter()
            .map(|(label, keys)| (label, json!(keys.into_iter().collect::<Vec<_>>())))
            .collect();

        let predicates: Map<String, Value> = predicates
            .into_iter()
            .map(|(label, info)| {
                (
                    label,
                    json!({
                        "subject_type": one_or_many(info.subject_types),
                        "object_type": one_or_many(info.object_types),
                        "attributes": info.attributes.into_iter().collect::<Vec<_>>(),
                    }),
                )
            })
            .collect();

        Ok(json!({
            "entity_types": entity_types,
            "predicates": predicates,
        }))
    }

    fn import_graph(&self, raw: &Value) -> GraphResult<GraphData> {
        let (Some(Value::Object(entity_types)), Some(Value::Object(predicates))) =
            (raw.get("entity_types"), raw.get("predicates"))
        else {
            return Err(GraphError::format(
                "missing entity_types or predicates",
            ));
        };

        let mut graph = GraphData::new();
        let mut used_ids: HashSet<String> = HashSet::new();

        for (index, (entity_type, attributes)) in entity_types.iter().enumerate() {
            let id = exemplar_node_id(entity_type, index, &mut used_ids);
            let mut node = Node::new(id, entity_type.clone());
            for attribute in declared_attributes(attributes) {
                node.set_attribute(attribute, json!(""));
            }
            graph.nodes.push(node);
        }

        for (predicate_type, predicate) in predicates {
            let subject_types = type_list(predicate.get("subject_type"));
            let object_types = type_list(predicate.get("object_type"));
            let attributes = declared_attributes(
                predicate.get("attributes").unwrap_or(&Value::Null),
            );

            for subject_type in &subject_types {
                // Lowest insertion-order exemplar of each declared type
                let Some(source) = graph.nodes.iter().find(|n| &n.label == subject_type)
                else {
                    continue;
                };
                let source_id = source.id.clone();

                for object_type in &object_types {
                    let Some(target) = graph.nodes.iter().find(|n| &n.label == object_type)
                    else {
                        continue;
                    };
                    let mut link = Link {
                        id: schema_edge_id(&source_id, predicate_type, &target.id),
                        source: NodeRef::Id(source_id.clone()),
                        target: NodeRef::Id(target.id.clone()),
                        label: predicate_type.clone(),
                        attributes: Map::new(),
                    };
                    for attribute in &attributes {
                        link.attributes.insert(attribute.clone(), json!(""));
                    }
                    graph.links.push(link);
                }
            }
        }

        Ok(graph)
    }
}

fn skip_warning(label: &str) {
    eprintln!(
        "[Schema] Skipping link \"{}\" for schema due to missing source/target node or label.",
        label
    );
}

/// Collapse a type set to a bare string when it has a single member
fn one_or_many(types: BTreeSet<String>) -> Value {
    let mut types: Vec<String> = types.into_iter().collect();
    if types.len() == 1 {
        json!(types.remove(0))
    } else {
        json!(types)
    }
}

/// Normalize a declared `subject_type`/`object_type` to a list of type names
fn type_list(raw: Option<&Value>) -> Vec<String> {
    match raw {
        Some(Value::String(single)) => vec![single.clone()],
        Some(Value::Array(many)) => many
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Declared attribute names, dropping non-string entries
fn declared_attributes(raw: &Value) -> Vec<String> {
    match raw {
        Value::Array(names) => names
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// `<type>_<ordinal>` with a numeric suffix appended on collision
fn exemplar_node_id(entity_type: &str, index: usize, used: &mut HashSet<String>) -> String {
    let base = format!("{}_{}", entity_type, index);
    let mut id = base.clone();
    let mut counter = 1;
    while used.contains(&id) {
        id = format!("{}_{}", base, counter);
        counter += 1;
    }
    used.insert(id.clone());
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_export_nodes_only() {
        let graph = GraphData::with_data(
            vec![Node::new("a", "Patient"), Node::new("b", "Patient")],
            Vec::new(),
        );
        let exported = SchemaCodec.export_graph(&graph).unwrap();
        assert_eq!(exported["entity_types"], json!({"Patient": []}));
        assert_eq!(exported["predicates"], json!({}));
    }

    #[test]
    fn test_export_single_predicate_collapses_to_string() {
        let graph = GraphData::with_data(
            vec![Node::new("a", "Patient"), Node::new("b", "Doctor")],
            vec![Link::new("l1", "a", "b", "sees")],
        );
        let exported = SchemaCodec.export_graph(&graph).unwrap();
        assert_eq!(
            exported["predicates"]["sees"],
            json!({"subject_type": "Patient", "object_type": "Doctor", "attributes": []})
        );
    }

    #[test]
    fn test_export_multiple_subject_types_become_sorted_array() {
        let graph = GraphData::with_data(
            vec![
                Node::new("a", "Patient"),
                Node::new("b", "Doctor"),
                Node::new("c", "Nurse"),
            ],
            vec![
                Link::new("l1", "c", "b", "sees"),
                Link::new("l2", "a", "b", "sees"),
            ],
        );
        let exported = SchemaCodec.export_graph(&graph).unwrap();
        assert_eq!(
            exported["predicates"]["sees"]["subject_type"],
            json!(["Nurse", "Patient"])
        );
    }

    #[test]
    fn test_export_skips_link_with_unresolvable_endpoint() {
        let graph = GraphData::with_data(
            vec![Node::new("a", "Patient")],
            vec![Link::new("l1", "a", "ghost", "sees")],
        );
        let exported = SchemaCodec.export_graph(&graph).unwrap();
        assert_eq!(exported["predicates"], json!({}));
    }

    #[test]
    fn test_export_collects_property_keys_across_instances() {
        let mut first = Node::new("a", "Patient");
        first.set_attribute("name", json!("Ada"));
        let mut second = Node::new("b", "Patient");
        second.set_attribute("age", json!("41"));
        second.set_attribute("x", json!(3.5)); // render field, excluded

        let graph = GraphData::with_data(vec![first, second], Vec::new());
        let exported = SchemaCodec.export_graph(&graph).unwrap();
        assert_eq!(exported["entity_types"]["Patient"], json!(["age", "name"]));
    }

    #[test]
    fn test_import_materializes_one_exemplar_per_type() {
        let raw = json!({
            "entity_types": {"Doctor": ["name"], "Patient": []},
            "predicates": {},
        });
        let graph = SchemaCodec.import_graph(&raw).unwrap();
        assert_eq!(graph.node_count(), 2);

        let doctor = graph.nodes.iter().find(|n| n.label == "Doctor").unwrap();
        assert_eq!(doctor.attribute("name"), Some(&json!("")));
        assert!(doctor.id.starts_with("Doctor_"));
    }

    #[test]
    fn test_import_wires_exemplar_link_per_type_combination() {
        let raw = json!({
            "entity_types": {"Doctor": [], "Hospital": [], "Patient": []},
            "predicates": {
                "visits": {
                    "subject_type": "Patient",
                    "object_type": ["Doctor", "Hospital"],
                    "attributes": ["date"],
                },
            },
        });
        let graph = SchemaCodec.import_graph(&raw).unwrap();
        assert_eq!(graph.link_count(), 2);
        for link in &graph.links {
            assert_eq!(link.label, "visits");
            assert_eq!(link.attributes.get("date"), Some(&json!("")));
            assert_eq!(
                graph.node_by_id(link.source_id()).unwrap().label,
                "Patient"
            );
        }
    }

    #[test]
    fn test_import_skips_predicate_with_undeclared_type() {
        let raw = json!({
            "entity_types": {"Patient": []},
            "predicates": {
                "sees": {"subject_type": "Patient", "object_type": "Doctor", "attributes": []},
            },
        });
        let graph = SchemaCodec.import_graph(&raw).unwrap();
        assert_eq!(graph.link_count(), 0);
    }

    #[test]
    fn test_import_requires_both_keys() {
        assert!(SchemaCodec
            .import_graph(&json!({"entity_types": {}}))
            .is_err());
        assert!(SchemaCodec
            .import_graph(&json!({"predicates": {}}))
            .is_err());
    }
}
