//! Integration tests for the interchange codecs

use serde_json::json;
use sutra_graph::codec::{EntityCodec, GraphCodec, SchemaCodec};
use sutra_graph::types::{GraphData, Link, Node};

fn clinic_graph() -> GraphData {
    let mut patient = Node::new("p1", "Patient");
    patient.set_attribute("name", json!("Ada"));
    patient.set_attribute("age", json!("41"));

    let doctor = Node::new("d1", "Doctor");

    let mut sees = Link::new("l1", "p1", "d1", "sees");
    sees.attributes.insert("since".to_string(), json!("2024"));

    GraphData::with_data(vec![patient, doctor], vec![sees])
}

#[test]
fn test_entity_export_import_reaches_fixed_point() {
    let codec = EntityCodec;
    let graph = clinic_graph();

    // export ∘ import ∘ export must equal export for well-formed input:
    // exported documents carry no link ids or internal fields, so one
    // round trip already lands on the fixed point.
    let first = codec.export_graph(&graph).unwrap();
    let reimported = codec.import_graph(&first).unwrap();
    let second = codec.export_graph(&reimported).unwrap();
    assert_eq!(first, second);

    let third = codec.import_graph(&second).unwrap();
    assert_eq!(codec.export_graph(&third).unwrap(), second);
}

#[test]
fn test_entity_export_strips_render_fields() {
    let mut graph = clinic_graph();
    graph.nodes[0].set_attribute("x", json!(120.5));
    graph.nodes[0].set_attribute("vy", json!(-0.01));
    graph.nodes[0].set_attribute("__indexColor", json!("#0a0b0c"));
    graph.links[0]
        .attributes
        .insert("__controlPoints".to_string(), json!([1, 2]));

    let exported = EntityCodec.export_graph(&graph).unwrap();
    let entity = &exported["entities"][0];
    assert_eq!(entity["attributes"], json!({"name": "Ada", "age": "41"}));
    assert_eq!(
        exported["relationships"][0]["attributes"],
        json!({"since": "2024"})
    );
}

#[test]
fn test_entity_import_generates_ordinal_link_ids() {
    let raw = json!({
        "entities": [
            {"id": "a", "type": "Patient"},
            {"id": "b", "type": "Doctor"},
        ],
        "relationships": [
            {"predicate": "sees", "subject": "a", "object": "b"},
            {"predicate": "sees", "subject": "b", "object": "a"},
        ],
    });
    let graph = EntityCodec.import_graph(&raw).unwrap();
    assert!(graph.links[0].id.starts_with("link_0_"));
    assert!(graph.links[1].id.starts_with("link_1_"));
}

#[test]
fn test_entity_import_keeps_dangling_object_reference() {
    // Relationship import does not validate endpoint existence.
    let raw = json!({
        "entities": [{"id": "a", "type": "Patient"}],
        "relationships": [{"predicate": "sees", "subject": "a", "object": "b"}],
    });
    let graph = EntityCodec.import_graph(&raw).unwrap();
    assert_eq!(graph.link_count(), 1);
    assert_eq!(graph.links[0].target_id(), "b");
    assert!(graph.node_by_id("b").is_none());
}

#[test]
fn test_entity_import_rejects_non_object_document() {
    assert!(EntityCodec.import_graph(&json!([1, 2, 3])).is_err());
    assert!(EntityCodec.import_graph(&json!({"entities": 42})).is_err());
}

#[test]
fn test_schema_export_of_unlinked_patients() {
    let graph = GraphData::with_data(
        vec![Node::new("a", "Patient"), Node::new("b", "Patient")],
        Vec::new(),
    );
    let exported = SchemaCodec.export_graph(&graph).unwrap();
    assert_eq!(exported["entity_types"], json!({"Patient": []}));
    assert_eq!(exported["predicates"], json!({}));
}

#[test]
fn test_schema_export_resolves_endpoint_labels() {
    let exported = SchemaCodec.export_graph(&clinic_graph()).unwrap();
    assert_eq!(
        exported["predicates"]["sees"],
        json!({
            "subject_type": "Patient",
            "object_type": "Doctor",
            "attributes": ["since"],
        })
    );
    assert_eq!(exported["entity_types"]["Patient"], json!(["age", "name"]));
    assert_eq!(exported["entity_types"]["Doctor"], json!([]));
}

#[test]
fn test_schema_round_trip_produces_exemplar_preview() {
    // Schema import materializes one node per type and one link per
    // predicate/type combination - a preview, not a data restore.
    let graph = clinic_graph();
    let schema = SchemaCodec.export_graph(&graph).unwrap();
    let preview = SchemaCodec.import_graph(&schema).unwrap();

    assert_eq!(preview.node_count(), 2);
    assert_eq!(preview.link_count(), 1);

    let exemplar = preview.nodes.iter().find(|n| n.label == "Patient").unwrap();
    assert_eq!(exemplar.attribute("name"), Some(&json!("")));
    assert_eq!(exemplar.attribute("age"), Some(&json!("")));

    let link = &preview.links[0];
    assert_eq!(link.label, "sees");
    assert_eq!(link.attributes.get("since"), Some(&json!("")));

    // The preview's schema matches the original schema.
    assert_eq!(SchemaCodec.export_graph(&preview).unwrap(), schema);
}

#[test]
fn test_schema_import_collision_suffix() {
    // A type named so its exemplar id collides with another exemplar gets a
    // numeric suffix instead of overwriting it.
    let raw = json!({
        "entity_types": {"A": [], "A_0": []},
        "predicates": {},
    });
    let graph = SchemaCodec.import_graph(&raw).unwrap();
    assert_eq!(graph.node_count(), 2);

    let mut ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 2);
}

#[test]
fn test_schema_import_array_type_combinations() {
    let raw = json!({
        "entity_types": {"Doctor": [], "Nurse": [], "Patient": []},
        "predicates": {
            "consults": {
                "subject_type": ["Patient", "Nurse"],
                "object_type": "Doctor",
                "attributes": [],
            },
        },
    });
    let graph = SchemaCodec.import_graph(&raw).unwrap();
    assert_eq!(graph.link_count(), 2);

    let mut subject_labels: Vec<String> = graph
        .links
        .iter()
        .map(|l| graph.node_by_id(l.source_id()).unwrap().label.clone())
        .collect();
    subject_labels.sort_unstable();
    assert_eq!(subject_labels, ["Nurse", "Patient"]);
}
