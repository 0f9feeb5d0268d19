//! Id generation for nodes and links
//!
//! Ids embed a millisecond timestamp; uniqueness within a single graph is the
//! caller's responsibility beyond that (conflicting ids are last-write-wins
//! at the engine level).

use rand::Rng;

use super::time::timestamp_millis;

/// Generate an id for an interactively created node: `node_<millis>`
pub fn node_id() -> String {
    format!("node_{}", timestamp_millis())
}

/// Generate an id for an interactively created edge: `edge_<millis>`
pub fn edge_id() -> String {
    format!("edge_{}", timestamp_millis())
}

/// Generate an id for a link materialized from an instance import:
/// `link_<ordinal>_<millis>`
pub fn imported_link_id(ordinal: usize) -> String {
    format!("link_{}_{}", ordinal, timestamp_millis())
}

/// Generate an id for an exemplar edge materialized from a schema import
///
/// Includes both endpoints and the predicate plus a random disambiguator, so
/// repeated imports within the same millisecond stay collision-free.
pub fn schema_edge_id(source: &str, predicate: &str, target: &str) -> String {
    let salt: u32 = rand::thread_rng().gen_range(0..1000);
    format!(
        "{}_{}_{}_{}_{}",
        source,
        predicate,
        target,
        timestamp_millis(),
        salt
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_pattern() {
        let id = node_id();
        assert!(id.starts_with("node_"));
        assert!(id["node_".len()..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_imported_link_id_carries_ordinal() {
        let id = imported_link_id(7);
        assert!(id.starts_with("link_7_"));
    }

    #[test]
    fn test_schema_edge_id_embeds_endpoints_and_predicate() {
        let id = schema_edge_id("Patient_0", "sees", "Doctor_1");
        assert!(id.starts_with("Patient_0_sees_Doctor_1_"));
    }
}
