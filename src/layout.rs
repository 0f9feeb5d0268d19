//! Parallel-edge curvature assignment
//!
//! Links sharing the same unordered endpoint pair would be drawn on top of
//! each other by the renderer. This module derives a curvature coefficient
//! per link id, spacing a group of parallel edges evenly across
//! `[-MAX_CURVATURE, MAX_CURVATURE]` and centered on 0 so pairs bow in
//! opposite directions. The map is a pure derived view: group membership can
//! shift completely when a single link is removed, so it is recomputed
//! wholesale whenever the link collection changes, never patched.

use std::collections::HashMap;

use crate::types::Link;

/// Maximum curvature magnitude handed to the renderer
pub const MAX_CURVATURE: f64 = 0.6;

/// Unordered endpoint pair key: sorted ids joined with a separator
///
/// Sorting groups links regardless of direction, so `a -> b` and `b -> a`
/// land in the same bucket.
fn pair_key(link: &Link) -> String {
    let (source, target) = (link.source_id(), link.target_id());
    if source <= target {
        format!("{}<=>{}", source, target)
    } else {
        format!("{}<=>{}", target, source)
    }
}

/// Compute curvature coefficients for the given link collection
///
/// Links absent from the returned map render straight (curvature 0); only
/// members of groups larger than one get an entry. Within a group, the i-th
/// link (in insertion order) gets `(i - (n-1)/2) * (MAX_CURVATURE / (n-1))`.
pub fn link_curvatures(links: &[Link]) -> HashMap<String, f64> {
    let mut groups: Vec<(String, Vec<&str>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for link in links {
        let key = pair_key(link);
        match index.get(&key) {
            Some(&i) => groups[i].1.push(&link.id),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![&link.id]));
            }
        }
    }

    let mut curvatures = HashMap::new();
    for (_, members) in groups {
        let n = members.len();
        if n <= 1 {
            continue;
        }
        let step = MAX_CURVATURE / (n - 1).max(1) as f64;
        for (i, id) in members.into_iter().enumerate() {
            let curvature = (i as f64 - (n - 1) as f64 / 2.0) * step;
            curvatures.insert(id.to_string(), curvature);
        }
    }
    curvatures
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Node;

    fn link(id: &str, source: &str, target: &str) -> Link {
        Link::new(id, source, target, "rel")
    }

    #[test]
    fn test_single_link_gets_no_entry() {
        let links = vec![link("l1", "a", "b")];
        assert!(link_curvatures(&links).is_empty());
    }

    #[test]
    fn test_pair_bows_in_opposite_directions() {
        let links = vec![link("l1", "a", "b"), link("l2", "a", "b")];
        let curvatures = link_curvatures(&links);

        let c1 = curvatures["l1"];
        let c2 = curvatures["l2"];
        assert!((c1 + c2).abs() < f64::EPSILON);
        assert!((c1.abs() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_direction_is_ignored_when_grouping() {
        let links = vec![link("l1", "a", "b"), link("l2", "b", "a")];
        let curvatures = link_curvatures(&links);
        assert_eq!(curvatures.len(), 2);
        assert!((curvatures["l1"] + curvatures["l2"]).abs() < f64::EPSILON);
    }

    #[test]
    fn test_odd_group_is_symmetric_with_straight_middle() {
        let links = vec![
            link("l1", "a", "b"),
            link("l2", "a", "b"),
            link("l3", "b", "a"),
        ];
        let curvatures = link_curvatures(&links);

        assert!((curvatures["l1"] + 0.3).abs() < 1e-12);
        assert!(curvatures["l2"].abs() < f64::EPSILON);
        assert!((curvatures["l3"] - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_group_spans_full_range() {
        let links: Vec<Link> = (0..4).map(|i| link(&format!("l{}", i), "a", "b")).collect();
        let curvatures = link_curvatures(&links);

        // Extremes are always ±MAX_CURVATURE/2: step shrinks as the group grows
        assert!((curvatures["l0"] + MAX_CURVATURE / 2.0).abs() < 1e-12);
        assert!((curvatures["l3"] - MAX_CURVATURE / 2.0).abs() < 1e-12);
        let sum: f64 = curvatures.values().sum();
        assert!(sum.abs() < 1e-12);
    }

    #[test]
    fn test_inline_endpoints_group_with_id_endpoints() {
        let inline = Link::new("l1", Node::new("a", "Patient"), "b", "rel");
        let links = vec![inline, link("l2", "a", "b")];
        let curvatures = link_curvatures(&links);
        assert_eq!(curvatures.len(), 2);
    }

    #[test]
    fn test_distinct_pairs_stay_straight() {
        let links = vec![link("l1", "a", "b"), link("l2", "a", "c")];
        assert!(link_curvatures(&links).is_empty());
    }
}
