//! Mutation operations for the graph engine
//!
//! Every function takes the engine lock once and leaves the state consistent:
//! a node never disappears without its incident links, and a selection never
//! outlives the element it referenced.

use crate::error::GraphResult;
use crate::types::{GraphData, Link, Node, NodeRef};
use crate::validation::{validate_link, validate_new_link, validate_node};

use super::GraphEngine;

/// Append a node; no link changes
pub fn add_node(engine: &GraphEngine, node: Node) -> GraphResult<()> {
    validate_node(&node)?;
    engine.state.lock().graph.nodes.push(node);
    Ok(())
}

/// Replace the node with the matching id and rewrite cached object references
///
/// Links that hold the edited node as an inline object would otherwise keep
/// serving stale labels/attributes; links that hold the endpoint as a bare id
/// string are untouched because the id never changes.
pub fn update_node(engine: &GraphEngine, node: Node) -> GraphResult<bool> {
    validate_node(&node)?;
    let mut state = engine.state.lock();

    let Some(slot) = state.graph.nodes.iter_mut().find(|n| n.id == node.id) else {
        return Ok(false);
    };
    *slot = node.clone();

    for link in &mut state.graph.links {
        if link.source.is_inline() && link.source_id() == node.id {
            link.source = NodeRef::Inline(Box::new(node.clone()));
        }
        if link.target.is_inline() && link.target_id() == node.id {
            link.target = NodeRef::Inline(Box::new(node.clone()));
        }
    }
    Ok(true)
}

/// Remove a node and cascade to every link touching it
pub fn delete_node(engine: &GraphEngine, node_id: &str) -> bool {
    let mut state = engine.state.lock();
    if state.graph.node_by_id(node_id).is_none() {
        return false;
    }

    state.graph.nodes.retain(|n| n.id != node_id);
    let removed_links: Vec<String> = state
        .graph
        .links
        .iter()
        .filter(|l| l.touches(node_id))
        .map(|l| l.id.clone())
        .collect();
    state.graph.links.retain(|l| !l.touches(node_id));

    if state.selected_node.as_deref() == Some(node_id) {
        state.selected_node = None;
    }
    if let Some(selected) = &state.selected_link {
        if removed_links.iter().any(|id| id == selected) {
            state.selected_link = None;
        }
    }
    true
}

/// Append a link; interactive creation, so self-loops are rejected
pub fn add_link(engine: &GraphEngine, link: Link) -> GraphResult<()> {
    validate_new_link(&link)?;
    engine.state.lock().graph.links.push(link);
    Ok(())
}

/// Replace the link with the matching id
pub fn update_link(engine: &GraphEngine, link: Link) -> GraphResult<bool> {
    validate_link(&link)?;
    let mut state = engine.state.lock();
    match state.graph.links.iter_mut().find(|l| l.id == link.id) {
        Some(slot) => {
            *slot = link;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Remove a link by id; no cascade
pub fn delete_link(engine: &GraphEngine, link_id: &str) -> bool {
    let mut state = engine.state.lock();
    let before = state.graph.links.len();
    state.graph.links.retain(|l| l.id != link_id);
    let removed = state.graph.links.len() != before;

    if removed && state.selected_link.as_deref() == Some(link_id) {
        state.selected_link = None;
    }
    removed
}

/// Reset to an empty graph
pub fn clear(engine: &GraphEngine) {
    replace(engine, GraphData::new());
}

/// Replace the whole graph wholesale
pub fn replace(engine: &GraphEngine, graph: GraphData) {
    let mut state = engine.state.lock();
    state.graph = graph;
    state.selected_node = None;
    state.selected_link = None;
}
