//! Graph mutation engine
//!
//! Owns the canonical `{nodes, links}` state together with the canvas
//! selection, behind a single lock so every mutation is one atomic state
//! transition. Mutation logic lives in [`mutate`]; the edge-creation draft
//! state machine lives in [`draft`].

mod draft;
mod mutate;

pub use draft::{DraftMode, EdgeDraft, SelectionSlot};

use parking_lot::Mutex;

use crate::error::GraphResult;
use crate::types::{GraphData, Link, Node};

/// State guarded by the engine lock
#[derive(Debug, Default)]
pub(crate) struct EditorState {
    pub(crate) graph: GraphData,
    pub(crate) selected_node: Option<String>,
    pub(crate) selected_link: Option<String>,
}

/// Thread-safe owner of the canonical graph state
pub struct GraphEngine {
    pub(crate) state: Mutex<EditorState>,
}

impl GraphEngine {
    /// Create an engine with an empty graph
    pub fn new() -> Self {
        Self {
            state: Mutex::new(EditorState::default()),
        }
    }

    /// Create an engine seeded with an existing graph
    pub fn with_graph(graph: GraphData) -> Self {
        Self {
            state: Mutex::new(EditorState {
                graph,
                selected_node: None,
                selected_link: None,
            }),
        }
    }

    /// Get a clone of the current graph
    pub fn snapshot(&self) -> GraphData {
        self.state.lock().graph.clone()
    }

    /// Get a clone of the current graph with link endpoints collapsed to ids
    ///
    /// This is the shape sent to persistence.
    pub fn normalized_snapshot(&self) -> GraphData {
        self.state.lock().graph.normalized()
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.state.lock().graph.node_count()
    }

    /// Get the number of links
    pub fn link_count(&self) -> usize {
        self.state.lock().graph.link_count()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.state.lock().graph.is_empty()
    }

    // Mutations (from mutate.rs)

    /// Append a node after validating it
    pub fn add_node(&self, node: Node) -> GraphResult<()> {
        mutate::add_node(self, node)
    }

    /// Replace the node with the matching id, propagating the edit to links
    /// holding a cached object reference to it
    ///
    /// Returns `false` if no node with that id exists.
    pub fn update_node(&self, node: Node) -> GraphResult<bool> {
        mutate::update_node(self, node)
    }

    /// Remove a node and every link touching it, as one atomic transition
    ///
    /// Returns `false` (and changes nothing) if the node does not exist.
    pub fn delete_node(&self, node_id: &str) -> bool {
        mutate::delete_node(self, node_id)
    }

    /// Append a link after validating it, rejecting self-loops
    pub fn add_link(&self, link: Link) -> GraphResult<()> {
        mutate::add_link(self, link)
    }

    /// Replace the link with the matching id
    ///
    /// Returns `false` if no link with that id exists.
    pub fn update_link(&self, link: Link) -> GraphResult<bool> {
        mutate::update_link(self, link)
    }

    /// Remove a link; no cascade
    pub fn delete_link(&self, link_id: &str) -> bool {
        mutate::delete_link(self, link_id)
    }

    /// Reset to an empty graph and drop any selection
    pub fn clear(&self) {
        mutate::clear(self)
    }

    /// Replace the whole graph, dropping any selection
    ///
    /// Imports are all-or-nothing at the file level; there is no partial or
    /// merge import.
    pub fn replace(&self, graph: GraphData) {
        mutate::replace(self, graph)
    }

    /// Commit an edge draft, adding or updating the link it describes
    pub fn commit_draft(&self, draft: EdgeDraft) -> GraphResult<Link> {
        let editing = draft.is_editing();
        let link = draft.into_link()?;
        if editing {
            self.update_link(link.clone())?;
        } else {
            self.add_link(link.clone())?;
        }
        Ok(link)
    }

    // Selection

    /// Select a node, clearing any link selection
    ///
    /// Returns `false` if the node does not exist.
    pub fn select_node(&self, node_id: &str) -> bool {
        let mut state = self.state.lock();
        if state.graph.node_by_id(node_id).is_none() {
            return false;
        }
        state.selected_node = Some(node_id.to_string());
        state.selected_link = None;
        true
    }

    /// Select a link, clearing any node selection
    ///
    /// Returns `false` if the link does not exist.
    pub fn select_link(&self, link_id: &str) -> bool {
        let mut state = self.state.lock();
        if state.graph.link_by_id(link_id).is_none() {
            return false;
        }
        state.selected_link = Some(link_id.to_string());
        state.selected_node = None;
        true
    }

    /// Drop any selection (background click, escape)
    pub fn clear_selection(&self) {
        let mut state = self.state.lock();
        state.selected_node = None;
        state.selected_link = None;
    }

    /// Currently selected node id, if any
    pub fn selected_node(&self) -> Option<String> {
        self.state.lock().selected_node.clone()
    }

    /// Currently selected link id, if any
    pub fn selected_link(&self) -> Option<String> {
        self.state.lock().selected_link.clone()
    }
}

impl Default for GraphEngine {
    fn default() -> Self {
        Self::new()
    }
}
