//! Edge-creation draft state machine
//!
//! A short-lived interaction state that lets the user pick source and target
//! nodes from the canvas before an edge exists. While a slot is active the
//! canvas interprets the next node click as "assign this node to the slot"
//! instead of "select this node". Endpoints are immutable once an edge
//! exists, so slot selection is disabled entirely in edit mode.

use serde_json::{Map, Value};

use crate::error::{GraphError, GraphResult};
use crate::types::{Link, NodeRef};
use crate::utils::edge_id;
use crate::validation::{validate_link, validate_new_link};

/// Which endpoint the next canvas click fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSlot {
    Source,
    Target,
}

/// Whether the draft creates a new edge or edits an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftMode {
    Create,
    Edit { link_id: String },
}

/// In-progress edge, not yet part of the graph
#[derive(Debug, Clone)]
pub struct EdgeDraft {
    mode: DraftMode,
    source: Option<String>,
    target: Option<String>,
    pub label: String,
    pub attributes: Map<String, Value>,
    active_slot: Option<SelectionSlot>,
}

impl EdgeDraft {
    /// Open a draft for a new edge with both endpoints unset
    pub fn create() -> Self {
        Self {
            mode: DraftMode::Create,
            source: None,
            target: None,
            label: String::new(),
            attributes: Map::new(),
            active_slot: None,
        }
    }

    /// Open a draft editing an existing edge
    ///
    /// Endpoints are resolved to ids and frozen; only label and attributes
    /// can change.
    pub fn edit(link: &Link) -> Self {
        Self {
            mode: DraftMode::Edit {
                link_id: link.id.clone(),
            },
            source: Some(link.source_id().to_string()),
            target: Some(link.target_id().to_string()),
            label: link.label.clone(),
            attributes: link.attributes.clone(),
            active_slot: None,
        }
    }

    /// Whether this draft edits an existing edge
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, DraftMode::Edit { .. })
    }

    /// The draft's source node id, if assigned
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// The draft's target node id, if assigned
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// The slot waiting for a canvas click, if any
    pub fn active_slot(&self) -> Option<SelectionSlot> {
        self.active_slot
    }

    /// Arm a slot so the next node click fills it
    ///
    /// Returns `false` without arming in edit mode.
    pub fn start_selecting(&mut self, slot: SelectionSlot) -> bool {
        if self.is_editing() {
            return false;
        }
        self.active_slot = Some(slot);
        true
    }

    /// Disarm the active slot without touching the endpoints
    pub fn cancel_selection(&mut self) {
        self.active_slot = None;
    }

    /// Assign a clicked node to the armed slot
    ///
    /// No-op (returns `false`) when no slot is armed or in edit mode. The
    /// slot is disarmed after a successful assignment; arming again is
    /// allowed, in either order.
    pub fn assign_node(&mut self, node_id: &str) -> bool {
        if self.is_editing() {
            return false;
        }
        let Some(slot) = self.active_slot.take() else {
            return false;
        };
        match slot {
            SelectionSlot::Source => self.source = Some(node_id.to_string()),
            SelectionSlot::Target => self.target = Some(node_id.to_string()),
        }
        true
    }

    /// Turn the draft into a concrete link, validating the commit contract:
    /// both endpoints set, non-empty label, and (create mode only)
    /// source ≠ target
    pub fn into_link(self) -> GraphResult<Link> {
        let source = self
            .source
            .ok_or_else(|| GraphError::validation("Please select a source node."))?;
        let target = self
            .target
            .ok_or_else(|| GraphError::validation("Please select a target node."))?;

        let (id, editing) = match self.mode {
            DraftMode::Create => (edge_id(), false),
            DraftMode::Edit { link_id } => (link_id, true),
        };

        let link = Link {
            id,
            source: NodeRef::Id(source),
            target: NodeRef::Id(target),
            label: self.label,
            attributes: self.attributes,
        };

        if editing {
            validate_link(&link)?;
        } else {
            validate_new_link(&link)?;
        }
        Ok(link)
    }
}
