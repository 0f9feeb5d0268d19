//! Shared application state for the HTTP API

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::engine::GraphEngine;
use crate::persistence::GraphFile;

/// State handed to every handler
pub struct AppState {
    /// The canonical graph
    pub engine: Arc<GraphEngine>,

    /// Persistence backend; `None` is local mode (saves report 503)
    pub persistence: Option<GraphFile>,

    /// In-flight guard for save: a second save while one runs is rejected,
    /// not queued
    pub saving: AtomicBool,

    /// In-flight guard for clear
    pub clearing: AtomicBool,
}

impl AppState {
    /// Create state with no persistence (local mode)
    pub fn new(engine: Arc<GraphEngine>) -> Self {
        Self::with_persistence(engine, None)
    }

    /// Create state with an optional persistence backend
    pub fn with_persistence(engine: Arc<GraphEngine>, persistence: Option<GraphFile>) -> Self {
        Self {
            engine,
            persistence,
            saving: AtomicBool::new(false),
            clearing: AtomicBool::new(false),
        }
    }

    /// Try to take an in-flight flag; `false` means an operation is running
    pub fn try_begin(flag: &AtomicBool) -> bool {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Release an in-flight flag
    pub fn end(flag: &AtomicBool) {
        flag.store(false, Ordering::SeqCst);
    }
}
