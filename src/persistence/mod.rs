//! Optional file persistence for the graph
//!
//! The canonical graph lives in memory; persistence is a collaborator that
//! may be absent ("local mode"). When configured, the graph is stored as one
//! pretty-printed `{nodes, links}` JSON document with link endpoints already
//! normalized to bare ids by the caller.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::GraphResult;
use crate::types::GraphData;

/// Environment variable naming the persistence file
pub const GRAPH_FILE_ENV: &str = "GRAPH_FILE_PATH";

/// Handle to the on-disk graph document
pub struct GraphFile {
    path: PathBuf,
}

impl GraphFile {
    /// Create a handle for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Build a handle from `GRAPH_FILE_PATH`, if set
    ///
    /// Relative paths are resolved against the current directory. `None`
    /// means the server runs in local mode with no persistence.
    pub fn from_env() -> Option<Self> {
        let raw = env::var(GRAPH_FILE_ENV).ok()?;
        if raw.trim().is_empty() {
            return None;
        }
        let path = PathBuf::from(&raw);
        let path = if path.is_absolute() {
            path
        } else {
            env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(path)
        };
        Some(Self { path })
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored graph; a missing file is an empty graph
    pub fn load(&self) -> GraphResult<GraphData> {
        if !self.path.exists() {
            return Ok(GraphData::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Persist the graph, creating parent directories as needed
    pub fn save(&self, graph: &GraphData) -> GraphResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(graph)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Reset the stored graph to empty
    pub fn clear(&self) -> GraphResult<()> {
        self.save(&GraphData::new())
    }
}

/// Write an interchange document as a downloadable pretty-printed JSON file
///
/// A `.json` suffix is appended when the requested name lacks one. Returns
/// the path actually written.
pub fn write_export_file(path: impl Into<PathBuf>, document: &Value) -> GraphResult<PathBuf> {
    let mut path = path.into();
    let has_json_suffix = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if !has_json_suffix {
        let mut name = path.file_name().unwrap_or_default().to_os_string();
        name.push(".json");
        path.set_file_name(name);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, serde_json::to_string_pretty(document)?)?;
    Ok(path)
}
