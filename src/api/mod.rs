//! HTTP API for the graph workbench
//!
//! REST endpoints over the mutation engine, the layout annotator, and the
//! interchange codecs.

pub mod http;
pub mod rest;
pub mod state;
