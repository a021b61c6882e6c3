//! Error types for the trace engine
//!
//! This module defines [`TraceError`], which covers every way a caller can hand the
//! engine input it cannot trace, plus the driver's playback speed bounds.
//!
//! Malformed input is rejected up front: a trace is never started over data that
//! would make it emit partial or misleading events.

use crate::catalog::Category;
use thiserror::Error;

/// Errors produced by the trace engine and its driver
#[derive(Debug, Error)]
pub enum TraceError {
    /// No trace generator exists for this slug (or its category has none)
    #[error("unsupported algorithm: '{slug}'")]
    UnsupportedAlgorithm { slug: String },

    /// The input family does not match the algorithm's category
    #[error("algorithm '{slug}' expects {expected} input, got {got} input")]
    CategoryMismatch {
        slug: String,
        expected: Category,
        got: Category,
    },

    /// Traversal start node is not a node of the graph
    #[error("start node {start} is out of range for a graph with {nodes} nodes")]
    StartOutOfRange { start: usize, nodes: usize },

    /// An adjacency list entry references a node that does not exist
    #[error("node {node} lists neighbor {neighbor}, but the graph has {nodes} nodes")]
    NeighborOutOfRange {
        node: usize,
        neighbor: usize,
        nodes: usize,
    },

    /// A token in textual input is not an integer
    #[error("invalid value '{token}': expected an integer")]
    InvalidValue { token: String },

    /// A searching algorithm was requested without a target
    #[error("algorithm '{slug}' needs a target value")]
    MissingTarget { slug: String },

    /// Playback speed outside the configured bounds
    #[error("speed {speed} is out of range ({min}..={max})")]
    InvalidSpeed { speed: u32, min: u32, max: u32 },

    /// Playback settings that do not nest inside the supported speed range
    #[error("playback speeds must satisfy 1 <= min ({min}) <= default ({default}) <= max ({max}) <= 100")]
    InvalidPlayback { min: u32, default: u32, max: u32 },

    /// Catalog or configuration JSON could not be decoded
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
