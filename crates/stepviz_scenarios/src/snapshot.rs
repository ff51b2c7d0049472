//! The shared snapshot vocabulary for catalog scenarios.
//!
//! Every scenario in the catalog records the same snapshot type, so one
//! renderer and one trace file format cover all of them. A snapshot is a
//! complete picture of the algorithm's working state at one step; it never
//! references live algorithm memory.

use serde::{Deserialize, Serialize};

/// One frame of algorithm state, in one of three scene shapes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneSnapshot {
    /// A linear sequence of values, for sorting, searching, and windowed
    /// scans.
    Array {
        /// The sequence itself, in its current order.
        values: Vec<i64>,
        /// Indices under examination at this step.
        focus: Vec<usize>,
        /// Inclusive index range of the active window, when one exists.
        window: Option<(usize, usize)>,
        /// The best value found so far, when the scan tracks one.
        best: Option<i64>,
    },
    /// An n-by-n board with one queen per occupied row.
    Board {
        /// Board side length.
        size: usize,
        /// Column of the queen on each placed row, top row first.
        queens: Vec<usize>,
        /// The square currently being tested, as (row, column).
        probe: Option<(usize, usize)>,
    },
    /// An undirected graph mid-traversal.
    Graph {
        /// Number of nodes, labelled `0..nodes`.
        nodes: usize,
        /// Undirected edges as node pairs.
        edges: Vec<(usize, usize)>,
        /// Nodes already visited, in visit order.
        visited: Vec<usize>,
        /// Nodes discovered but not yet visited, in queue order.
        frontier: Vec<usize>,
        /// The node being expanded at this step.
        current: Option<usize>,
    },
}

impl SceneSnapshot {
    /// Short name of the scene shape, for log lines and renderers.
    pub fn kind(&self) -> &'static str {
        match self {
            SceneSnapshot::Array { .. } => "array",
            SceneSnapshot::Board { .. } => "board",
            SceneSnapshot::Graph { .. } => "graph",
        }
    }
}
