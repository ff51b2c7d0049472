//! A single recorded moment of an algorithm's execution.

use serde::{Deserialize, Serialize};

/// One observable moment within a trace: a snapshot of the algorithm's
/// working state plus the metadata a presentation layer needs to show it.
///
/// Steps are created by the recorder only. The snapshot is cloned at emit
/// time, so an already-recorded step can never be changed retroactively by
/// the algorithm mutating its live state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step<S> {
    /// Position within the trace, 0-based, assigned by the recorder.
    sequence_index: usize,
    /// Copy of the algorithm's working state at emit time.
    snapshot: S,
    /// Human-readable description of what just happened.
    message: String,
    /// 1-based line into the reference source listing. Advisory only; the
    /// recorder never validates it against the snapshot or the listing.
    source_line: u32,
}

impl<S> Step<S> {
    pub(crate) fn new(
        sequence_index: usize,
        snapshot: S,
        message: String,
        source_line: u32,
    ) -> Self {
        Self {
            sequence_index,
            snapshot,
            message,
            source_line,
        }
    }

    /// Position of this step within its trace.
    pub fn sequence_index(&self) -> usize {
        self.sequence_index
    }

    /// The recorded snapshot.
    pub fn snapshot(&self) -> &S {
        &self.snapshot
    }

    /// Description of what just happened.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Line in the reference source listing this step corresponds to.
    pub fn source_line(&self) -> u32 {
        self.source_line
    }
}
