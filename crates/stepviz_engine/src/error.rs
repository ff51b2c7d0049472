//! Engine error types.

use thiserror::Error;

/// Errors produced while recording or reconstructing a trace.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The instrumented algorithm panicked mid-run. The partial trace is
    /// discarded; a caller never receives a trace that was silently cut
    /// short.
    #[error("trace generation failed: {0}")]
    Generation(String),

    /// The instrumented run finished without emitting a single step. A
    /// trace always has at least its initial step, so this is a
    /// construction error rather than a valid empty trace.
    #[error("instrumented run emitted no steps")]
    Empty,

    /// Steps loaded from an external source had missing or reordered
    /// sequence indices.
    #[error("non-contiguous step sequence: expected index {expected}, found {found}")]
    NonContiguous { expected: usize, found: usize },
}

/// Errors produced by playback configuration and commands.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Speed multiplier was zero, negative, or non-finite. Playback state
    /// is left unchanged.
    #[error("invalid speed multiplier: {0}")]
    InvalidSpeed(f64),

    /// The configured base tick interval was zero.
    #[error("base interval must be non-zero")]
    InvalidInterval,
}
