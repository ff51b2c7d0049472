//! Stepviz Trace Engine
//!
//! This crate provides the core primitives for recording and replaying
//! algorithm executions:
//!
//! - **Trace Recording**: Run an instrumented algorithm once and capture an
//!   immutable sequence of [`Step`] snapshots
//! - **Transport**: A pure, clock-free cursor state machine over a trace
//! - **Playback**: A timer-driven controller that steps through a trace at
//!   a configurable speed
//!
//! # Example
//!
//! ```rust
//! use stepviz_engine::record;
//!
//! let trace = record(|em| {
//!     let mut total = 0;
//!     for n in 1..=3 {
//!         total += n;
//!         em.emit(&total, format!("added {n}"), 4);
//!     }
//! })
//! .unwrap();
//!
//! assert_eq!(trace.len(), 3);
//! assert_eq!(*trace.last().snapshot(), 6);
//! ```

mod error;
pub mod playback;
mod record;
mod step;
mod trace;

pub use error::{PlaybackError, TraceError};
pub use playback::{PlaybackConfig, PlaybackController, PlaybackFrame, Tick, Transport};
pub use record::{record, StepEmitter};
pub use step::Step;
pub use trace::Trace;
