//! Step-through playback of recorded traces.
//!
//! Split in two layers:
//!
//! - [`Transport`]: the pure cursor state machine. Positions, the playing
//!   flag, and the speed multiplier, with no clock attached. Fully
//!   deterministic and synchronously testable.
//! - [`PlaybackController`]: a transport bound to one [`Trace`] and driven
//!   by a tokio timer while playing, publishing a [`PlaybackFrame`] on
//!   every transition.
//!
//! [`Trace`]: crate::Trace

mod controller;
mod transport;

pub use controller::{PlaybackConfig, PlaybackController, PlaybackFrame};
pub use transport::{Tick, Transport};
