//! The cursor state machine under the playback controller.
//!
//! `Transport` is the runtime-free core of playback: a cursor over a trace
//! of known length, the playing flag, and the speed multiplier. The
//! controller drives it from a timer under a lock; a host that pumps its
//! own frame loop can also drive it directly through [`Transport::tick`].

use crate::error::PlaybackError;

/// Outcome of one autoplay tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// The cursor advanced and more steps remain.
    Advanced,
    /// The cursor advanced onto the last step and playback auto-paused.
    Finished,
    /// Nothing moved: the transport was paused (a stale tick) or already
    /// at the end.
    Skipped,
}

/// Cursor position, playing flag, and speed multiplier over a fixed trace
/// length.
///
/// Every command is total: one that cannot apply in the current state is a
/// defined no-op reported through the return value, never an error. The
/// exception is [`set_speed`](Transport::set_speed), which rejects
/// non-positive and non-finite multipliers and leaves the state untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Transport {
    len: usize,
    index: usize,
    playing: bool,
    speed: f64,
}

impl Transport {
    /// Transport over a trace of `len` steps: cursor on the initial step,
    /// paused, speed 1.0.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero. A trace always has at least one step.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "a transport needs at least one step");
        Self {
            len,
            index: 0,
            playing: false,
            speed: 1.0,
        }
    }

    /// Length of the underlying trace.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; construction rejects zero-length traces.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current cursor position, always in `0..len`.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether autoplay is running.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Current speed multiplier. Larger is faster.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Whether the cursor is on the last step.
    pub fn at_end(&self) -> bool {
        self.index + 1 == self.len
    }

    /// Begin playing. No-op when already playing or when the cursor is on
    /// the last step: a finished trace does not restart or loop.
    ///
    /// Returns whether the transport transitioned to playing.
    pub fn play(&mut self) -> bool {
        if self.playing || self.at_end() {
            return false;
        }
        self.playing = true;
        true
    }

    /// Stop playing. Idempotent.
    ///
    /// Returns whether the transport was playing.
    pub fn pause(&mut self) -> bool {
        std::mem::replace(&mut self.playing, false)
    }

    /// Move the cursor forward by exactly one step. No-op on the last
    /// step. Legal in either state; an active autoplay is not paused.
    ///
    /// Returns whether the cursor moved.
    pub fn step_forward(&mut self) -> bool {
        if self.at_end() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Move the cursor back by exactly one step. No-op on the initial
    /// step.
    ///
    /// Returns whether the cursor moved.
    pub fn step_back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Rewind to the initial step and stop. Idempotent. Never re-records
    /// the trace; a fresh recording is a separate caller decision.
    pub fn reset(&mut self) {
        self.index = 0;
        self.playing = false;
    }

    /// Change the speed multiplier. Zero, negative, and non-finite values
    /// are rejected and the state is left unchanged.
    pub fn set_speed(&mut self, multiplier: f64) -> Result<(), PlaybackError> {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(PlaybackError::InvalidSpeed(multiplier));
        }
        self.speed = multiplier;
        Ok(())
    }

    /// One autoplay tick. While playing, advances the cursor by one and
    /// auto-pauses on arrival at the last step; a tick against a paused
    /// transport is a no-op, which is what makes a stale timer harmless.
    ///
    /// A trace of length `n` therefore yields exactly `n - 1` advancing
    /// ticks from the initial step, the last of which reports
    /// [`Tick::Finished`]; every tick after that reports [`Tick::Skipped`].
    pub fn tick(&mut self) -> Tick {
        if !self.playing {
            return Tick::Skipped;
        }
        if self.at_end() {
            // play() refuses a finished trace, so this only happens when a
            // host drives tick() by hand after stepping to the end.
            self.playing = false;
            return Tick::Skipped;
        }
        self.index += 1;
        if self.at_end() {
            self.playing = false;
            Tick::Finished
        } else {
            Tick::Advanced
        }
    }
}
