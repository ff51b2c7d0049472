//! Timer-driven playback over a recorded trace.
//!
//! `PlaybackController` binds one [`Trace`] to one [`Transport`] and
//! advances the transport from a tokio timer while playing. Timer ticks
//! and commands are serialized through a single mutex, and the timer is
//! cancelled and recreated on every command that changes the playing flag
//! or the speed. Each cancellation bumps an epoch counter; a stale tick
//! that fires afterwards observes the mismatch under the lock and returns
//! without touching anything, including after the controller itself has
//! been dropped.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::error::PlaybackError;
use crate::playback::transport::{Tick, Transport};
use crate::step::Step;
use crate::trace::Trace;

/// Playback timing configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaybackConfig {
    /// Tick period at speed 1.0.
    pub base_interval: Duration,
    /// Speed multiplier in effect from the first tick.
    pub initial_speed: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            base_interval: Duration::from_millis(500),
            initial_speed: 1.0,
        }
    }
}

impl PlaybackConfig {
    /// Set the tick period at speed 1.0.
    pub fn with_base_interval(mut self, base_interval: Duration) -> Self {
        self.base_interval = base_interval;
        self
    }

    /// Set the initial speed multiplier.
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.initial_speed = speed;
        self
    }
}

/// What presentation consumers observe after every state transition:
/// current position, trace length, and whether autoplay is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackFrame {
    /// Current cursor position.
    pub index: usize,
    /// Total number of steps in the bound trace.
    pub total: usize,
    /// Whether autoplay is running.
    pub playing: bool,
}

/// Transport plus ticker bookkeeping, everything the timer and the
/// commands contend over.
struct TickerState {
    transport: Transport,
    /// Bumped on every timer cancellation. A ticker that observes a
    /// mismatch is stale and must not touch the transport.
    epoch: u64,
    ticker: Option<JoinHandle<()>>,
}

/// State shared between the controller handle and its ticker task.
struct Core {
    state: Mutex<TickerState>,
    frames: watch::Sender<PlaybackFrame>,
    base_interval: Duration,
    total: usize,
}

impl Core {
    fn frame_of(&self, transport: &Transport) -> PlaybackFrame {
        PlaybackFrame {
            index: transport.index(),
            total: self.total,
            playing: transport.is_playing(),
        }
    }

    /// Publish the transport state to watchers, skipping frames that carry
    /// no change.
    fn publish(&self, transport: &Transport) {
        let next = self.frame_of(transport);
        self.frames.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }

    /// Invalidate any in-flight tick and drop the ticker handle. Returns
    /// the new epoch for a replacement ticker.
    fn cancel_ticker(state: &mut TickerState) -> u64 {
        state.epoch += 1;
        if let Some(handle) = state.ticker.take() {
            handle.abort();
        }
        state.epoch
    }
}

/// Tick period for the given speed. Extreme-but-valid speeds saturate
/// instead of overflowing `Duration`.
fn scaled_interval(base: Duration, speed: f64) -> Duration {
    Duration::try_from_secs_f64(base.as_secs_f64() / speed).unwrap_or(Duration::MAX)
}

/// The autoplay loop: sleep one period, take the lock, tick the
/// transport. Exits when it finishes the trace, when its epoch is stale,
/// or when it is aborted mid-sleep.
fn spawn_ticker(core: Arc<Core>, epoch: u64, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(period).await;

            let mut state = core.state.lock();
            if state.epoch != epoch {
                return;
            }
            match state.transport.tick() {
                Tick::Advanced => core.publish(&state.transport),
                Tick::Finished | Tick::Skipped => {
                    state.epoch += 1;
                    state.ticker = None;
                    core.publish(&state.transport);
                    debug!("autoplay finished at step {}", state.transport.index());
                    return;
                }
            }
        }
    })
}

/// Transport controls and a single current step over one recorded trace.
///
/// The controller is the sole owner of its playback state; the bound trace
/// is immutable and may be shared with other controllers by cloning it
/// before construction. Dropping the controller cancels any pending tick.
pub struct PlaybackController<S> {
    trace: Trace<S>,
    core: Arc<Core>,
}

impl<S> PlaybackController<S> {
    /// Bind a controller to `trace`: cursor on the initial step, paused.
    ///
    /// Nothing is spawned until [`play`](Self::play). Fails with
    /// [`PlaybackError::InvalidSpeed`] or
    /// [`PlaybackError::InvalidInterval`] when the configuration is
    /// unusable.
    pub fn new(trace: Trace<S>, config: PlaybackConfig) -> Result<Self, PlaybackError> {
        if config.base_interval.is_zero() {
            return Err(PlaybackError::InvalidInterval);
        }
        let mut transport = Transport::new(trace.len());
        transport.set_speed(config.initial_speed)?;

        let total = trace.len();
        let (frames, _) = watch::channel(PlaybackFrame {
            index: 0,
            total,
            playing: false,
        });

        Ok(Self {
            trace,
            core: Arc::new(Core {
                state: Mutex::new(TickerState {
                    transport,
                    epoch: 0,
                    ticker: None,
                }),
                frames,
                base_interval: config.base_interval,
                total,
            }),
        })
    }

    /// Start autoplay at the current speed. No-op when already playing or
    /// when the cursor is on the last step (a finished trace does not
    /// restart).
    ///
    /// Must be called from within a tokio runtime; the ticker is spawned
    /// on it.
    pub fn play(&self) {
        let mut state = self.core.state.lock();
        if !state.transport.play() {
            return;
        }
        let epoch = Core::cancel_ticker(&mut state);
        let period = scaled_interval(self.core.base_interval, state.transport.speed());
        state.ticker = Some(spawn_ticker(Arc::clone(&self.core), epoch, period));
        self.core.publish(&state.transport);
        debug!("autoplay started, one tick per {period:?}");
    }

    /// Stop autoplay, cancelling any pending tick. Idempotent.
    pub fn pause(&self) {
        let mut state = self.core.state.lock();
        if state.transport.pause() {
            Core::cancel_ticker(&mut state);
            self.core.publish(&state.transport);
            debug!("autoplay paused at step {}", state.transport.index());
        }
    }

    /// Advance the cursor by exactly one step. No-op on the last step.
    /// Does not pause an active autoplay.
    pub fn step_forward(&self) {
        let mut state = self.core.state.lock();
        if state.transport.step_forward() {
            self.core.publish(&state.transport);
        }
    }

    /// Move the cursor back by exactly one step. No-op on the initial
    /// step.
    pub fn step_back(&self) {
        let mut state = self.core.state.lock();
        if state.transport.step_back() {
            self.core.publish(&state.transport);
        }
    }

    /// Rewind to the initial step and stop, cancelling any pending tick.
    /// The same trace stays bound: resetting never re-records. Idempotent.
    pub fn reset(&self) {
        let mut state = self.core.state.lock();
        Core::cancel_ticker(&mut state);
        state.transport.reset();
        self.core.publish(&state.transport);
        debug!("playback reset");
    }

    /// Change the speed multiplier. Rejects non-positive and non-finite
    /// values, leaving playback untouched. While playing, the timer is
    /// restarted so the new period applies from the next tick, and the
    /// cursor does not move.
    pub fn set_speed(&self, multiplier: f64) -> Result<(), PlaybackError> {
        let mut state = self.core.state.lock();
        state.transport.set_speed(multiplier)?;
        if state.transport.is_playing() {
            let epoch = Core::cancel_ticker(&mut state);
            let period = scaled_interval(self.core.base_interval, multiplier);
            state.ticker = Some(spawn_ticker(Arc::clone(&self.core), epoch, period));
        }
        debug!("speed set to {multiplier}");
        Ok(())
    }

    /// Current cursor position, always in `0..total_steps()`.
    pub fn current_index(&self) -> usize {
        self.core.state.lock().transport.index()
    }

    /// Length of the bound trace.
    pub fn total_steps(&self) -> usize {
        self.trace.len()
    }

    /// Whether autoplay is running.
    pub fn is_playing(&self) -> bool {
        self.core.state.lock().transport.is_playing()
    }

    /// Current speed multiplier.
    pub fn speed(&self) -> f64 {
        self.core.state.lock().transport.speed()
    }

    /// The step under the cursor.
    pub fn current_step(&self) -> &Step<S> {
        &self.trace.steps()[self.current_index()]
    }

    /// The bound trace.
    pub fn trace(&self) -> &Trace<S> {
        &self.trace
    }

    /// The transport state as last published to watchers.
    pub fn frame(&self) -> PlaybackFrame {
        *self.core.frames.borrow()
    }

    /// Subscribe to state transitions. Every transition publishes a
    /// [`PlaybackFrame`]; the receiver always holds the latest one.
    pub fn subscribe(&self) -> watch::Receiver<PlaybackFrame> {
        self.core.frames.subscribe()
    }
}

impl<S> Drop for PlaybackController<S> {
    fn drop(&mut self) {
        let mut state = self.core.state.lock();
        Core::cancel_ticker(&mut state);
        state.transport.pause();
    }
}
