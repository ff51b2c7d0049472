//! Trace recording.
//!
//! An instrumented algorithm runs exactly once, synchronously, against its
//! fixed input; at each point worth visualizing it calls
//! [`StepEmitter::emit`], and the full trace is assembled before control
//! returns to the caller. Playback rate is therefore decoupled from
//! computation rate: replay is taped, never live.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::error::TraceError;
use crate::step::Step;
use crate::trace::Trace;

/// The instrumentation capability handed to an algorithm body.
///
/// The emitter is passed in by `&mut`, so exactly one execution writes to a
/// trace at a time and emission order is program order. Each `emit` clones
/// the snapshot, so the algorithm is free to keep mutating its working
/// state afterwards.
pub struct StepEmitter<'t, S> {
    steps: &'t mut Vec<Step<S>>,
}

impl<S: Clone> StepEmitter<'_, S> {
    /// Record one step: a clone of `snapshot`, a description, and the
    /// reference-listing line it corresponds to.
    pub fn emit(&mut self, snapshot: &S, message: impl Into<String>, source_line: u32) {
        let sequence_index = self.steps.len();
        self.steps.push(Step::new(
            sequence_index,
            snapshot.clone(),
            message.into(),
            source_line,
        ));
    }

    /// Number of steps emitted so far.
    pub fn emitted(&self) -> usize {
        self.steps.len()
    }
}

/// Run an instrumented algorithm once and return its complete trace.
///
/// The body receives the [`StepEmitter`] capability and captures its own
/// input; recording is a single synchronous pass with no suspension. A body
/// that panics yields [`TraceError::Generation`] and the partial trace is
/// discarded, so a caller never receives a trace that was silently cut
/// short. A body that emits nothing yields [`TraceError::Empty`].
///
/// Recording is deterministic: re-invoking with the same input reproduces
/// an identical trace, which is what makes reset-without-reshuffle
/// semantics possible downstream.
///
/// # Example
///
/// ```
/// let trace = stepviz_engine::record(|em| {
///     let mut values = vec![3, 1, 2];
///     em.emit(&values, "initial array", 1);
///     values.sort();
///     em.emit(&values, "sorted", 2);
/// })
/// .unwrap();
///
/// assert_eq!(trace.len(), 2);
/// assert_eq!(trace.first().snapshot(), &vec![3, 1, 2]);
/// ```
pub fn record<S, F>(run: F) -> Result<Trace<S>, TraceError>
where
    S: Clone,
    F: FnOnce(&mut StepEmitter<'_, S>),
{
    let mut steps = Vec::new();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut emitter = StepEmitter { steps: &mut steps };
        run(&mut emitter);
    }));

    match outcome {
        Ok(()) => {
            let trace = Trace::from_steps(steps)?;
            debug!("recorded trace with {} steps", trace.len());
            Ok(trace)
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            warn!("instrumented algorithm panicked: {message}");
            Err(TraceError::Generation(message))
        }
    }
}

/// Best-effort extraction of a panic payload's message.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&'static str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "instrumented algorithm panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Swallow the default panic hook while recording a body that is
    /// expected to panic, so test output stays readable.
    fn record_quietly<S: Clone>(
        run: impl FnOnce(&mut StepEmitter<'_, S>),
    ) -> Result<Trace<S>, TraceError> {
        let hook = panic::take_hook();
        panic::set_hook(Box::new(|_| {}));
        let result = record(run);
        panic::set_hook(hook);
        result
    }

    #[test]
    fn test_emit_assigns_monotonic_indices() {
        let trace = record(|em| {
            for value in 0..4 {
                em.emit(&value, format!("value {value}"), value as u32 + 1);
            }
        })
        .unwrap();

        assert_eq!(trace.len(), 4);
        for (i, step) in trace.iter().enumerate() {
            assert_eq!(step.sequence_index(), i);
            assert_eq!(step.snapshot(), &(i as i32));
        }
    }

    #[test]
    fn test_snapshots_are_copies_not_references() {
        let mut working = vec![1, 2, 3];
        let trace = record(|em| {
            em.emit(&working, "before", 1);
            working.push(4);
            em.emit(&working, "after push", 2);
        })
        .unwrap();

        assert_eq!(trace.first().snapshot(), &vec![1, 2, 3]);
        assert_eq!(trace.last().snapshot(), &vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_run_is_an_error() {
        let result = record(|_em: &mut StepEmitter<'_, i32>| {});
        assert!(matches!(result, Err(TraceError::Empty)));
    }

    #[test]
    fn test_panicking_body_surfaces_generation_failure() {
        let result = record_quietly(|em: &mut StepEmitter<'_, i32>| {
            em.emit(&1, "one step before the fault", 1);
            panic!("boom at step two");
        });

        match result {
            Err(TraceError::Generation(message)) => {
                assert!(message.contains("boom"), "message was: {message}");
            }
            other => panic!("expected Generation error, got {other:?}"),
        }
    }

    #[test]
    fn test_recording_is_deterministic() {
        let run = |em: &mut StepEmitter<'_, Vec<i32>>| {
            let mut values = vec![5, 3, 8, 1];
            em.emit(&values, "initial", 1);
            values.sort();
            em.emit(&values, "sorted", 2);
        };

        let first = record(run).unwrap();
        let second = record(run).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_emitted_counter_tracks_progress() {
        record(|em| {
            assert_eq!(em.emitted(), 0);
            em.emit(&0, "first", 1);
            assert_eq!(em.emitted(), 1);
            em.emit(&1, "second", 2);
            assert_eq!(em.emitted(), 2);
        })
        .unwrap();
    }
}
