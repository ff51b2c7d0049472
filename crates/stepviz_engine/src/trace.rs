//! The immutable record of one algorithm execution.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::TraceError;
use crate::step::Step;

/// An ordered, finite, immutable sequence of steps produced by a single
/// recorder run.
///
/// A trace always holds at least one step, and `steps()[i]` always carries
/// sequence index `i`. Once constructed a trace is never mutated: replaying
/// or resetting only moves a read cursor, it never re-executes the
/// algorithm.
///
/// Cloning is cheap (the steps live behind an `Arc`), so one trace can back
/// several simultaneously-open playback controllers, for example in
/// side-by-side comparison views.
#[derive(Debug)]
pub struct Trace<S> {
    steps: Arc<[Step<S>]>,
}

impl<S> Trace<S> {
    /// Build a trace from recorder output, validating the invariants the
    /// rest of the engine relies on.
    pub(crate) fn from_steps(steps: Vec<Step<S>>) -> Result<Self, TraceError> {
        if steps.is_empty() {
            return Err(TraceError::Empty);
        }
        for (expected, step) in steps.iter().enumerate() {
            if step.sequence_index() != expected {
                return Err(TraceError::NonContiguous {
                    expected,
                    found: step.sequence_index(),
                });
            }
        }
        Ok(Self {
            steps: steps.into(),
        })
    }

    /// Number of steps in the trace. Always at least 1.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for interface completeness.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the final step.
    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    /// The step at `index`, if within bounds.
    pub fn step(&self, index: usize) -> Option<&Step<S>> {
        self.steps.get(index)
    }

    /// All steps in sequence order.
    pub fn steps(&self) -> &[Step<S>] {
        &self.steps
    }

    /// The initial step.
    pub fn first(&self) -> &Step<S> {
        &self.steps[0]
    }

    /// The final step.
    pub fn last(&self) -> &Step<S> {
        &self.steps[self.steps.len() - 1]
    }

    /// Iterate over the steps in sequence order.
    pub fn iter(&self) -> std::slice::Iter<'_, Step<S>> {
        self.steps.iter()
    }
}

impl<S> Clone for Trace<S> {
    fn clone(&self) -> Self {
        Self {
            steps: Arc::clone(&self.steps),
        }
    }
}

impl<S: PartialEq> PartialEq for Trace<S> {
    fn eq(&self, other: &Self) -> bool {
        self.steps == other.steps
    }
}

impl<'a, S> IntoIterator for &'a Trace<S> {
    type Item = &'a Step<S>;
    type IntoIter = std::slice::Iter<'a, Step<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Serializes as the plain array of steps, the format the CLI writes to
/// trace files.
impl<S: Serialize> Serialize for Trace<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        self.steps.serialize(serializer)
    }
}

/// Deserialization re-validates the trace invariants, so a hand-edited or
/// truncated trace file is rejected instead of producing a trace that
/// violates them.
impl<'de, S: Deserialize<'de>> Deserialize<'de> for Trace<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let steps = Vec::<Step<S>>::deserialize(deserializer)?;
        Trace::from_steps(steps).map_err(serde::de::Error::custom)
    }
}
