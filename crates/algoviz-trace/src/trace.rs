//! Ordered trace sequences and their invariant checker.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::step::TraceStep;

/// A violation found by [`Trace::check_invariants`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A finished trace must contain at least one step.
    #[error("trace is empty")]
    Empty,

    /// Counters regressed between consecutive steps.
    #[error("stats regressed at step {index}")]
    StatsRegression { index: usize },

    /// A step carries no narration.
    #[error("empty description at step {index}")]
    EmptyDescription { index: usize },
}

/// The ordered sequence of steps produced by one algorithm execution.
///
/// Read-only for consumers: playback holds a cursor over it and the
/// presentation layer renders `trace[current]` without ever mutating it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace(Vec<TraceStep>);

impl Trace {
    /// Wrap an already-recorded step sequence.
    pub fn new(steps: Vec<TraceStep>) -> Self {
        Self(steps)
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the trace has no steps.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get a step by index.
    pub fn step(&self, index: usize) -> Option<&TraceStep> {
        self.0.get(index)
    }

    /// First step (algorithm start).
    pub fn first(&self) -> Option<&TraceStep> {
        self.0.first()
    }

    /// Last step (completion / found / not-found).
    pub fn last(&self) -> Option<&TraceStep> {
        self.0.last()
    }

    /// Iterate over the steps in order.
    pub fn iter(&self) -> std::slice::Iter<'_, TraceStep> {
        self.0.iter()
    }

    /// View the steps as a slice.
    pub fn as_slice(&self) -> &[TraceStep] {
        &self.0
    }

    /// Verify stats monotonicity, non-emptiness, and non-empty narrations.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if self.0.is_empty() {
            return Err(InvariantViolation::Empty);
        }

        for (index, step) in self.0.iter().enumerate() {
            if step.description.is_empty() {
                return Err(InvariantViolation::EmptyDescription { index });
            }
            if index > 0 && !step.stats.dominates(&self.0[index - 1].stats) {
                return Err(InvariantViolation::StatsRegression { index });
            }
        }

        Ok(())
    }
}

impl From<Vec<TraceStep>> for Trace {
    fn from(steps: Vec<TraceStep>) -> Self {
        Self(steps)
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceStep;
    type IntoIter = std::slice::Iter<'a, TraceStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Stats;

    fn step(comparisons: u64, description: &str) -> TraceStep {
        TraceStep {
            array: Some(vec![1, 2]),
            stats: Stats {
                comparisons,
                ..Stats::default()
            },
            description: description.into(),
            ..TraceStep::default()
        }
    }

    #[test]
    fn empty_trace_rejected() {
        assert_eq!(Trace::default().check_invariants(), Err(InvariantViolation::Empty));
    }

    #[test]
    fn monotone_stats_accepted() {
        let trace = Trace::new(vec![step(0, "Starting"), step(1, "Comparing"), step(1, "Done")]);
        assert!(trace.check_invariants().is_ok());
    }

    #[test]
    fn regression_detected() {
        let trace = Trace::new(vec![step(2, "Starting"), step(1, "Comparing")]);
        assert_eq!(
            trace.check_invariants(),
            Err(InvariantViolation::StatsRegression { index: 1 })
        );
    }

    #[test]
    fn empty_description_detected() {
        let trace = Trace::new(vec![step(0, "Starting"), step(1, "")]);
        assert_eq!(
            trace.check_invariants(),
            Err(InvariantViolation::EmptyDescription { index: 1 })
        );
    }

    #[test]
    fn accessors() {
        let trace = Trace::new(vec![step(0, "Starting"), step(3, "Done")]);
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.first().unwrap().description, "Starting");
        assert_eq!(trace.last().unwrap().description, "Done");
        assert_eq!(trace.step(1).unwrap().stats.comparisons, 3);
        assert!(trace.step(2).is_none());
    }
}
