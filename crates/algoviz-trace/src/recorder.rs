//! Trace recorder: running counters plus the growing step list.

use crate::step::{Stats, TraceStep};
use crate::trace::Trace;

/// Accumulates steps and cumulative statistics during one execution.
///
/// Recursive algorithms (quick sort, merge sort, DFS) thread `&mut
/// TraceRecorder` through their call frames instead of closing over outer
/// variables, keeping ownership of the accumulating state explicit.
///
/// The recorder stamps its current counters onto every pushed step, so
/// stats monotonicity holds by construction.
#[derive(Debug, Default)]
pub struct TraceRecorder {
    steps: Vec<TraceStep>,
    stats: Stats,
}

impl TraceRecorder {
    /// Create an empty recorder with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cumulative counters.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Charge `n` value comparisons.
    pub fn count_comparisons(&mut self, n: u64) {
        self.stats.comparisons += n;
    }

    /// Charge `n` element exchanges.
    pub fn count_swaps(&mut self, n: u64) {
        self.stats.swaps += n;
    }

    /// Charge `n` discrete memory touches of the working data.
    pub fn count_accesses(&mut self, n: u64) {
        self.stats.array_accesses += n;
    }

    /// Append a step, stamping the current cumulative counters onto it.
    ///
    /// Whatever `stats` value the caller left in the step is overwritten.
    pub fn push(&mut self, step: TraceStep) {
        self.steps.push(TraceStep {
            stats: self.stats,
            ..step
        });
    }

    /// Number of steps recorded so far.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if no steps have been recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Finish recording and hand over the trace.
    ///
    /// Debug builds verify the trace invariants here; a violation is a
    /// programming defect in the emitting algorithm.
    pub fn finish(self) -> Trace {
        let trace = Trace::new(self.steps);
        debug_assert!(
            trace.check_invariants().is_ok(),
            "recorded trace violates invariants: {:?}",
            trace.check_invariants()
        );
        trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let mut rec = TraceRecorder::new();
        rec.count_comparisons(2);
        rec.count_swaps(1);
        rec.count_accesses(4);
        rec.count_accesses(1);

        let stats = rec.stats();
        assert_eq!(stats.comparisons, 2);
        assert_eq!(stats.swaps, 1);
        assert_eq!(stats.array_accesses, 5);
    }

    #[test]
    fn push_overwrites_caller_stats() {
        let mut rec = TraceRecorder::new();
        rec.count_comparisons(3);
        rec.push(TraceStep {
            stats: Stats {
                comparisons: 999,
                swaps: 999,
                array_accesses: 999,
            },
            description: "Starting".into(),
            ..TraceStep::default()
        });

        let trace = rec.finish();
        assert_eq!(trace.step(0).unwrap().stats.comparisons, 3);
        assert_eq!(trace.step(0).unwrap().stats.swaps, 0);
    }

    #[test]
    fn finish_produces_ordered_trace() {
        let mut rec = TraceRecorder::new();
        rec.push(TraceStep {
            description: "Starting".into(),
            ..TraceStep::default()
        });
        rec.count_comparisons(1);
        rec.push(TraceStep {
            description: "Done".into(),
            ..TraceStep::default()
        });
        assert_eq!(rec.len(), 2);

        let trace = rec.finish();
        assert_eq!(trace.len(), 2);
        assert!(trace.check_invariants().is_ok());
    }
}
