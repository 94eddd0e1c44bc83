//! AlgoViz Instrumented Algorithms
//!
//! One routine per algorithm, each transforming an input into an ordered
//! [`Trace`](algoviz_trace::Trace) of immutable snapshots. Every routine:
//!
//! - operates on an internal working copy (caller-owned input is never
//!   mutated),
//! - is fully deterministic for a given input (no internal randomness),
//! - charges the shared counters for every value comparison, element
//!   exchange, and discrete memory touch, and
//! - emits one step per meaningfully distinct sub-decision, with concrete
//!   values in the narration.
//!
//! Recursive routines thread a [`TraceRecorder`](algoviz_trace::TraceRecorder)
//! through their call frames; the recorder stamps cumulative stats onto
//! every step.
//!
//! # Preconditions
//!
//! Arrays must be non-empty and graphs must have at least one node; the
//! catalog boundary rejects malformed input before any routine runs.

mod graph;
mod pathfinding;
mod searching;
mod sorting;

pub use graph::{bfs, dfs};
pub use pathfinding::{a_star, dijkstra};
pub use searching::{binary_search, linear_search};
pub use sorting::{bubble_sort, insertion_sort, merge_sort, quick_sort, selection_sort};
