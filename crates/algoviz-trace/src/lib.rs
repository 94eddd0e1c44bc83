//! AlgoViz Trace Model
//!
//! The shared data shape every instrumented algorithm emits into, and the
//! recorder that accumulates it.
//!
//! # Architecture
//!
//! - **TraceStep**: one immutable snapshot of algorithm state — full array
//!   or graph copy, role-tagged highlight sets, cumulative statistics, and
//!   a human-readable narration.
//! - **Trace**: the ordered sequence of steps from one execution, consumed
//!   read-only by playback and presentation.
//! - **TraceRecorder**: running counters plus the growing step list,
//!   threaded through recursive algorithms so ownership of the
//!   accumulating state stays explicit.
//!
//! Statistics are stamped onto each step by the recorder at push time, so
//! monotonicity holds by construction; [`Trace::check_invariants`] verifies
//! it (and non-empty narrations) in tests and debug builds.

mod recorder;
mod step;
mod trace;

pub use recorder::TraceRecorder;
pub use step::{Stats, TraceStep};
pub use trace::{InvariantViolation, Trace};
