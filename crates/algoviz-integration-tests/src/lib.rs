//! Cross-crate pipeline tests for AlgoViz.
//!
//! The tests in `tests/` run the full flow — parameters through the input
//! generator, an instrumented algorithm, and the playback controller —
//! the way the presentation layer consumes it.
