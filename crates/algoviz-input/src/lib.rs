//! AlgoViz Input Generation
//!
//! Produces algorithm-appropriate inputs (arrays or graphs) from size and
//! shape parameters.
//!
//! The generator is stateless: all randomness flows through a
//! caller-supplied [`rand::Rng`], so tests substitute a seeded `StdRng`
//! and reproduce every input exactly. Malformed parameters are rejected
//! up front, before any generation happens.

mod array;
mod error;
mod graph;
mod input;

pub use array::{array, search_input};
pub use error::{Error, Result};
pub use graph::graph;
pub use input::{ArrayShape, Input};
