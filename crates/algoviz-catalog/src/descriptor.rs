//! Algorithm descriptors: static metadata plus the pure entry points.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use algoviz_input::{ArrayShape, Input};
use algoviz_trace::Trace;

use crate::category::Category;
use crate::error::{Error, Result};

/// Signature of an instrumented algorithm adapted to the input boundary.
pub type ExecuteFn = fn(&Input) -> Result<Trace>;

/// Signature of an input generator for one family.
pub type GenerateFn = fn(&mut dyn RngCore, usize, ArrayShape) -> Result<Input>;

/// One algorithm's static metadata and entry points.
///
/// Descriptors are constructed once at process start inside a registry
/// and never mutated afterwards.
#[derive(Clone)]
pub struct AlgorithmDescriptor {
    pub id: u32,
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub best_case: &'static str,
    pub average_case: &'static str,
    pub worst_case: &'static str,
    pub pseudocode: &'static str,
    pub explanation: &'static [&'static str],
    pub(crate) execute: ExecuteFn,
    pub(crate) generate: GenerateFn,
}

impl AlgorithmDescriptor {
    /// Generate an input of `size` elements/nodes for this algorithm.
    ///
    /// `shape` applies to sorting only; searching always produces a
    /// sorted array with a present target, and the graph families ignore
    /// the shape entirely.
    pub fn generate_input(
        &self,
        rng: &mut dyn RngCore,
        size: usize,
        shape: ArrayShape,
    ) -> Result<Input> {
        (self.generate)(rng, size, shape)
    }

    /// Run the algorithm over `input`, validating preconditions first.
    ///
    /// On any error no trace is exposed; a finished trace has passed the
    /// invariant checker.
    pub fn execute(&self, input: &Input) -> Result<Trace> {
        self.category.check_input(input)?;

        let trace = (self.execute)(input)?;
        trace
            .check_invariants()
            .map_err(|violation| Error::Execution(violation.to_string()))?;

        tracing::debug!(
            algorithm = self.name,
            steps = trace.len(),
            "trace generated"
        );
        Ok(trace)
    }

    /// Serializable metadata view for the presentation boundary.
    pub fn summary(&self) -> AlgorithmSummary {
        AlgorithmSummary {
            id: self.id,
            name: self.name.to_string(),
            category: self.category,
            description: self.description.to_string(),
            time_complexity: self.time_complexity.to_string(),
            space_complexity: self.space_complexity.to_string(),
            best_case: self.best_case.to_string(),
            average_case: self.average_case.to_string(),
            worst_case: self.worst_case.to_string(),
        }
    }
}

impl std::fmt::Debug for AlgorithmDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlgorithmDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// Metadata sent to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmSummary {
    pub id: u32,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub time_complexity: String,
    pub space_complexity: String,
    pub best_case: String,
    pub average_case: String,
    pub worst_case: String,
}
