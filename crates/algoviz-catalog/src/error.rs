//! Error types for the catalog and execution boundary.

use thiserror::Error;

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced at the selection and execution boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// Lookup by an id no descriptor carries. Recovered locally by the
    /// selection layer; selection state is left unchanged.
    #[error("no algorithm with id {0}")]
    AlgorithmNotFound(u32),

    /// Input generation rejected the parameters.
    #[error("input generation failed: {0}")]
    Input(#[from] algoviz_input::Error),

    /// Input violates the selected algorithm's preconditions.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Unexpected failure inside an algorithm; a programming defect, not
    /// a user error. No partial trace is exposed.
    #[error("algorithm execution failed: {0}")]
    Execution(String),
}
