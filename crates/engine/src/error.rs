//! Error types for pattern evaluation

use std::time::Duration;

use thiserror::Error;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors reported by the engine. All of them are returned as values and none are
/// retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Pattern was empty or whitespace-only; reported before compilation
    #[error("Regex pattern is required.")]
    EmptyPattern,

    /// Diagnostic from the regex compiler, passed through unmodified
    #[error("{0}")]
    Pattern(String),

    /// Matching ran past the configured wall-clock budget
    #[error("Matching timed out after {} ms", .budget.as_millis())]
    MatchTimeout { budget: Duration },

    /// Caller aborted the evaluation
    #[error("Matching was cancelled")]
    Cancelled,
}
