//! Core error types.
//!
//! The scoring and benchmarking engine returns typed errors so callers can
//! tell "unanswered" (a valid zero-score state) apart from a malformed
//! selection, and can skip degenerate benchmark rows without string matching.

use thiserror::Error;

/// A selection that cannot be scored against the question catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSelection {
    /// The answer file referenced a question id the course does not have.
    #[error("selection references unknown question {0}")]
    UnknownQuestion(u32),

    /// The chosen label is not among the question's options.
    #[error("question {question_id} has no option labeled {label:?}")]
    UnknownOption { question_id: u32, label: String },
}

/// A benchmark row whose normalized total is zero, leaving the score gap
/// undefined. Callers skip the row rather than divide by zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("benchmark for {university:?} totals zero, score gap is undefined")]
pub struct DegenerateBenchmark {
    pub university: String,
}
