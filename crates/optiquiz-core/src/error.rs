//! Error types for OptiQuiz

use thiserror::Error;

/// Main error type for OptiQuiz operations
#[derive(Debug, Error)]
pub enum QuizError {
    /// Malformed or out-of-range input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Teleport placement exceeded its attempt bound
    #[error("Board generation gave up after {attempts} attempts")]
    Generation { attempts: usize },

    /// Choice synthesis could not reach the requested number of distinct values
    #[error("Could not build {count} distinct choices around {correct} within {attempts} attempts")]
    DistractorGeneration {
        correct: u32,
        count: usize,
        attempts: usize,
    },

    /// Solver invoked with empty or inconsistent input
    #[error("Solver precondition failed: {0}")]
    SolverPrecondition(String),

    /// Board violates its structural invariants
    #[error("Invalid board: {0}")]
    InvalidBoard(String),

    /// Performance or result store failure
    #[error("Store error: {0}")]
    Store(String),

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for OptiQuiz operations
pub type Result<T> = std::result::Result<T, QuizError>;
