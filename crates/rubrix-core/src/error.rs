//! # Error Hierarchy
//!
//! Validation errors raised when raw user or wire input is turned into one
//! of the closed domain types. Each variant carries the rejected input so
//! the caller can echo it back.

use thiserror::Error;

/// Validation errors for domain primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Group identifier outside {A, B, C, D}.
    #[error("unknown group: \"{0}\" (expected one of A, B, C, D)")]
    UnknownGroup(String),

    /// Criterion outside the four assessed skills.
    #[error("unknown criterion: \"{0}\" (expected dribbling, passing, shooting or defense)")]
    UnknownCriterion(String),

    /// Grade value outside 1..=5.
    #[error("grade {0} out of range (expected 1-5)")]
    GradeOutOfRange(i64),

    /// Grade given as text that is not an integer.
    #[error("invalid grade: \"{0}\" (expected an integer 1-5)")]
    InvalidGrade(String),

    /// Student identifier is empty.
    #[error("invalid student ID: must be non-empty")]
    EmptyStudentId,
}
