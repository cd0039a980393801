// Copyright 2025 Cowboy AI, LLC.

//! Error types for algebraic operations

use thiserror::Error;

use crate::laws::Law;

/// Errors that can occur when composing morphisms or checking laws
#[derive(Debug, Clone, Error)]
pub enum AlgebraError {
    /// Composition attempted on morphisms whose boundaries do not align
    #[error("Type mismatch: target {target} of the first morphism does not meet source {source} of the second")]
    TypeMismatch {
        /// Target object of the morphism applied first
        target: String,
        /// Source object of the morphism applied second
        r#source: String,
    },

    /// A law check found a counterexample
    #[error("Law violation: {law} fails on {counterexample}")]
    LawViolation {
        /// The law that was violated
        law: Law,
        /// The offending sample values, rendered for reporting
        counterexample: String,
    },

    /// Object not found in a category registry
    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    /// Morphism not found in a category registry
    #[error("Morphism not found: {0}")]
    MorphismNotFound(String),

    /// Registry entry already exists
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Invalid operation
    #[error("Invalid operation: {reason}")]
    InvalidOperation {
        /// Reason why the operation is invalid
        reason: String,
    },
}

/// Result type for algebraic operations
pub type AlgebraResult<T> = Result<T, AlgebraError>;
