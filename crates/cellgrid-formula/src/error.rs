//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur during formula evaluation
#[derive(Debug, Error)]
pub enum FormulaError {
    /// The formula contains a character or token the grammar does not allow
    #[error("Syntax error: {0}")]
    Syntax(String),

    /// Operand count does not match the operator count
    #[error("Expected {expected} operands, found {found}")]
    Arity {
        /// Operand count implied by the `+` operators
        expected: usize,
        /// Operand count actually scanned
        found: usize,
    },

    /// Reference to a cell outside the grid
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// The evaluation stack was popped while empty
    #[error("Evaluation stack is empty")]
    EmptyStack,
}
