//! Numeric scratch stack used during evaluation

use crate::error::{FormulaError, FormulaResult};

/// Initial capacity of the stack; grows as needed
const INITIAL_CAPACITY: usize = 16;

/// A growable stack of numeric intermediate values
///
/// One stack is scoped to a single evaluation; operands are pushed as the
/// formula is scanned and popped when the result is summed.
#[derive(Debug)]
pub struct NumberStack {
    values: Vec<f64>,
}

impl NumberStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self {
            values: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Push a value onto the stack
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Pop the most recently pushed value
    pub fn pop(&mut self) -> FormulaResult<f64> {
        self.values.pop().ok_or(FormulaError::EmptyStack)
    }

    /// Number of values currently on the stack
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the stack holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for NumberStack {
    fn default() -> Self {
        Self::new()
    }
}
