//! Formula evaluation
//!
//! Formulas are sums of terms: `= Term (+ Term)*`, where a term is either
//! a numeric literal or a single-letter cell reference like `A1`. There is
//! no AST; a single left-to-right scan pushes operand values onto a
//! [`NumberStack`] and counts `+` operators, then checks that the two
//! agree before summing.

use crate::error::{FormulaError, FormulaResult};
use crate::stack::NumberStack;
use cellgrid_core::{Cell, Grid};
use lazy_regex::regex_is_match;

/// Check whether raw text has the surface syntax of a formula
///
/// A formula starts with `=` (after leading whitespace) and contains only
/// letters, digits, `+`, `.`, and whitespace after it. This is a shape
/// check only; whether the content evaluates is decided by [`evaluate`].
///
/// # Example
/// ```rust
/// use cellgrid_formula::is_formula;
///
/// assert!(is_formula("=A1+2"));
/// assert!(is_formula("  = 1 + 2"));
/// assert!(!is_formula("A1+2"));
/// assert!(!is_formula("=1-2"));
/// ```
pub fn is_formula(text: &str) -> bool {
    match text.trim_start().strip_prefix('=') {
        Some(rest) => regex_is_match!(r"^[A-Za-z0-9+.\s]*$", rest),
        None => false,
    }
}

/// Context for formula evaluation
///
/// Borrows the grid so references can be resolved against the values the
/// cells hold right now.
pub struct EvaluationContext<'a> {
    grid: &'a Grid,
}

impl<'a> EvaluationContext<'a> {
    /// Create a context reading from the given grid
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Resolve a reference token to the referenced cell's numeric value
    ///
    /// Empty and text cells contribute 0.0; formula cells contribute their
    /// most recently computed result.
    fn resolve(&self, token: &str, row: u32, col: u16) -> FormulaResult<f64> {
        self.grid
            .cell(row, col)
            .map(Cell::value)
            .ok_or_else(|| FormulaError::InvalidReference(token.to_string()))
    }
}

/// Evaluate a formula against the current grid contents
///
/// # Example
/// ```rust
/// use cellgrid_core::Grid;
/// use cellgrid_formula::{evaluate, EvaluationContext};
///
/// let grid = Grid::new(10, 7).unwrap();
/// let ctx = EvaluationContext::new(&grid);
/// assert_eq!(evaluate("=1+2+3", &ctx).unwrap(), 6.0);
/// ```
pub fn evaluate(formula: &str, ctx: &EvaluationContext<'_>) -> FormulaResult<f64> {
    let body = formula
        .trim_start()
        .strip_prefix('=')
        .ok_or_else(|| FormulaError::Syntax("Formula must start with '='".into()))?;

    let mut scanner = Scanner::new(body);
    let mut stack = NumberStack::new();
    let mut operators = 0usize;

    loop {
        scanner.skip_whitespace();
        let c = match scanner.peek_char() {
            Some(c) => c,
            None => break,
        };

        if c == '+' {
            scanner.advance();
            operators += 1;
        } else if c.is_ascii_alphabetic() {
            let (token, row, col) = scanner.scan_reference()?;
            stack.push(ctx.resolve(&token, row, col)?);
        } else if c.is_ascii_digit() || c == '.' {
            stack.push(scanner.scan_number()?);
        } else {
            return Err(FormulaError::Syntax(format!(
                "unexpected character '{}'",
                c
            )));
        }
    }

    // Each '+' must join exactly two operands, so n operators need n+1
    // operands. This catches dangling operators and adjacent terms alike.
    let expected = operators + 1;
    if stack.len() != expected {
        return Err(FormulaError::Arity {
            expected,
            found: stack.len(),
        });
    }

    let mut sum = 0.0;
    while !stack.is_empty() {
        sum += stack.pop()?;
    }
    Ok(sum)
}

/// Cursor over the formula body
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().map_or(false, |c| c.is_whitespace()) {
            self.advance();
        }
    }

    /// Scan a cell reference: one column letter and a 1-based row number
    ///
    /// Case is folded, so `b2` and `B2` name the same cell. A row number
    /// of zero or one past the grid edge is reported as an invalid
    /// reference rather than a syntax error.
    fn scan_reference(&mut self) -> FormulaResult<(String, u32, u16)> {
        let start = self.pos;
        let letter = match self.peek_char() {
            Some(c) => c,
            None => return Err(FormulaError::Syntax("unexpected end of formula".into())),
        };
        self.advance();

        if !self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
            return Err(FormulaError::Syntax(format!(
                "expected a row number after column '{}'",
                letter
            )));
        }

        while self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
            self.advance();
        }

        let token = &self.input[start..self.pos];
        let col = (letter.to_ascii_uppercase() as u8 - b'A') as u16;
        let row: u32 = token[1..]
            .parse()
            .map_err(|_| FormulaError::InvalidReference(token.to_string()))?;
        if row == 0 {
            return Err(FormulaError::InvalidReference(token.to_string()));
        }

        Ok((token.to_string(), row - 1, col))
    }

    /// Scan a numeric literal: digits with at most one decimal point
    fn scan_number(&mut self) -> FormulaResult<f64> {
        let start = self.pos;
        while self
            .peek_char()
            .map_or(false, |c| c.is_ascii_digit() || c == '.')
        {
            self.advance();
        }

        let token = &self.input[start..self.pos];
        token
            .parse()
            .map_err(|_| FormulaError::Syntax(format!("malformed number '{}'", token)))
    }
}
