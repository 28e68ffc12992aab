//! # cellgrid-formula
//!
//! Formula recognition and evaluation for the cellgrid calculator.
//!
//! The formula language is deliberately small: a formula is an `=` sign
//! followed by terms joined with `+`, where each term is a numeric literal
//! (`42`, `2.5`) or a single-letter cell reference (`A1`, `c12`).
//!
//! ## Example
//!
//! ```rust
//! use cellgrid_core::{Cell, Grid};
//! use cellgrid_formula::{evaluate, is_formula, EvaluationContext};
//!
//! let mut grid = Grid::new(10, 7).unwrap();
//! *grid.cell_mut(0, 0).unwrap() = Cell::Number {
//!     text: "40".into(),
//!     value: 40.0,
//! };
//!
//! assert!(is_formula("=A1+2"));
//!
//! let ctx = EvaluationContext::new(&grid);
//! assert_eq!(evaluate("=A1+2", &ctx).unwrap(), 42.0);
//! ```

pub mod error;
pub mod evaluator;
pub mod stack;

pub use error::{FormulaError, FormulaResult};
pub use evaluator::{evaluate, is_formula, EvaluationContext};
pub use stack::NumberStack;
