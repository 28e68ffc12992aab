//! # cellgrid
//!
//! The computational core of a small grid calculator.
//!
//! A fixed-size grid of cells accepts raw text edits. Each edit is
//! classified as plain text, a number, or a formula (`=A1+2.5` style sums
//! over literals and single-letter cell references). After every edit the
//! model re-evaluates the remaining formula cells and pushes changed
//! display text to a registered callback, so a front end only ever
//! renders what it is told.
//!
//! ## Example
//!
//! ```rust
//! use cellgrid::prelude::*;
//!
//! let mut model = GridModel::new(10, 7).unwrap();
//! model.set_cell(0, 0, "40").unwrap();
//! model.set_cell(1, 0, "=A1+2").unwrap();
//!
//! assert_eq!(model.text(1, 0).unwrap(), "42");
//!
//! // Editing A1 recalculates the dependent formula
//! model.set_cell(0, 0, "1").unwrap();
//! assert_eq!(model.text(1, 0).unwrap(), "3");
//! ```

pub mod display;
pub mod model;
pub mod prelude;

// Re-export display and model types
pub use display::{DisplayCallback, DisplayLog, DisplayUpdate};
pub use model::GridModel;

// Re-export core types
pub use cellgrid_core::{
    format_number,
    truncate_display,
    // Cell types
    Cell,
    CellKind,
    // Addressing
    CellRef,
    // Error types
    Error,
    FormulaState,
    Grid,
    Result,
    // Constants
    MAX_COLS,
    MAX_DISPLAY_LEN,
    MAX_ROWS,
};

// Re-export formula types
pub use cellgrid_formula::{
    evaluate, is_formula, EvaluationContext, FormulaError, FormulaResult, NumberStack,
};
