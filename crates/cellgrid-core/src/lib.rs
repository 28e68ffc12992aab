//! # cellgrid-core
//!
//! Core data structures for the cellgrid calculator.
//!
//! This crate provides the fundamental types used throughout cellgrid:
//! - [`Cell`] and [`CellKind`] - Classified cell content (text, numbers, formulas)
//! - [`CellRef`] - Cell addressing in A1-style notation
//! - [`Grid`] - Dense, fixed-size cell storage
//!
//! ## Example
//!
//! ```rust
//! use cellgrid_core::{Cell, CellRef, Grid};
//!
//! let mut grid = Grid::new(10, 7).unwrap();
//! *grid.cell_mut(0, 0).unwrap() = Cell::Number {
//!     text: "42".into(),
//!     value: 42.0,
//! };
//!
//! let cell = CellRef::parse("A1").unwrap();
//! assert_eq!(grid.cell(cell.row, cell.col).unwrap().value(), 42.0);
//! ```

pub mod address;
pub mod cell;
pub mod error;
pub mod grid;

// Re-exports for convenience
pub use address::CellRef;
pub use cell::{format_number, truncate_display, Cell, CellKind, FormulaState};
pub use error::{Error, Result};
pub use grid::Grid;

/// Maximum number of rows a grid may have
pub const MAX_ROWS: u32 = 999;

/// Maximum number of columns a grid may have (one letter per column)
pub const MAX_COLS: u16 = 26;

/// Maximum byte length of a cell's stored text
pub const MAX_DISPLAY_LEN: usize = 30;
