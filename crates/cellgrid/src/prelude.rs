//! Prelude module - common imports for cellgrid users
//!
//! ```rust
//! use cellgrid::prelude::*;
//! ```

pub use crate::{
    // Cell types
    Cell,
    CellKind,
    // Addressing
    CellRef,
    // Display plumbing
    DisplayCallback,
    DisplayLog,
    DisplayUpdate,
    // Error types
    Error,
    FormulaError,
    FormulaResult,
    FormulaState,
    Grid,
    // Main types
    GridModel,
    Result,
};
