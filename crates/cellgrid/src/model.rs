//! The grid model: classification, storage, and recalculation
//!
//! [`GridModel`] ties the core types and the formula engine together.
//! Every edit is classified as text, number, or formula; formulas are
//! evaluated against the current grid; and every other formula cell is
//! then re-evaluated so dependent results stay current. Display changes
//! are pushed to the registered callback, never pulled.

use crate::display::DisplayCallback;
use cellgrid_core::{truncate_display, Cell, CellKind, CellRef, Error, FormulaState, Grid, Result};
use cellgrid_formula::{evaluate, is_formula, EvaluationContext};

/// The computational model behind a grid of cells
///
/// The model owns the grid and drives all mutation through three entry
/// points: [`set_cell`](Self::set_cell), [`clear_cell`](Self::clear_cell),
/// and [`clear_all`](Self::clear_all). Reads never change state.
pub struct GridModel {
    grid: Grid,
    display: DisplayCallback,
}

impl GridModel {
    /// Create a model with the given dimensions and no display callback
    pub fn new(rows: u32, cols: u16) -> Result<Self> {
        Ok(Self {
            grid: Grid::new(rows, cols)?,
            display: Box::new(|_, _| {}),
        })
    }

    /// Register the callback that receives display updates
    ///
    /// Replaces any previously registered callback. Updates are delivered
    /// synchronously from within the mutating call.
    pub fn set_display_callback(&mut self, callback: DisplayCallback) {
        self.display = callback;
    }

    /// Number of rows
    pub fn rows(&self) -> u32 {
        self.grid.rows()
    }

    /// Number of columns
    pub fn cols(&self) -> u16 {
        self.grid.cols()
    }

    /// Read access to the underlying grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The classified kind of a cell
    pub fn kind(&self, row: u32, col: u16) -> Result<CellKind> {
        self.check_position(row, col)?;
        Ok(self
            .grid
            .cell(row, col)
            .map(Cell::kind)
            .unwrap_or(CellKind::Empty))
    }

    /// The numeric value of a cell (0.0 for empty and text cells)
    ///
    /// For formula cells this is the most recently evaluated result; it
    /// goes stale if the formula currently fails to evaluate.
    pub fn value(&self, row: u32, col: u16) -> Result<f64> {
        self.check_position(row, col)?;
        Ok(self.grid.cell(row, col).map(Cell::value).unwrap_or(0.0))
    }

    /// The text a cell currently displays (empty string for empty cells)
    pub fn text(&self, row: u32, col: u16) -> Result<String> {
        self.check_position(row, col)?;
        Ok(self
            .grid
            .cell(row, col)
            .map(Cell::display_text)
            .unwrap_or_default())
    }

    /// Store raw text into a cell and recalculate the grid
    ///
    /// The text is classified in order: formula shape first, then number,
    /// then plain text. A formula that fails to evaluate is still stored
    /// (kind [`CellKind::Formula`] with [`FormulaState::Invalid`]) and
    /// keeps the cell's previous numeric value, so one bad edit never
    /// destroys a computed result.
    ///
    /// After the target cell is updated, every other formula cell is
    /// re-evaluated; each one whose displayed text changes is pushed to
    /// the display callback. The target cell's update is pushed last.
    pub fn set_cell(&mut self, row: u32, col: u16, raw: &str) -> Result<()> {
        self.check_position(row, col)?;
        let raw = truncate_display(raw);
        self.classify_and_store(row, col, raw);
        self.recompute_others(row, col);
        self.emit(row, col);
        Ok(())
    }

    /// Reset a cell to empty and notify the display with an empty string
    ///
    /// Clearing does not recalculate: formulas referencing the cleared
    /// cell keep their stale values until the next edit.
    pub fn clear_cell(&mut self, row: u32, col: u16) -> Result<()> {
        self.check_position(row, col)?;
        self.clear_slot(row, col);
        Ok(())
    }

    /// Clear every cell, notifying the display once per cell
    pub fn clear_all(&mut self) {
        for row in 0..self.grid.rows() {
            for col in 0..self.grid.cols() {
                self.clear_slot(row, col);
            }
        }
    }

    // === Internals ===

    fn check_position(&self, row: u32, col: u16) -> Result<()> {
        if row >= self.grid.rows() {
            return Err(Error::RowOutOfBounds(row, self.grid.rows() - 1));
        }
        if col >= self.grid.cols() {
            return Err(Error::ColumnOutOfBounds(col, self.grid.cols() - 1));
        }
        Ok(())
    }

    /// Classify raw text and store the resulting cell at (row, col)
    fn classify_and_store(&mut self, row: u32, col: u16, raw: &str) {
        let trimmed = raw.trim_start();

        let cell = if is_formula(trimmed) {
            let ctx = EvaluationContext::new(&self.grid);
            match evaluate(trimmed, &ctx) {
                Ok(value) => Cell::Formula {
                    source: raw.to_string(),
                    value,
                    state: FormulaState::Evaluated,
                },
                Err(err) => {
                    log::warn!(
                        "formula at {} failed to evaluate: {}",
                        CellRef::new(row, col),
                        err
                    );
                    // A failed evaluation leaves the previous value in place
                    let stale = self.grid.cell(row, col).map(Cell::value).unwrap_or(0.0);
                    Cell::Formula {
                        source: raw.to_string(),
                        value: stale,
                        state: FormulaState::Invalid,
                    }
                }
            }
        } else if is_numeric_text(trimmed) {
            Cell::Number {
                text: raw.to_string(),
                value: parse_number_loose(trimmed),
            }
        } else {
            Cell::Text(raw.to_string())
        };

        if let Some(slot) = self.grid.cell_mut(row, col) {
            *slot = cell;
        }
    }

    /// Re-evaluate every formula cell except the one just edited
    fn recompute_others(&mut self, edited_row: u32, edited_col: u16) {
        let mut changed = 0usize;
        for row in 0..self.grid.rows() {
            for col in 0..self.grid.cols() {
                if row == edited_row && col == edited_col {
                    continue;
                }
                if self.refresh_formula(row, col) {
                    changed += 1;
                }
            }
        }
        log::trace!(
            "recalculated after edit at {}: {} cell(s) changed",
            CellRef::new(edited_row, edited_col),
            changed
        );
    }

    /// Re-evaluate one cell if it holds a formula
    ///
    /// Returns whether the cell's displayed text changed (in which case
    /// the display callback has been invoked for it).
    fn refresh_formula(&mut self, row: u32, col: u16) -> bool {
        let (source, old_value, old_text) = match self.grid.cell(row, col) {
            Some(cell) => match cell.formula_source() {
                Some(source) => (source.to_string(), cell.value(), cell.display_text()),
                None => return false,
            },
            None => return false,
        };

        let ctx = EvaluationContext::new(&self.grid);
        let cell = match evaluate(&source, &ctx) {
            Ok(value) => Cell::Formula {
                source,
                value,
                state: FormulaState::Evaluated,
            },
            Err(_) => Cell::Formula {
                source,
                value: old_value,
                state: FormulaState::Invalid,
            },
        };

        let new_text = cell.display_text();
        if let Some(slot) = self.grid.cell_mut(row, col) {
            *slot = cell;
        }

        if new_text != old_text {
            (self.display)(CellRef::new(row, col), &new_text);
            true
        } else {
            false
        }
    }

    /// Push a cell's current display text to the callback
    fn emit(&mut self, row: u32, col: u16) {
        let text = match self.grid.cell(row, col) {
            Some(cell) => cell.display_text(),
            None => return,
        };
        (self.display)(CellRef::new(row, col), &text);
    }

    /// Reset one slot to empty and notify the display
    fn clear_slot(&mut self, row: u32, col: u16) {
        if let Some(slot) = self.grid.cell_mut(row, col) {
            *slot = Cell::Empty;
            (self.display)(CellRef::new(row, col), "");
        }
    }
}

/// Check whether the whole text is digits and dots
///
/// This is the number classification rule; whether the text parses as one
/// well-formed number is a looser question answered by
/// [`parse_number_loose`].
fn is_numeric_text(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// Parse numeric text leniently: the longest leading prefix that forms a
/// number wins, and text with no such prefix parses as 0.0
fn parse_number_loose(text: &str) -> f64 {
    if let Ok(value) = text.parse::<f64>() {
        return value;
    }

    // Take digits and at most one dot, stop at the first character that
    // can no longer extend a number.
    let mut end = 0;
    let mut seen_dot = false;
    for c in text.chars() {
        match c {
            '0'..='9' => end += 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }

    text[..end].parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric_text() {
        assert!(is_numeric_text("42"));
        assert!(is_numeric_text("2.5"));
        assert!(is_numeric_text(".5"));
        assert!(is_numeric_text("5."));
        assert!(is_numeric_text("1.2.3")); // shape only; parsed leniently

        assert!(!is_numeric_text(""));
        assert!(!is_numeric_text("4 2"));
        assert!(!is_numeric_text("-1"));
        assert!(!is_numeric_text("1e5"));
        assert!(!is_numeric_text("price: 4"));
    }

    #[test]
    fn test_parse_number_loose() {
        assert_eq!(parse_number_loose("42"), 42.0);
        assert_eq!(parse_number_loose("2.5"), 2.5);
        assert_eq!(parse_number_loose(".5"), 0.5);
        assert_eq!(parse_number_loose("5."), 5.0);

        // The longest leading number wins
        assert_eq!(parse_number_loose("1.2.3"), 1.2);
        assert_eq!(parse_number_loose("7..2"), 7.0);

        // No leading number at all
        assert_eq!(parse_number_loose("."), 0.0);
        assert_eq!(parse_number_loose(".."), 0.0);
    }

    #[test]
    fn test_check_position() {
        let model = GridModel::new(10, 7).unwrap();
        assert!(model.text(0, 0).is_ok());
        assert!(model.text(9, 6).is_ok());
        assert!(matches!(
            model.text(10, 0),
            Err(Error::RowOutOfBounds(10, 9))
        ));
        assert!(matches!(
            model.text(0, 7),
            Err(Error::ColumnOutOfBounds(7, 6))
        ));
    }
}
