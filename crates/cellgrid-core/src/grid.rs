//! Fixed-size cell storage

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};

/// Dense storage for a fixed-size grid of cells
///
/// Every slot exists from construction onward; clearing a cell resets it
/// to [`Cell::Empty`] rather than removing it. Cells are stored row-major.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: u32,
    cols: u16,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with the given dimensions, all cells empty
    pub fn new(rows: u32, cols: u16) -> Result<Self> {
        if rows == 0 || rows > MAX_ROWS || cols == 0 || cols > MAX_COLS {
            return Err(Error::InvalidDimensions { rows, cols });
        }
        let len = rows as usize * cols as usize;
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Empty; len],
        })
    }

    /// Number of rows
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Check whether a position lies inside the grid
    pub fn contains(&self, row: u32, col: u16) -> bool {
        row < self.rows && col < self.cols
    }

    fn index(&self, row: u32, col: u16) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    /// The cell at a position, or `None` if out of bounds
    pub fn cell(&self, row: u32, col: u16) -> Option<&Cell> {
        if !self.contains(row, col) {
            return None;
        }
        self.cells.get(self.index(row, col))
    }

    /// Mutable access to the cell at a position, or `None` if out of bounds
    pub fn cell_mut(&mut self, row: u32, col: u16) -> Option<&mut Cell> {
        if !self.contains(row, col) {
            return None;
        }
        let idx = self.index(row, col);
        self.cells.get_mut(idx)
    }

    /// Count of non-empty cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}
