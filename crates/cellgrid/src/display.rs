//! Display-update notifications for the rendering collaborator.
//!
//! The model owns no rendering: whenever a cell's displayed text changes,
//! it hands the cell's position and new text to a registered callback.
//! [`DisplayLog`] is a ready-made collector used by the test suites to
//! verify update ordering.

use cellgrid_core::CellRef;

/// Callback type for receiving display updates.
///
/// The callback must not call back into the model; it only renders.
pub type DisplayCallback = Box<dyn FnMut(CellRef, &str) + Send>;

/// A single display change: one cell and the text it now shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayUpdate {
    /// The cell whose displayed text changed
    pub cell: CellRef,
    /// The new text (empty when the cell was cleared)
    pub text: String,
}

/// Simple update collector for testing display behavior.
#[derive(Debug, Default)]
pub struct DisplayLog {
    updates: Vec<DisplayUpdate>,
}

impl DisplayLog {
    pub fn new() -> Self {
        Self {
            updates: Vec::new(),
        }
    }

    pub fn push(&mut self, cell: CellRef, text: &str) {
        self.updates.push(DisplayUpdate {
            cell,
            text: text.to_string(),
        });
    }

    pub fn updates(&self) -> &[DisplayUpdate] {
        &self.updates
    }

    pub fn clear(&mut self) {
        self.updates.clear();
    }

    pub fn len(&self) -> usize {
        self.updates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    /// All updates recorded for one cell, oldest first.
    pub fn for_cell(&self, cell: CellRef) -> Vec<&DisplayUpdate> {
        self.updates.iter().filter(|u| u.cell == cell).collect()
    }

    /// The most recent text recorded for a cell, if any update arrived.
    pub fn last_text(&self, cell: CellRef) -> Option<&str> {
        self.updates
            .iter()
            .rev()
            .find(|u| u.cell == cell)
            .map(|u| u.text.as_str())
    }
}
