//! Cell content types

use crate::MAX_DISPLAY_LEN;

/// Evaluation state of a formula cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormulaState {
    /// The last evaluation succeeded; the cell displays its result
    Evaluated,
    /// The last evaluation failed; the cell displays its source text
    Invalid,
}

/// The classified kind of a cell, as reported to collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Nothing stored
    Empty,
    /// Free-form text
    Text,
    /// A numeric entry
    Number,
    /// A formula, with its evaluation state
    Formula(FormulaState),
}

impl CellKind {
    /// Check if this is the empty kind
    pub fn is_empty(&self) -> bool {
        matches!(self, CellKind::Empty)
    }

    /// Check if this is a formula kind (in either evaluation state)
    pub fn is_formula(&self) -> bool {
        matches!(self, CellKind::Formula(_))
    }
}

/// The content of one grid cell
///
/// Number and formula cells keep both text and numeric value; formula
/// cells additionally keep their raw source so they can be re-evaluated
/// when other cells change.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    /// An empty cell
    #[default]
    Empty,
    /// A text cell, storing the raw input
    Text(String),
    /// A number cell, storing the input text and its parsed value
    Number {
        /// The numeric text as entered
        text: String,
        /// The parsed value
        value: f64,
    },
    /// A formula cell, storing the source and the last good result
    Formula {
        /// The raw formula text as entered (including the `=` prefix)
        source: String,
        /// The most recently computed result; stale while [`FormulaState::Invalid`]
        value: f64,
        /// Whether the most recent evaluation succeeded
        state: FormulaState,
    },
}

impl Cell {
    /// The kind tag for this cell
    pub fn kind(&self) -> CellKind {
        match self {
            Cell::Empty => CellKind::Empty,
            Cell::Text(_) => CellKind::Text,
            Cell::Number { .. } => CellKind::Number,
            Cell::Formula { state, .. } => CellKind::Formula(*state),
        }
    }

    /// The numeric value of this cell (0.0 for empty and text cells)
    pub fn value(&self) -> f64 {
        match self {
            Cell::Number { value, .. } | Cell::Formula { value, .. } => *value,
            _ => 0.0,
        }
    }

    /// The text this cell displays
    ///
    /// Evaluated formulas display their formatted result; invalid formulas
    /// display their source so the user can see what needs fixing.
    pub fn display_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(text) | Cell::Number { text, .. } => text.clone(),
            Cell::Formula {
                source,
                value,
                state,
            } => match state {
                FormulaState::Evaluated => format_number(*value),
                FormulaState::Invalid => source.clone(),
            },
        }
    }

    /// The formula source, if this is a formula cell
    pub fn formula_source(&self) -> Option<&str> {
        match self {
            Cell::Formula { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Check if this cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Format a numeric value for display
///
/// Whole numbers print without a decimal point; everything else uses the
/// shortest representation that round-trips.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Clamp text to [`MAX_DISPLAY_LEN`] bytes without splitting a character
pub fn truncate_display(text: &str) -> &str {
    if text.len() <= MAX_DISPLAY_LEN {
        return text;
    }
    let mut end = MAX_DISPLAY_LEN;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cell_kind() {
        assert_eq!(Cell::Empty.kind(), CellKind::Empty);
        assert_eq!(Cell::Text("hi".into()).kind(), CellKind::Text);

        let number = Cell::Number {
            text: "4".into(),
            value: 4.0,
        };
        assert_eq!(number.kind(), CellKind::Number);

        let formula = Cell::Formula {
            source: "=1".into(),
            value: 1.0,
            state: FormulaState::Evaluated,
        };
        assert_eq!(formula.kind(), CellKind::Formula(FormulaState::Evaluated));
        assert!(formula.kind().is_formula());
        assert!(!formula.kind().is_empty());
        assert!(Cell::Empty.kind().is_empty());
    }

    #[test]
    fn test_cell_value() {
        assert_eq!(Cell::Empty.value(), 0.0);
        assert_eq!(Cell::Text("12".into()).value(), 0.0);
        let number = Cell::Number {
            text: "2.5".into(),
            value: 2.5,
        };
        assert_eq!(number.value(), 2.5);
        let formula = Cell::Formula {
            source: "=1+1".into(),
            value: 2.0,
            state: FormulaState::Evaluated,
        };
        assert_eq!(formula.value(), 2.0);
    }

    #[test]
    fn test_display_text() {
        assert_eq!(Cell::Empty.display_text(), "");
        assert_eq!(Cell::Text("note".into()).display_text(), "note");

        let number = Cell::Number {
            text: "3.50".into(),
            value: 3.5,
        };
        assert_eq!(number.display_text(), "3.50");

        let evaluated = Cell::Formula {
            source: "=1+2".into(),
            value: 3.0,
            state: FormulaState::Evaluated,
        };
        assert_eq!(evaluated.display_text(), "3");

        // A broken formula shows its source, not a stale number
        let invalid = Cell::Formula {
            source: "=1+".into(),
            value: 3.0,
            state: FormulaState::Invalid,
        };
        assert_eq!(invalid.display_text(), "=1+");
    }

    #[test]
    fn test_formula_source() {
        let formula = Cell::Formula {
            source: "=A1".into(),
            value: 0.0,
            state: FormulaState::Evaluated,
        };
        assert_eq!(formula.formula_source(), Some("=A1"));
        assert_eq!(Cell::Text("=A1".into()).formula_source(), None);
        assert_eq!(Cell::Empty.formula_source(), None);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-7.0), "-7");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(1234567.0), "1234567");
    }

    #[test]
    fn test_truncate_display() {
        assert_eq!(truncate_display("short"), "short");

        let exact = "x".repeat(MAX_DISPLAY_LEN);
        assert_eq!(truncate_display(&exact), exact);

        let long = "x".repeat(MAX_DISPLAY_LEN + 5);
        assert_eq!(truncate_display(&long).len(), MAX_DISPLAY_LEN);

        // Never splits a multi-byte character
        let multibyte = format!("{}é", "x".repeat(MAX_DISPLAY_LEN - 1));
        let clipped = truncate_display(&multibyte);
        assert_eq!(clipped, "x".repeat(MAX_DISPLAY_LEN - 1));
        assert!(clipped.len() <= MAX_DISPLAY_LEN);
    }
}
