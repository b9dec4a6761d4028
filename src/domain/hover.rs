//! Hover/highlight state machine.
//!
//! The row/column currently under pointer (or keyboard cursor) focus,
//! modelled as an explicit finite state value. All transitions go through the
//! methods here so the highlight logic stays unit-testable independent of
//! rendering. The state machine is single-threaded and event-driven; every
//! transition is instantaneous from the caller's perspective.

use serde::{Deserialize, Serialize};

/// What happens when a column is entered while a row is already hovered
/// (and vice versa). Selected via configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HighlightPolicy {
    /// Entering a column clears the row and vice versa.
    #[default]
    Exclusive,
    /// Row and column highlight coexist.
    Combined,
}

/// The mutually-exclusive hover focus.
///
/// `Cell` is only reachable under [`HighlightPolicy::Combined`]; under the
/// exclusive policy the state is always one of `Idle`, `Row` or `Column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HoverSelection {
    #[default]
    Idle,
    Row(usize),
    Column(usize),
    Cell {
        row: usize,
        column: usize,
    },
}

/// Derived highlight of one body cell given the current hover state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellHighlight {
    /// No hover is active anywhere.
    Normal,
    /// A hover is active but this cell is not on the hovered row/column.
    Dimmed,
    /// This cell sits on the hovered row or column.
    Full,
}

impl HoverSelection {
    /// Pointer entered the label of row `row`.
    pub fn enter_row(self, row: usize, policy: HighlightPolicy) -> Self {
        match (policy, self) {
            (HighlightPolicy::Combined, Self::Column(column))
            | (HighlightPolicy::Combined, Self::Cell { column, .. }) => Self::Cell { row, column },
            _ => Self::Row(row),
        }
    }

    /// Pointer entered the header of column `column`.
    pub fn enter_column(self, column: usize, policy: HighlightPolicy) -> Self {
        match (policy, self) {
            (HighlightPolicy::Combined, Self::Row(row))
            | (HighlightPolicy::Combined, Self::Cell { row, .. }) => Self::Cell { row, column },
            _ => Self::Column(column),
        }
    }

    /// Pointer left the hovered label; always returns to idle.
    pub fn leave(self) -> Self {
        Self::Idle
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn hovered_row(&self) -> Option<usize> {
        match self {
            Self::Row(row) | Self::Cell { row, .. } => Some(*row),
            _ => None,
        }
    }

    pub fn hovered_column(&self) -> Option<usize> {
        match self {
            Self::Column(column) | Self::Cell { column, .. } => Some(*column),
            _ => None,
        }
    }

    /// Derived highlight for the body cell at `(row, column)`.
    ///
    /// `Full` when the cell's row or column is hovered, `Dimmed` when some
    /// other hover is active, `Normal` when idle.
    pub fn highlight_for(&self, row: usize, column: usize) -> CellHighlight {
        if self.is_idle() {
            return CellHighlight::Normal;
        }
        if self.hovered_row() == Some(row) || self.hovered_column() == Some(column) {
            CellHighlight::Full
        } else {
            CellHighlight::Dimmed
        }
    }
}
