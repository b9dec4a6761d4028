use serde::{Deserialize, Serialize};

/// Messages specific to HoverState
///
/// Pointer-enter/leave events in terminal form: the mouse moving over a row
/// label or column header, keyboard cursor movement, and Esc/leaving the
/// table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverMsg {
    EnterRow(usize),
    EnterColumn(usize),
    Leave,
}
