use crossterm::event::{KeyEvent, MouseEvent};
use serde::{Deserialize, Serialize};

use crate::domain::dataset::Dataset;

/// Raw messages from external sources (input, network, system)
/// These represent unprocessed external events that need to be translated to
/// domain messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Init,
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,

    // User input (raw terminal events)
    Key(KeyEvent),
    Mouse(MouseEvent),

    // Network events (dataset fetch outcome)
    DatasetLoaded(Dataset),
    LoadFailed(String),

    // System status
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render | RawMsg::Mouse(_))
    }
}
