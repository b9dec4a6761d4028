use serde::{Deserialize, Serialize};

pub mod data;
pub mod hover;
pub mod system;

use data::DataMsg;
use hover::HoverMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain
/// events; each variant delegates to the matching substate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    /// System operations (delegated to SystemState)
    System(SystemMsg),

    /// Dataset lifecycle operations (delegated to DataState)
    Data(DataMsg),

    /// Hover/highlight operations (delegated to HoverState)
    Hover(HoverMsg),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::System(SystemMsg::Quit), Msg::System(SystemMsg::Quit));
        assert_eq!(Msg::Hover(HoverMsg::Leave), Msg::Hover(HoverMsg::Leave));
        assert_ne!(
            Msg::Hover(HoverMsg::EnterRow(0)),
            Msg::Hover(HoverMsg::EnterRow(1))
        );
    }

    #[test]
    fn test_msg_serialization() {
        let msg = Msg::Hover(HoverMsg::EnterColumn(3));
        let serialized = serde_json::to_string(&msg).unwrap();
        let deserialized: Msg = serde_json::from_str(&serialized).unwrap();
        assert_eq!(msg, deserialized);
    }
}
