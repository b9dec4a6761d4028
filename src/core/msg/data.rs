use serde::{Deserialize, Serialize};

use crate::domain::dataset::Dataset;

/// Messages specific to DataState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataMsg {
    /// Kick off the one-shot dataset fetch. Issued once at startup; further
    /// Load messages are ignored (no polling, no retry).
    Load,

    /// The fetch resolved with a valid dataset; replaces any previous
    /// dataset wholesale.
    DatasetLoaded(Dataset),

    /// The fetch failed (network or decode). Carries the operator-facing
    /// error description.
    LoadFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_msg_equality() {
        assert_eq!(DataMsg::Load, DataMsg::Load);
        assert_ne!(
            DataMsg::LoadFailed("a".to_string()),
            DataMsg::LoadFailed("b".to_string())
        );
    }

    #[test]
    fn test_data_msg_serialization() {
        let msg = DataMsg::LoadFailed("connection refused".to_string());
        let serialized = serde_json::to_string(&msg).unwrap();
        let deserialized: DataMsg = serde_json::from_str(&serialized).unwrap();
        assert_eq!(msg, deserialized);
    }
}
