pub mod data;
pub mod hover;
pub mod system;

use crate::{
    config::Config,
    domain::{dataset::Dataset, hover::HoverSelection, stats::ColumnStats},
};

pub use data::DataState;
pub use hover::HoverState;
pub use system::SystemState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub data: DataState,
    pub hover: HoverState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState from the loaded configuration
    pub fn new(config: Config) -> Self {
        Self {
            hover: HoverState::new(config.highlight),
            config: ConfigState { config },
            ..Default::default()
        }
    }

    /// The loaded dataset, if the fetch has resolved successfully
    pub fn dataset(&self) -> Option<&Dataset> {
        self.data.dataset()
    }

    /// Column statistics of the loaded dataset
    pub fn column_stats(&self) -> Option<&ColumnStats> {
        self.data.column_stats()
    }

    /// Current hover focus
    pub fn hover_selection(&self) -> HoverSelection {
        self.hover.selection
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::hover::HighlightPolicy;

    use super::*;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert!(state.dataset().is_none());
        assert!(state.column_stats().is_none());
        assert!(state.hover_selection().is_idle());
        assert!(!state.system.should_quit);
    }

    #[test]
    fn test_app_state_new_carries_highlight_policy() {
        let config = Config {
            highlight: HighlightPolicy::Combined,
            ..Default::default()
        };
        let state = AppState::new(config);

        assert_eq!(state.hover.policy, HighlightPolicy::Combined);
        assert_eq!(state.config.config.highlight, HighlightPolicy::Combined);
    }
}
