//! Status bar component
//!
//! Displays dataset provenance and load/error status at the bottom of the
//! screen. This is a pure, stateless component that renders from `AppState`.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{AppState, DataState},
    infrastructure::fetch::DATASET_ENDPOINT,
};

const KEY_HINT: &str = "↑↓←→ move highlight · esc clear · q quit";

/// Status bar component
///
/// Renders two lines: dataset provenance (source and size) and the current
/// status message. Stateless, following the Elm architecture pattern.
#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    /// Render the status bar into the bottom two lines of `area`.
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(0),    // Main content area (not used by status bar)
                Constraint::Length(1), // Provenance line
                Constraint::Length(1), // Status message line
            ],
        )
        .split(area);

        frame.render_widget(Clear, layout[1]);
        frame.render_widget(Clear, layout[2]);

        let provenance = Span::styled(
            Self::provenance_line(state),
            Style::default().fg(Color::Gray).italic(),
        );
        frame.render_widget(
            Paragraph::new(provenance).style(Style::default().bg(Color::Black)),
            layout[1],
        );

        frame.render_widget(Paragraph::new(Self::status_line(state)), layout[2]);
    }

    /// Pure function describing the dataset source and size.
    pub fn provenance_line(state: &AppState) -> String {
        match state.dataset() {
            Some(dataset) => format!(
                "{} · {} rows × {} columns",
                DATASET_ENDPOINT,
                dataset.row_count(),
                dataset.column_count()
            ),
            None => DATASET_ENDPOINT.to_string(),
        }
    }

    /// Pure function computing the status message line.
    ///
    /// An explicit status message wins; otherwise the line is derived from
    /// the load state. A failed fetch is reported here while the grid keeps
    /// its loading placeholder.
    pub fn status_line(state: &AppState) -> String {
        if let Some(message) = &state.system.status_message {
            return message.clone();
        }
        match &state.data {
            DataState::Idle | DataState::Loading => "Loading...".to_string(),
            DataState::Failed { error } => format!("Fetch failed: {error}"),
            DataState::Loaded { .. } => KEY_HINT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        core::msg::{data::DataMsg, system::SystemMsg},
        domain::dataset::Dataset,
    };

    use super::*;

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        state.data.update(DataMsg::DatasetLoaded(Dataset {
            columns: vec!["A".to_string(), "B".to_string()],
            rows: vec!["2020".to_string()],
            data: vec![vec![Some(1.0), Some(2.0)]],
        }));
        state
    }

    #[test]
    fn test_status_bar_is_stateless() {
        let bar1 = StatusBarComponent::new();
        let bar2 = StatusBarComponent::default();
        assert_eq!(format!("{bar1:?}"), format!("{bar2:?}"));
    }

    #[test]
    fn test_provenance_line() {
        let state = AppState::default();
        assert_eq!(StatusBarComponent::provenance_line(&state), DATASET_ENDPOINT);

        let state = loaded_state();
        let line = StatusBarComponent::provenance_line(&state);
        assert!(line.contains(DATASET_ENDPOINT));
        assert!(line.contains("1 rows × 2 columns"));
    }

    #[test]
    fn test_status_line_while_loading() {
        let state = AppState::default();
        assert_eq!(StatusBarComponent::status_line(&state), "Loading...");
    }

    #[test]
    fn test_status_line_after_failure() {
        let mut state = AppState::default();
        state.data.update(DataMsg::LoadFailed("timeout".to_string()));

        assert_eq!(
            StatusBarComponent::status_line(&state),
            "Fetch failed: timeout"
        );
    }

    #[test]
    fn test_status_message_takes_precedence() {
        let mut state = loaded_state();
        state
            .system
            .update(SystemMsg::ShowError("terminal event error".to_string()));

        assert_eq!(
            StatusBarComponent::status_line(&state),
            "Error: terminal event error"
        );
    }
}
