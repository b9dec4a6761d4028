use crate::{
    core::{cmd::Cmd, msg::hover::HoverMsg},
    domain::hover::{HighlightPolicy, HoverSelection},
};

/// Hover-related state
///
/// Owns the finite hover state value; all mutation goes through `update`,
/// never in place from call sites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverState {
    pub selection: HoverSelection,
    pub policy: HighlightPolicy,
}

impl HoverState {
    pub fn new(policy: HighlightPolicy) -> Self {
        Self {
            selection: HoverSelection::Idle,
            policy,
        }
    }

    /// Hover-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: HoverMsg) -> Vec<Cmd> {
        self.selection = match msg {
            HoverMsg::EnterRow(row) => self.selection.enter_row(row, self.policy),
            HoverMsg::EnterColumn(column) => self.selection.enter_column(column, self.policy),
            HoverMsg::Leave => self.selection.leave(),
        };
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_exclusive_switch() {
        let mut hover = HoverState::new(HighlightPolicy::Exclusive);

        hover.update(HoverMsg::EnterRow(2));
        assert_eq!(hover.selection, HoverSelection::Row(2));

        hover.update(HoverMsg::EnterColumn(3));
        assert_eq!(hover.selection, HoverSelection::Column(3));
    }

    #[test]
    fn test_combined_policy() {
        let mut hover = HoverState::new(HighlightPolicy::Combined);

        hover.update(HoverMsg::EnterRow(2));
        hover.update(HoverMsg::EnterColumn(3));
        assert_eq!(hover.selection, HoverSelection::Cell { row: 2, column: 3 });
    }

    #[test]
    fn test_leave_returns_to_idle() {
        let mut hover = HoverState::new(HighlightPolicy::Exclusive);
        hover.update(HoverMsg::EnterColumn(1));
        let cmds = hover.update(HoverMsg::Leave);

        assert_eq!(hover.selection, HoverSelection::Idle);
        assert!(cmds.is_empty());
    }
}
