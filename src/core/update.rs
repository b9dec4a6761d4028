use crate::{
    core::cmd::Cmd,
    core::msg::Msg,
    core::state::AppState,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Dataset messages (delegated to DataState)
        Msg::Data(data_msg) => {
            let commands = state.data.update(data_msg);
            (state, commands)
        }

        // Hover messages (delegated to HoverState)
        Msg::Hover(hover_msg) => {
            let commands = state.hover.update(hover_msg);
            (state, commands)
        }
    }
}
