use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::{
    core::{
        msg::{data::DataMsg, hover::HoverMsg, system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    presentation::components::grid::{grid_area, GridGeometry, GridZone},
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // Startup: request the one-shot dataset fetch
        RawMsg::Init => vec![Msg::Data(DataMsg::Load)],

        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on current state
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => translate_mouse_event(mouse, state),

        // Network events - fetch outcome
        RawMsg::DatasetLoaded(dataset) => vec![Msg::Data(DataMsg::DatasetLoaded(dataset))],
        RawMsg::LoadFailed(error) => vec![Msg::Data(DataMsg::LoadFailed(error))],

        // System status
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Frequent system events carry no domain meaning
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => vec![Msg::System(SystemMsg::Suspend)],

        KeyEvent {
            code: KeyCode::Char('q'),
            ..
        } => vec![Msg::System(SystemMsg::Quit)],

        // Pointer-leave equivalent
        KeyEvent {
            code: KeyCode::Esc, ..
        } => vec![Msg::Hover(HoverMsg::Leave)],

        // Keyboard-driven hover cursor
        KeyEvent {
            code: KeyCode::Up | KeyCode::Char('k'),
            ..
        } => row_move(state, -1),
        KeyEvent {
            code: KeyCode::Down | KeyCode::Char('j'),
            ..
        } => row_move(state, 1),
        KeyEvent {
            code: KeyCode::Left | KeyCode::Char('h'),
            ..
        } => column_move(state, -1),
        KeyEvent {
            code: KeyCode::Right | KeyCode::Char('l'),
            ..
        } => column_move(state, 1),

        _ => vec![],
    }
}

/// Move the hovered row up/down, entering the top row when nothing is
/// hovered yet. No-op until the dataset is loaded.
fn row_move(state: &AppState, delta: i8) -> Vec<Msg> {
    let Some(dataset) = state.dataset() else {
        return vec![];
    };
    let rows = dataset.row_count();
    if rows == 0 {
        return vec![];
    }
    let next = match state.hover_selection().hovered_row() {
        None => 0,
        Some(row) if delta < 0 => row.saturating_sub(1),
        Some(row) => (row + 1).min(rows - 1),
    };
    vec![Msg::Hover(HoverMsg::EnterRow(next))]
}

/// Move the hovered column left/right, mirroring `row_move`.
fn column_move(state: &AppState, delta: i8) -> Vec<Msg> {
    let Some(dataset) = state.dataset() else {
        return vec![];
    };
    let columns = dataset.column_count();
    if columns == 0 {
        return vec![];
    }
    let next = match state.hover_selection().hovered_column() {
        None => 0,
        Some(column) if delta < 0 => column.saturating_sub(1),
        Some(column) => (column + 1).min(columns - 1),
    };
    vec![Msg::Hover(HoverMsg::EnterColumn(next))]
}

/// Translate pointer motion into hover transitions.
///
/// Row labels and column headers are the hover targets; moving anywhere
/// else acts as the pointer-leave event.
fn translate_mouse_event(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    if mouse.kind != MouseEventKind::Moved {
        return vec![];
    }
    let (Some(dataset), Some(stats)) = (state.dataset(), state.column_stats()) else {
        return vec![];
    };

    let (width, height) = state.system.terminal_size;
    let area = grid_area(width, height);
    let geometry = GridGeometry::new(
        area,
        dataset,
        stats,
        state.config.config.numerals,
    );

    match geometry.zone_at(mouse.column, mouse.row) {
        GridZone::ColumnHeader(column) => vec![Msg::Hover(HoverMsg::EnterColumn(column))],
        GridZone::RowLabel(row) => vec![Msg::Hover(HoverMsg::EnterRow(row))],
        GridZone::Body { .. } | GridZone::Outside => {
            if state.hover_selection().is_idle() {
                vec![]
            } else {
                vec![Msg::Hover(HoverMsg::Leave)]
            }
        }
    }
}
