use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use heatgrid::{
    config::Config,
    core::{
        msg::{data::DataMsg, hover::HoverMsg, Msg},
        state::{AppState, DataState},
        update::update,
    },
    domain::{Dataset, HoverSelection},
    Cmd, RawMsg, translate_raw_to_domain, VERSION,
};

fn sample_dataset() -> Dataset {
    Dataset {
        columns: vec!["food".into(), "rent".into(), "fuel".into()],
        rows: vec!["2019".into(), "2020".into(), "2021".into()],
        data: vec![
            vec![Some(1.5), Some(-2.0), Some(7.5)],
            vec![Some(3.0), None, Some(-9.0)],
            vec![Some(0.0), Some(4.5), None],
        ],
    }
}

/// Basic library flow test
#[test]
fn test_library_basic_flow() {
    let initial_state = AppState::new(Config::default());

    // First load request starts the fetch
    let (state, cmds) = update(Msg::Data(DataMsg::Load), initial_state);
    assert!(matches!(state.data, DataState::Loading));
    assert_eq!(cmds, vec![Cmd::FetchDataset]);

    // A repeated load request is a no-op while one is in flight
    let (state, cmds) = update(Msg::Data(DataMsg::Load), state);
    assert!(matches!(state.data, DataState::Loading));
    assert!(cmds.is_empty());

    // Arrival of the dataset computes the summary statistics
    let (state, cmds) = update(Msg::Data(DataMsg::DatasetLoaded(sample_dataset())), state);
    assert!(cmds.is_empty());
    let stats = state.data.column_stats().unwrap();
    assert_eq!(stats.len(), 3);
    assert!((stats[0].mean - 1.5).abs() < 1e-9);

    // Hovering a row then leaving returns to idle
    let (state, _) = update(Msg::Hover(HoverMsg::EnterRow(1)), state);
    assert_eq!(state.hover_selection(), HoverSelection::Row(1));
    let (state, _) = update(Msg::Hover(HoverMsg::Leave), state);
    assert_eq!(state.hover_selection(), HoverSelection::Idle);
}

/// Raw message translation drives the same flow as direct messages
#[test]
fn test_raw_translation_flow() {
    let state = AppState::new(Config::default());

    let msgs = translate_raw_to_domain(RawMsg::Init, &state);
    assert_eq!(msgs, vec![Msg::Data(DataMsg::Load)]);

    let msgs = translate_raw_to_domain(RawMsg::DatasetLoaded(sample_dataset()), &state);
    let (state, _) = msgs
        .into_iter()
        .fold((state, Vec::new()), |(state, _), msg| update(msg, state));
    assert!(state.data.is_loaded());

    // Arrow keys walk the row highlight
    let down = RawMsg::Key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
    let msgs = translate_raw_to_domain(down, &state);
    assert_eq!(msgs, vec![Msg::Hover(HoverMsg::EnterRow(0))]);
}

#[test]
fn test_quit_via_key() {
    let state = AppState::new(Config::default());
    let quit = RawMsg::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
    let msgs = translate_raw_to_domain(quit, &state);
    let (state, cmds) = msgs
        .into_iter()
        .fold((state, Vec::new()), |(state, _), msg| update(msg, state));
    assert!(state.system.should_quit);
    assert!(cmds.is_empty());
}

#[test]
fn test_load_failure_is_surfaced_not_fatal() {
    let state = AppState::new(Config::default());
    let (state, _) = update(Msg::Data(DataMsg::Load), state);
    let (state, cmds) = update(
        Msg::Data(DataMsg::LoadFailed("HTTP status 503".into())),
        state,
    );
    assert!(!state.system.should_quit);
    assert_eq!(state.data.error(), Some("HTTP status 503"));
    assert!(cmds
        .iter()
        .any(|cmd| matches!(cmd, Cmd::LogError { .. })));
}

#[test]
fn test_version_is_exported() {
    assert!(!VERSION.is_empty());
}
