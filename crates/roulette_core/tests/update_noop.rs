use roulette_core::{update, AppState, Msg};

#[test]
fn tick_is_noop() {
    let (state, _) = update(AppState::new(), Msg::RestoreTopics(vec!["A".into()]));
    let (next, effects) = update(state.clone(), Msg::Tick);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn tick_on_fresh_state_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::Tick);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
