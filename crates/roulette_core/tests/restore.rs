use roulette_core::{default_topics, update, AppState, Effect, Msg};

#[test]
fn restored_snapshot_is_used_verbatim() {
    let (mut state, effects) = update(AppState::new(), Msg::RestoreTopics(vec!["X".to_string()]));

    assert_eq!(state.topics().as_slice(), ["X"]);
    assert_eq!(state.view().topic_count, 1);
    assert!(state.view().can_spin);
    // Restoring is not a mutation, so nothing is written back.
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn persisted_snapshot_round_trips_through_restore() {
    let (state, _) = update(AppState::new(), Msg::RestoreTopics(default_topics()));
    let (state, _) = update(state, Msg::NewTopicInputChanged("Y".to_string()));
    let (_, effects) = update(state, Msg::AddTopicClicked);

    let Some(Effect::PersistTopics(snapshot)) = effects.into_iter().next() else {
        panic!("add did not persist");
    };

    let (reloaded, _) = update(AppState::new(), Msg::RestoreTopics(snapshot));
    let topics = reloaded.topics().as_slice();
    assert_eq!(topics.len(), default_topics().len() + 1);
    assert_eq!(topics.last().map(String::as_str), Some("Y"));
}

#[test]
fn restored_empty_list_disables_spin() {
    let (state, _) = update(AppState::new(), Msg::RestoreTopics(Vec::new()));

    assert!(state.topics().is_empty());
    assert!(!state.view().can_spin);
}
