use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::RestoreTopics(items) => {
            state.restore_topics(items);
            Vec::new()
        }
        Msg::SpinClicked { roll, now } => match state.start_spin(roll, now) {
            Some((spin_id, Some(after))) => vec![Effect::ScheduleFlash { spin_id, after }],
            // Refused, or settled on the very first flash.
            Some((_, None)) | None => Vec::new(),
        },
        Msg::FlashDue { spin_id, now } => match state.flash(spin_id, now) {
            Some(after) => vec![Effect::ScheduleFlash { spin_id, after }],
            None => Vec::new(),
        },
        Msg::ManagerOpened => {
            state.set_manager_open(true);
            Vec::new()
        }
        Msg::ManagerClosed => {
            state.set_manager_open(false);
            Vec::new()
        }
        Msg::NewTopicInputChanged(text) => {
            state.set_new_topic_input(text);
            Vec::new()
        }
        Msg::AddTopicClicked => {
            let added = state.add_from_input();
            persist_if(&state, added)
        }
        Msg::TopicSelected(index) => {
            state.select(index);
            Vec::new()
        }
        Msg::DeleteTopic(index) => {
            let deleted = state.delete_topic(index);
            persist_if(&state, deleted)
        }
        Msg::StartEdit(index) => {
            state.start_edit(index);
            Vec::new()
        }
        Msg::EditDraftChanged(text) => {
            state.set_edit_draft(text);
            Vec::new()
        }
        Msg::SaveEdit => {
            let saved = state.save_edit();
            persist_if(&state, saved)
        }
        Msg::CancelEdit => {
            state.cancel_edit();
            Vec::new()
        }
        Msg::Shutdown => {
            state.abort_spin();
            vec![Effect::CancelFlash]
        }
        Msg::Tick => Vec::new(),
    };

    (state, effects)
}

fn persist_if(state: &AppState, changed: bool) -> Vec<Effect> {
    if changed {
        vec![Effect::PersistTopics(state.topics().snapshot())]
    } else {
        Vec::new()
    }
}
