//! Maps key presses to what the user meant, given what is on screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use roulette_core::{AppState, EditBuffer, Msg};

#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Quit,
    /// Needs a random roll and a timestamp, which the caller supplies.
    Spin,
    Send(Msg),
}

pub fn map_key(state: &AppState, key: KeyEvent) -> Option<Intent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Intent::Quit);
    }

    let manager = state.manager();
    if !manager.open {
        return match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => Some(Intent::Spin),
            KeyCode::Char('m') | KeyCode::Char('M') => Some(Intent::Send(Msg::ManagerOpened)),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Intent::Quit),
            _ => None,
        };
    }

    if let EditBuffer::Editing { draft, .. } = state.edit_buffer() {
        return match key.code {
            KeyCode::Enter => Some(Intent::Send(Msg::SaveEdit)),
            KeyCode::Esc => Some(Intent::Send(Msg::CancelEdit)),
            KeyCode::Backspace => {
                let mut draft = draft.clone();
                draft.pop();
                Some(Intent::Send(Msg::EditDraftChanged(draft)))
            }
            KeyCode::Char(c) if is_text(key) => {
                let mut draft = draft.clone();
                draft.push(c);
                Some(Intent::Send(Msg::EditDraftChanged(draft)))
            }
            _ => None,
        };
    }

    let selected = manager.selected;
    match key.code {
        KeyCode::Esc => Some(Intent::Send(Msg::ManagerClosed)),
        KeyCode::Up => Some(Intent::Send(Msg::TopicSelected(selected.saturating_sub(1)))),
        KeyCode::Down => Some(Intent::Send(Msg::TopicSelected(selected + 1))),
        KeyCode::Enter => Some(Intent::Send(Msg::AddTopicClicked)),
        KeyCode::F(2) => edit_selected(state),
        KeyCode::Char('e') if ctrl => edit_selected(state),
        KeyCode::Delete => delete_selected(state),
        KeyCode::Char('d') if ctrl => delete_selected(state),
        KeyCode::Backspace => {
            let mut input = manager.new_topic_input.clone();
            input.pop();
            Some(Intent::Send(Msg::NewTopicInputChanged(input)))
        }
        KeyCode::Char(c) if is_text(key) => {
            let mut input = manager.new_topic_input.clone();
            input.push(c);
            Some(Intent::Send(Msg::NewTopicInputChanged(input)))
        }
        _ => None,
    }
}

fn is_text(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn edit_selected(state: &AppState) -> Option<Intent> {
    let selected = state.manager().selected;
    (selected < state.topics().len()).then(|| Intent::Send(Msg::StartEdit(selected)))
}

fn delete_selected(state: &AppState) -> Option<Intent> {
    let selected = state.manager().selected;
    (selected < state.topics().len()).then(|| Intent::Send(Msg::DeleteTopic(selected)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roulette_core::update;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn apply(state: AppState, msgs: Vec<Msg>) -> AppState {
        msgs.into_iter()
            .fold(state, |state, msg| update(state, msg).0)
    }

    fn manager_state(topics: &[&str], input: &str) -> AppState {
        apply(
            AppState::new(),
            vec![
                Msg::RestoreTopics(topics.iter().map(|s| s.to_string()).collect()),
                Msg::ManagerOpened,
                Msg::TopicSelected(1),
                Msg::NewTopicInputChanged(input.to_string()),
            ],
        )
    }

    #[test]
    fn main_screen_keys() {
        let state = AppState::new();
        assert_eq!(map_key(&state, key(KeyCode::Char(' '))), Some(Intent::Spin));
        assert_eq!(map_key(&state, key(KeyCode::Enter)), Some(Intent::Spin));
        assert_eq!(
            map_key(&state, key(KeyCode::Char('m'))),
            Some(Intent::Send(Msg::ManagerOpened))
        );
        assert_eq!(map_key(&state, key(KeyCode::Char('q'))), Some(Intent::Quit));
        assert_eq!(map_key(&state, key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let state = manager_state(&["A", "B"], "");
        assert_eq!(map_key(&state, ctrl('c')), Some(Intent::Quit));
    }

    #[test]
    fn typing_in_manager_fills_input() {
        let state = manager_state(&["A", "B"], "ab");
        assert_eq!(
            map_key(&state, key(KeyCode::Char('q'))),
            Some(Intent::Send(Msg::NewTopicInputChanged("abq".into())))
        );
        assert_eq!(
            map_key(&state, key(KeyCode::Backspace)),
            Some(Intent::Send(Msg::NewTopicInputChanged("a".into())))
        );
        assert_eq!(
            map_key(&state, key(KeyCode::Enter)),
            Some(Intent::Send(Msg::AddTopicClicked))
        );
    }

    #[test]
    fn manager_row_commands_target_selection() {
        let state = manager_state(&["A", "B"], "");
        assert_eq!(
            map_key(&state, key(KeyCode::F(2))),
            Some(Intent::Send(Msg::StartEdit(1)))
        );
        assert_eq!(
            map_key(&state, ctrl('d')),
            Some(Intent::Send(Msg::DeleteTopic(1)))
        );
        assert_eq!(
            map_key(&state, key(KeyCode::Up)),
            Some(Intent::Send(Msg::TopicSelected(0)))
        );
        assert_eq!(
            map_key(&state, key(KeyCode::Esc)),
            Some(Intent::Send(Msg::ManagerClosed))
        );
    }

    #[test]
    fn row_commands_need_a_row() {
        let state = manager_state(&[], "");
        assert_eq!(map_key(&state, key(KeyCode::Delete)), None);
        assert_eq!(map_key(&state, ctrl('e')), None);
    }

    #[test]
    fn editing_routes_keys_to_draft() {
        let state = apply(manager_state(&["A", "B"], ""), vec![Msg::StartEdit(0)]);
        assert_eq!(
            map_key(&state, key(KeyCode::Char('!'))),
            Some(Intent::Send(Msg::EditDraftChanged("A!".into())))
        );
        assert_eq!(
            map_key(&state, key(KeyCode::Enter)),
            Some(Intent::Send(Msg::SaveEdit))
        );
        assert_eq!(
            map_key(&state, key(KeyCode::Esc)),
            Some(Intent::Send(Msg::CancelEdit))
        );
    }
}
