use crate::spin::{FlashOutcome, Spin, SpinId, SpinState, SpinTiming};
use crate::view_model::{AppViewModel, EditView, ManagerView, SpinView};
use crate::{EditBuffer, TopicList};

/// State of the topic manager dialog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ManagerState {
    pub open: bool,
    pub selected: usize,
    pub new_topic_input: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    topics: TopicList,
    spin: SpinState,
    edit: EditBuffer,
    manager: ManagerState,
    timing: SpinTiming,
    last_spin_id: SpinId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timing(timing: SpinTiming) -> Self {
        Self {
            timing,
            ..Self::default()
        }
    }

    pub fn topics(&self) -> &TopicList {
        &self.topics
    }

    pub fn spin_state(&self) -> &SpinState {
        &self.spin
    }

    pub fn edit_buffer(&self) -> &EditBuffer {
        &self.edit
    }

    pub fn manager(&self) -> &ManagerState {
        &self.manager
    }

    pub fn view(&self) -> AppViewModel {
        let spin = match &self.spin {
            SpinState::Idle => SpinView::Idle,
            SpinState::Spinning(spin) => SpinView::Spinning {
                display_candidate: spin.display_candidate().to_string(),
                elapsed_ms: spin.elapsed().as_millis() as u64,
            },
            SpinState::Settled { result } => SpinView::Settled {
                result: result.clone(),
            },
        };
        let edit = match &self.edit {
            EditBuffer::Editing { index, draft } => Some(EditView {
                index: *index,
                draft: draft.clone(),
            }),
            EditBuffer::Empty => None,
        };
        AppViewModel {
            spin,
            topics: self.topics.snapshot(),
            topic_count: self.topics.len(),
            can_spin: !self.spin.is_spinning() && !self.topics.is_empty(),
            edit,
            manager: ManagerView {
                open: self.manager.open,
                selected: self.manager.selected,
                new_topic_input: self.manager.new_topic_input.clone(),
            },
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn restore_topics(&mut self, items: Vec<String>) {
        self.topics = TopicList::from_snapshot(items);
        self.edit.clear();
        self.clamp_selection();
        self.mark_dirty();
    }

    /// Starts a spin and performs its first flash. Returns the spin id and the
    /// delay before the next flash, or `None` if a spin may not start.
    pub(crate) fn start_spin(
        &mut self,
        roll: f64,
        now: std::time::Instant,
    ) -> Option<(SpinId, Option<std::time::Duration>)> {
        if self.spin.is_spinning() || self.topics.is_empty() {
            return None;
        }
        self.last_spin_id += 1;
        let id = self.last_spin_id;
        self.spin = SpinState::Spinning(Spin::start(id, self.topics.snapshot(), roll, now));
        self.mark_dirty();
        Some((id, self.flash(id, now)))
    }

    /// Runs one flash step for spin `id`. Returns the next delay while the spin
    /// continues; `None` once settled or when `id` is stale.
    pub(crate) fn flash(
        &mut self,
        id: SpinId,
        now: std::time::Instant,
    ) -> Option<std::time::Duration> {
        let timing = self.timing;
        let SpinState::Spinning(spin) = &mut self.spin else {
            return None;
        };
        if spin.id() != id {
            return None;
        }
        let outcome = spin.flash(now, &timing);
        self.mark_dirty();
        match outcome {
            FlashOutcome::Continue(delay) => {
                roulette_logging::roulette_trace!("spin {} flash -> next in {:?}", id, delay);
                Some(delay)
            }
            FlashOutcome::Settled(result) => {
                roulette_logging::roulette_info!("spin {} settled on {:?}", id, result);
                self.spin = SpinState::Settled { result };
                None
            }
        }
    }

    /// Drops an active spin. Returns whether one was running.
    pub(crate) fn abort_spin(&mut self) -> bool {
        if self.spin.is_spinning() {
            self.spin = SpinState::Idle;
            self.mark_dirty();
            true
        } else {
            false
        }
    }

    pub(crate) fn set_manager_open(&mut self, open: bool) {
        if self.manager.open != open {
            self.manager.open = open;
            self.mark_dirty();
        }
        if !open && self.edit.is_editing() {
            self.edit.clear();
            self.mark_dirty();
        }
    }

    pub(crate) fn set_new_topic_input(&mut self, text: String) {
        if self.manager.new_topic_input != text {
            self.manager.new_topic_input = text;
            self.mark_dirty();
        }
    }

    /// Adds the pending input as a topic. The input is cleared only on success.
    pub(crate) fn add_from_input(&mut self) -> bool {
        if !self.topics.add(&self.manager.new_topic_input) {
            return false;
        }
        self.manager.new_topic_input.clear();
        self.manager.selected = self.topics.len() - 1;
        self.mark_dirty();
        true
    }

    pub(crate) fn select(&mut self, index: usize) {
        let previous = self.manager.selected;
        self.manager.selected = index;
        self.clamp_selection();
        if self.manager.selected != previous {
            self.mark_dirty();
        }
    }

    pub(crate) fn delete_topic(&mut self, index: usize) -> bool {
        if self.topics.delete(index).is_none() {
            return false;
        }
        self.edit.on_topic_removed(index);
        self.clamp_selection();
        self.mark_dirty();
        true
    }

    pub(crate) fn start_edit(&mut self, index: usize) -> bool {
        let Some(text) = self.topics.get(index) else {
            return false;
        };
        let text = text.to_string();
        self.edit.start(index, &text);
        self.manager.selected = index;
        self.mark_dirty();
        true
    }

    pub(crate) fn set_edit_draft(&mut self, text: String) {
        if self.edit.set_draft(text) {
            self.mark_dirty();
        }
    }

    /// Commits the draft. Leaves everything untouched if the draft is blank.
    pub(crate) fn save_edit(&mut self) -> bool {
        let (Some(index), Some(draft)) = (self.edit.index(), self.edit.draft()) else {
            return false;
        };
        let draft = draft.to_string();
        if !self.topics.replace(index, &draft) {
            return false;
        }
        self.edit.clear();
        self.mark_dirty();
        true
    }

    pub(crate) fn cancel_edit(&mut self) {
        if self.edit.is_editing() {
            self.edit.clear();
            self.mark_dirty();
        }
    }

    fn clamp_selection(&mut self) {
        let max = self.topics.len().saturating_sub(1);
        self.manager.selected = self.manager.selected.min(max);
    }
}
