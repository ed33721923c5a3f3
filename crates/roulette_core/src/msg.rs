use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Replace the topic list with a previously persisted snapshot.
    RestoreTopics(Vec<String>),
    /// User asked for a spin. `roll` is a uniform sample in `[0, 1)`.
    SpinClicked { roll: f64, now: Instant },
    /// A scheduled flash step fired.
    FlashDue { spin_id: crate::SpinId, now: Instant },
    /// User opened the topic manager.
    ManagerOpened,
    /// User closed the topic manager.
    ManagerClosed,
    /// User edited the new-topic input box.
    NewTopicInputChanged(String),
    /// User submitted the new-topic input.
    AddTopicClicked,
    /// User moved the manager cursor.
    TopicSelected(usize),
    DeleteTopic(usize),
    StartEdit(usize),
    EditDraftChanged(String),
    SaveEdit,
    CancelEdit,
    /// The view is being torn down.
    Shutdown,
    /// UI/render tick.
    Tick,
}
