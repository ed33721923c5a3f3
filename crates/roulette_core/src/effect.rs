use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Arm the flash timer, replacing any pending one.
    ScheduleFlash {
        spin_id: crate::SpinId,
        after: Duration,
    },
    CancelFlash,
    /// Write the full list to durable storage.
    PersistTopics(Vec<String>),
}
