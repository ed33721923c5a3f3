//! Topic roulette engine: timers and durable storage behind the pure core.
mod persist;
mod scheduler;
mod store;

pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use scheduler::{FlashScheduler, FlashSink, SchedulerError};
pub use store::{TopicStore, TOPICS_KEY};
pub use roulette_core::SpinId;
