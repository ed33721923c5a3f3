use roulette_core::default_topics;
use roulette_engine::TopicStore;
use roulette_logging::{roulette_error, roulette_info, roulette_warn};

/// Loads the persisted topics, falling back to the built-in list when nothing
/// is stored or the stored copy cannot be read.
pub(crate) fn load_topics(store: &TopicStore) -> Vec<String> {
    match store.read() {
        Ok(Some(topics)) => {
            roulette_info!("Loaded {} topics from {:?}", topics.len(), store.path());
            topics
        }
        Ok(None) => {
            roulette_info!("No saved topics at {:?}; using defaults", store.path());
            default_topics()
        }
        Err(err) => {
            roulette_warn!(
                "Failed to load topics from {:?}: {}; using defaults",
                store.path(),
                err
            );
            default_topics()
        }
    }
}

pub(crate) fn save_topics(store: &TopicStore, topics: &[String]) {
    if let Err(err) = store.write(topics) {
        roulette_error!("Failed to save topics to {:?}: {}", store.path(), err);
    }
}
