use std::sync::Arc;

use roulette_core::Effect;
use roulette_engine::{FlashScheduler, FlashSink, SchedulerError, TopicStore};

use super::persistence;

pub struct EffectRunner {
    scheduler: FlashScheduler,
    store: TopicStore,
}

impl EffectRunner {
    pub fn new(store: TopicStore, sink: Arc<dyn FlashSink>) -> Result<Self, SchedulerError> {
        Ok(Self {
            scheduler: FlashScheduler::new(sink)?,
            store,
        })
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScheduleFlash { spin_id, after } => {
                    self.scheduler.schedule(spin_id, after);
                }
                Effect::CancelFlash => self.scheduler.cancel(),
                Effect::PersistTopics(topics) => {
                    persistence::save_topics(&self.store, &topics);
                }
            }
        }
    }

    #[cfg(test)]
    pub fn flash_pending(&self) -> bool {
        self.scheduler.is_pending()
    }
}
