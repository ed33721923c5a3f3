use std::sync::Arc;
use std::time::Duration;

use roulette_logging::{roulette_debug, roulette_trace};
use thiserror::Error;
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use roulette_core::SpinId;

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("failed to start timer runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Receives expired flash timers.
pub trait FlashSink: Send + Sync {
    fn flash_due(&self, spin_id: SpinId);
}

/// Owns at most one pending flash timer.
///
/// Arming a new timer cancels the previous one, and dropping the scheduler
/// cancels whatever is still pending, so no callback outlives its owner.
pub struct FlashScheduler {
    runtime: Runtime,
    sink: Arc<dyn FlashSink>,
    pending: Option<CancellationToken>,
}

impl FlashScheduler {
    pub fn new(sink: Arc<dyn FlashSink>) -> Result<Self, SchedulerError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("flash-timer")
            .enable_time()
            .build()?;
        Ok(Self {
            runtime,
            sink,
            pending: None,
        })
    }

    pub fn schedule(&mut self, spin_id: SpinId, after: Duration) {
        self.cancel();

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let sink = self.sink.clone();
        roulette_trace!("arming flash for spin {} in {:?}", spin_id, after);
        self.runtime.spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {}
                _ = tokio::time::sleep(after) => sink.flash_due(spin_id),
            }
        });
        self.pending = Some(token);
    }

    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }

    /// Whether a timer is armed. Stays true after it fires until the next
    /// `schedule` or `cancel`.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|t| !t.is_cancelled())
    }
}

impl Drop for FlashScheduler {
    fn drop(&mut self) {
        if self.pending.is_some() {
            roulette_debug!("cancelling pending flash on teardown");
        }
        self.cancel();
    }
}
