use std::time::{Duration, Instant};

pub type SpinId = u64;

/// Timing curve for one spin: flashes start `base_delay` apart and slow
/// quadratically towards `max_delay` until `total` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinTiming {
    pub total: Duration,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for SpinTiming {
    fn default() -> Self {
        Self {
            total: Duration::from_millis(2000),
            base_delay: Duration::from_millis(30),
            max_delay: Duration::from_millis(230),
        }
    }
}

impl SpinTiming {
    /// Fraction of the spin that has elapsed; `>= 1.0` means done.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.total.is_zero() {
            return 1.0;
        }
        elapsed.as_secs_f64() / self.total.as_secs_f64()
    }

    /// Delay before the next flash at the given progress.
    pub fn delay_for(&self, progress: f64) -> Duration {
        let progress = progress.clamp(0.0, 1.0);
        let base = self.base_delay.as_micros() as f64;
        let max = self.max_delay.as_micros() as f64;
        let micros = base + progress * progress * (max - base);
        Duration::from_micros(micros.round().max(0.0) as u64)
    }
}

/// Maps a roll in `[0, 1)` onto an index in `[0, len)`. `len` must be non-zero.
pub fn pick_index(roll: f64, len: usize) -> usize {
    debug_assert!(len > 0);
    let roll = if roll.is_nan() { 0.0 } else { roll.clamp(0.0, 1.0) };
    ((roll * len as f64) as usize).min(len.saturating_sub(1))
}

/// One running spin. The candidates and the result both come from the
/// snapshot taken when the spin started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spin {
    id: SpinId,
    snapshot: Vec<String>,
    final_topic: String,
    started_at: Instant,
    tick: usize,
    display_candidate: String,
    elapsed: Duration,
}

pub(crate) enum FlashOutcome {
    Continue(Duration),
    Settled(String),
}

impl Spin {
    pub(crate) fn start(id: SpinId, snapshot: Vec<String>, roll: f64, now: Instant) -> Self {
        let final_topic = snapshot[pick_index(roll, snapshot.len())].clone();
        Self {
            id,
            snapshot,
            final_topic,
            started_at: now,
            tick: 0,
            display_candidate: String::new(),
            elapsed: Duration::ZERO,
        }
    }

    pub(crate) fn flash(&mut self, now: Instant, timing: &SpinTiming) -> FlashOutcome {
        self.elapsed = now.saturating_duration_since(self.started_at);
        let progress = timing.progress(self.elapsed);

        self.display_candidate = self.snapshot[self.tick % self.snapshot.len()].clone();
        self.tick += 1;

        if progress < 1.0 {
            FlashOutcome::Continue(timing.delay_for(progress))
        } else {
            self.display_candidate = self.final_topic.clone();
            FlashOutcome::Settled(self.final_topic.clone())
        }
    }

    pub fn id(&self) -> SpinId {
        self.id
    }

    pub fn display_candidate(&self) -> &str {
        &self.display_candidate
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SpinState {
    #[default]
    Idle,
    Spinning(Spin),
    Settled { result: String },
}

impl SpinState {
    pub fn is_spinning(&self) -> bool {
        matches!(self, SpinState::Spinning(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_decelerates_quadratically() {
        let timing = SpinTiming::default();
        assert_eq!(timing.delay_for(0.0), Duration::from_millis(30));
        assert_eq!(timing.delay_for(0.5), Duration::from_millis(80));
        assert_eq!(timing.delay_for(1.0), Duration::from_millis(230));
        assert!(timing.delay_for(0.9) > timing.delay_for(0.3));
    }

    #[test]
    fn zero_total_is_always_done() {
        let timing = SpinTiming {
            total: Duration::ZERO,
            ..SpinTiming::default()
        };
        assert_eq!(timing.progress(Duration::ZERO), 1.0);
    }

    #[test]
    fn pick_index_stays_in_bounds() {
        assert_eq!(pick_index(0.0, 3), 0);
        assert_eq!(pick_index(0.5, 3), 1);
        assert_eq!(pick_index(0.999_999, 3), 2);
        assert_eq!(pick_index(1.0, 3), 2);
        assert_eq!(pick_index(-4.0, 3), 0);
        assert_eq!(pick_index(f64::NAN, 3), 0);
    }

    #[test]
    fn first_flash_shows_first_snapshot_entry() {
        let now = Instant::now();
        let mut spin = Spin::start(1, vec!["A".into(), "B".into()], 0.9, now);
        assert_eq!(spin.display_candidate(), "");
        match spin.flash(now, &SpinTiming::default()) {
            FlashOutcome::Continue(delay) => assert_eq!(delay, Duration::from_millis(30)),
            FlashOutcome::Settled(_) => panic!("spin settled at t=0"),
        }
        assert_eq!(spin.display_candidate(), "A");
    }
}
