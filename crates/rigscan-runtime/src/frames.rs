//! Frame source driven by a tokio interval.

use std::time::Duration;

use async_trait::async_trait;
use rigscan_core::FrameSource;
use tokio::time::{Instant, Interval, MissedTickBehavior};

/// Emits frames at a fixed nominal rate.
///
/// Stands in for a compositor's frame callbacks where none exist, so a
/// sampled refresh rate reflects the nominal rate rather than the panel.
///
/// Timestamps are taken when a frame is delivered, not from the tick's
/// scheduled deadline. A source left idle between samplings hands out one
/// overdue frame stamped with the current time and then resumes its cadence.
#[derive(Debug)]
pub struct IntervalFrameSource {
    origin: Instant,
    interval: Interval,
}

impl IntervalFrameSource {
    /// A source ticking `hz` times per second. Zero is treated as one.
    pub fn new(hz: u32) -> Self {
        let origin = Instant::now();
        let period = (Duration::from_secs(1) / hz.max(1)).max(Duration::from_nanos(1));
        let mut interval = tokio::time::interval_at(origin, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { origin, interval }
    }
}

#[async_trait]
impl FrameSource for IntervalFrameSource {
    async fn next_frame(&mut self) -> Duration {
        self.interval.tick().await;
        Instant::now().duration_since(self.origin)
    }
}
