//! Refresh-rate estimation by counting animation frames.

use std::time::Duration;

use tracing::debug;

use crate::domain::RefreshRate;
use crate::ports::FrameSource;
use crate::settings::DEFAULT_SAMPLE_WINDOW_MS;

/// Highest frame count considered; anything above reports as 360 Hz.
pub const MAX_COUNTED_FRAMES: u32 = 360;

/// Frame-counting state machine, independent of any clock.
///
/// Every callback is counted, including the first, whose timestamp opens the
/// window. Sampling completes on the first callback whose timestamp is at
/// least `window` past the opening timestamp.
#[derive(Debug, Clone)]
pub struct FrameCounter {
    window: Duration,
    first: Option<Duration>,
    count: u32,
}

impl FrameCounter {
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            first: None,
            count: 0,
        }
    }

    /// Record one callback. Returns the capped count once the window closes.
    pub fn observe(&mut self, timestamp: Duration) -> Option<u32> {
        self.count = self.count.saturating_add(1);
        let first = *self.first.get_or_insert(timestamp);
        if timestamp.saturating_sub(first) >= self.window {
            Some(self.count.min(MAX_COUNTED_FRAMES))
        } else {
            None
        }
    }
}

/// Estimates the display refresh rate over a bounded sampling window.
#[derive(Debug, Clone, Copy)]
pub struct RefreshSampler {
    window: Duration,
}

impl Default for RefreshSampler {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_SAMPLE_WINDOW_MS))
    }
}

impl RefreshSampler {
    pub const fn new(window: Duration) -> Self {
        Self { window }
    }

    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Count frames for one window and snap the count to a supported rate.
    ///
    /// Taking the source by `&mut` keeps two samplings from interleaving on
    /// the same source.
    pub async fn sample(&self, source: &mut dyn FrameSource) -> RefreshRate {
        let mut counter = FrameCounter::new(self.window);
        loop {
            let timestamp = source.next_frame().await;
            if let Some(frames) = counter.observe(timestamp) {
                let rate = RefreshRate::snap(frames);
                debug!(frames, hz = rate.hertz(), "Refresh rate sampled");
                return rate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::SimulatedFrameSource;

    #[test]
    fn test_counter_closes_window_on_first_late_frame() {
        let mut counter = FrameCounter::new(Duration::from_millis(1000));
        assert_eq!(counter.observe(Duration::from_millis(500)), None);
        assert_eq!(counter.observe(Duration::from_millis(900)), None);
        assert_eq!(counter.observe(Duration::from_millis(1499)), None);
        assert_eq!(counter.observe(Duration::from_millis(1500)), Some(4));
    }

    #[test]
    fn test_counter_caps_runaway_counts() {
        let mut counter = FrameCounter::new(Duration::from_millis(1000));
        for i in 0..1000 {
            assert_eq!(counter.observe(Duration::from_micros(i)), None);
        }
        assert_eq!(
            counter.observe(Duration::from_secs(1)),
            Some(MAX_COUNTED_FRAMES)
        );
    }

    #[test]
    fn test_every_count_snaps_into_supported_set() {
        for frames in 0..=1000 {
            let rate = RefreshRate::snap(frames.min(MAX_COUNTED_FRAMES));
            assert!(RefreshRate::ALL.contains(&rate), "count {frames} escaped");
        }
    }

    #[tokio::test]
    async fn test_sample_at_common_rates() {
        let cases = [
            (60, RefreshRate::Hz60),
            (75, RefreshRate::Hz60),
            (144, RefreshRate::Hz144),
            (165, RefreshRate::Hz165),
            (240, RefreshRate::Hz240),
            (500, RefreshRate::Hz360),
        ];
        for (hz, expected) in cases {
            let mut source = SimulatedFrameSource::at_rate(hz);
            let rate = RefreshSampler::default().sample(&mut source).await;
            assert_eq!(rate, expected, "display at {hz} Hz");
        }
    }

    #[tokio::test]
    async fn test_sample_is_bounded_by_window() {
        let mut source = SimulatedFrameSource::at_rate(60);
        RefreshSampler::default().sample(&mut source).await;
        // One opening frame plus one per interval up to and including 1000 ms.
        assert!(source.delivered() <= 62, "delivered {}", source.delivered());
    }
}
