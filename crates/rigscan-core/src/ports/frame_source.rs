//! Animation-frame source port.

use std::time::Duration;

use async_trait::async_trait;

/// Delivers animation-frame callbacks.
///
/// Implementations must eventually deliver a frame at least once per second;
/// the refresh-rate sampler waits on `next_frame` without a deadline, so a
/// source that stops delivering frames stalls monitor detection.
#[async_trait]
pub trait FrameSource: Send {
    /// Wait for the next frame and return its timestamp.
    ///
    /// Timestamps are measured from an arbitrary fixed origin and must not
    /// decrease between calls.
    async fn next_frame(&mut self) -> Duration;
}
