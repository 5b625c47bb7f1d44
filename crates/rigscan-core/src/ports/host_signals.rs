//! Indirect hardware signals available to an unprivileged host.
//!
//! These mirror what a sandboxed rendering context can observe: a platform
//! identity string, a logical core count, a heap-size limit, screen metrics
//! and a 3D rendering context. Every signal may be missing; sub-probes map
//! a missing signal to their documented fallback.

use thiserror::Error;

/// Why a host signal could not be read.
#[derive(Debug, Clone, Error)]
pub enum SignalError {
    /// The host does not expose this signal at all.
    #[error("Signal not exposed by host: {0}")]
    Unavailable(&'static str),

    /// The host exposes the signal but reading it failed.
    #[error("Signal read failed: {0}")]
    Failed(String),
}

/// Result type for signal reads.
pub type SignalResult<T> = Result<T, SignalError>;

/// Logical screen size plus the pixel-density ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMetrics {
    pub width: u32,
    pub height: u32,
    pub device_pixel_ratio: f64,
}

impl ScreenMetrics {
    /// Physical pixel dimensions (logical size scaled by pixel density).
    ///
    /// A non-finite or non-positive ratio is treated as 1.0.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn physical(&self) -> (u32, u32) {
        let ratio = if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        };
        (
            (f64::from(self.width) * ratio).round() as u32,
            (f64::from(self.height) * ratio).round() as u32,
        )
    }
}

/// A live 3D rendering context.
pub trait RenderingContext: Send {
    /// Unmasked renderer string, e.g. `"NVIDIA GeForce RTX 4080/PCIe/SSE2"`.
    fn unmasked_renderer(&self) -> Option<String>;

    /// Unmasked vendor string, e.g. `"NVIDIA Corporation"`.
    fn unmasked_vendor(&self) -> Option<String>;
}

/// Port for indirect host signals.
#[cfg_attr(test, mockall::automock)]
pub trait HostSignals: Send + Sync {
    /// Platform identity string (user-agent or CPU brand line).
    fn platform_identity(&self) -> SignalResult<String>;

    /// Number of logical cores.
    fn logical_cores(&self) -> SignalResult<u32>;

    /// Runtime heap-size limit in bytes.
    fn heap_size_limit_bytes(&self) -> SignalResult<u64>;

    fn screen_metrics(&self) -> SignalResult<ScreenMetrics>;

    /// A refresh rate reported directly by the host, in hertz.
    fn refresh_rate_hint(&self) -> SignalResult<u32>;

    /// Whether the display advertises a high dynamic range.
    fn hdr_supported(&self) -> SignalResult<bool>;

    /// Create a 3D rendering context, if the host can.
    fn rendering_context(&self) -> SignalResult<Box<dyn RenderingContext>>;
}
