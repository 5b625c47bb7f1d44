//! Port definitions (trait abstractions) for host capabilities.
//!
//! Ports define the interfaces that the detection engine expects from its
//! environment. They contain no implementation details and use only domain
//! types.
//!
//! # Design Rules
//!
//! - Every port call may fail; failures map to fallbacks, never panics
//! - No OS or browser API types in any signature
//! - Timing primitives (frames, focus events) are injectable for tests

mod bridge;
mod frame_source;
mod host_signals;
mod navigation;

pub use bridge::{BridgeCpu, BridgeError, BridgeGpu, BridgeMonitor, BridgeResult, PrivilegedBridge};
pub use frame_source::FrameSource;
#[cfg(test)]
pub use host_signals::MockHostSignals;
pub use host_signals::{HostSignals, RenderingContext, ScreenMetrics, SignalError, SignalResult};
pub use navigation::{
    FocusLossListener, HiddenSurface, ListenerId, NavigationHost, SurfaceError,
};
