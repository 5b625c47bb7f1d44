//! Host-signal and navigation adapters for a native, windowless process.
//!
//! A native process sees far less than a rendering context would: it can
//! name its CPU and count cores, but has no screen metrics, no 3D context
//! and no way to host a hidden navigation surface. Every missing signal is
//! reported as `Unavailable` and the heuristic probes fall back.

use rigscan_core::ports::{FocusLossListener, ListenerId, SignalResult};
use rigscan_core::{
    HiddenSurface, HostSignals, NavigationHost, RenderingContext, ScreenMetrics, SignalError,
    SurfaceError,
};

use crate::system::platform_identity;

/// Host signals readable without a window.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeHostSignals;

impl NativeHostSignals {
    pub const fn new() -> Self {
        Self
    }
}

impl HostSignals for NativeHostSignals {
    fn platform_identity(&self) -> SignalResult<String> {
        platform_identity().ok_or(SignalError::Unavailable("platform identity"))
    }

    fn logical_cores(&self) -> SignalResult<u32> {
        u32::try_from(num_cpus::get()).map_err(|e| SignalError::Failed(e.to_string()))
    }

    fn heap_size_limit_bytes(&self) -> SignalResult<u64> {
        Err(SignalError::Unavailable("heap size limit"))
    }

    fn screen_metrics(&self) -> SignalResult<ScreenMetrics> {
        Err(SignalError::Unavailable("screen metrics"))
    }

    fn refresh_rate_hint(&self) -> SignalResult<u32> {
        Err(SignalError::Unavailable("refresh rate"))
    }

    fn hdr_supported(&self) -> SignalResult<bool> {
        Err(SignalError::Unavailable("dynamic range"))
    }

    fn rendering_context(&self) -> SignalResult<Box<dyn RenderingContext>> {
        Err(SignalError::Unavailable("rendering context"))
    }
}

/// Navigation host for processes without a UI.
///
/// Surface creation always fails, so every protocol probe resolves negative
/// immediately instead of waiting out its timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessNavigationHost;

impl NavigationHost for HeadlessNavigationHost {
    fn create_hidden_surface(&self) -> Result<Box<dyn HiddenSurface>, SurfaceError> {
        Err(SurfaceError::Unsupported)
    }

    fn on_focus_lost(&self, _listener: FocusLossListener) -> ListenerId {
        ListenerId(0)
    }

    fn remove_focus_listener(&self, _id: ListenerId) {}
}
