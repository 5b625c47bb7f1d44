//! Core of the rigscan capability-detection engine.
//!
//! This crate owns the domain vocabulary (game records, hardware tags,
//! launcher roots), the port traits through which host capabilities are
//! consumed, and the detection logic built on top of them:
//!
//! - `paths` - launcher root table and resolver
//! - `catalog` - identifier normalization, image references, curated lists
//! - `probes` - protocol-handler race and hardware sub-probes
//! - `services` - the `DetectionOrchestrator` composing everything
//!
//! OS-facing adapters (filesystem scanning, sysinfo probing) live in
//! `rigscan-runtime`.

pub mod catalog;
pub mod domain;
pub mod error;
pub mod paths;
pub mod ports;
pub mod probes;
pub mod services;
pub mod settings;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use domain::{
    CpuTag, GameRecord, GpuTag, InvalidGameRecord, Launcher, LauncherPresenceSet, MonitorSpecs,
    OsKey, Platform, RamTier, RefreshRate, Resolution, SystemSpecs,
};
pub use error::DetectionError;
pub use paths::{
    LauncherRootPath, NotApplicableReason, PathError, PathResolver, PathTable, RootResolution,
};
pub use ports::{
    BridgeCpu, BridgeError, BridgeGpu, BridgeMonitor, BridgeResult, FrameSource, HiddenSurface,
    HostSignals, NavigationHost, PrivilegedBridge, RenderingContext, ScreenMetrics, SignalError,
    SurfaceError,
};
pub use probes::{HardwareProber, ProbeOutcome, ProtocolProbe, RefreshSampler};
pub use services::{DetectionDeps, DetectionOrchestrator};
pub use settings::{DetectionSettings, SettingsError, validate_settings};
