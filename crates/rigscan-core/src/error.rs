//! Classified detection failures.
//!
//! Every component absorbs its own failures into a typed fallback value, so
//! most of these variants never reach a caller: they exist to classify what
//! was absorbed when it is logged. Only `DetectionExhausted` is returned from
//! a public operation (`DetectionOrchestrator::detect_system_specs`).

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::Launcher;

#[derive(Debug, Error)]
pub enum DetectionError {
    /// A launcher has no usable root on this OS; the launcher is skipped.
    #[error("No install root applicable for {0}")]
    PathNotApplicable(Launcher),

    /// One directory entry could not be read; its siblings are still scanned.
    #[error("Failed to read {path}: {reason}")]
    ScanIo { path: PathBuf, reason: String },

    /// A protocol probe saw no handler within its deadline (negative result).
    #[error("No handler answered for {scheme} before the deadline")]
    ProbeTimeout { scheme: String },

    /// A hardware signal was missing; the sub-probe used its fallback.
    #[error("Hardware query unavailable: {0}")]
    HardwareQueryUnavailable(String),

    /// Every strategy failed. The caller should fall back to manual entry.
    #[error("System detection failed: {0}")]
    DetectionExhausted(String),
}

impl DetectionError {
    /// Whether the caller is expected to handle this error.
    ///
    /// All other variants are absorbed inside the engine.
    pub const fn is_escalated(&self) -> bool {
        matches!(self, Self::DetectionExhausted(_))
    }
}
