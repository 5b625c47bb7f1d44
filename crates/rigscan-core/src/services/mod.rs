//! Services that compose ports and probes into public operations.

mod detection;

pub use detection::{DetectionDeps, DetectionOrchestrator};
