//! Detection probes.
//!
//! - `protocol` - URL-scheme handler detection by focus-loss race
//! - `sampler` - refresh-rate estimation over a frame-callback window
//! - `cpu`, `gpu`, `ram`, `monitor` - hardware sub-probes, each bridge-first
//!   with an unconditional fallback
//! - `hardware` - the `HardwareProber` bundling the sub-probes

mod cpu;
mod gpu;
mod hardware;
mod monitor;
mod protocol;
mod ram;
mod sampler;

pub use cpu::{DEFAULT_CORE_COUNT, classify_cpu};
pub use gpu::match_renderer;
pub use hardware::HardwareProber;
pub use protocol::{ProbeOutcome, ProtocolProbe};
pub use ram::{tier_from_cores, tier_from_heap_limit};
pub use sampler::{FrameCounter, MAX_COUNTED_FRAMES, RefreshSampler};
