//! Domain types shared by every detection strategy.

mod game;
mod hardware;
mod launcher;

pub use game::{GameRecord, InvalidGameRecord, Platform};
pub use hardware::{CpuTag, GpuTag, MonitorSpecs, RamTier, RefreshRate, Resolution, SystemSpecs};
pub use launcher::{Launcher, LauncherPresenceSet, OsKey};
