//! Detection orchestrator - the engine's two public entry points.
//!
//! Both entry points try the privileged bridge first and fall back to the
//! heuristic chain. Neither lets a panic escape: game detection degrades to
//! an empty list, spec detection to a single classified error.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::catalog::curated_games;
use crate::domain::{GameRecord, LauncherPresenceSet, SystemSpecs};
use crate::error::DetectionError;
use crate::ports::{FrameSource, HostSignals, NavigationHost, PrivilegedBridge};
use crate::probes::{HardwareProber, ProtocolProbe, RefreshSampler};
use crate::settings::{DetectionSettings, SettingsError, validate_settings};

/// Ports a detection pass runs against.
#[derive(Clone)]
pub struct DetectionDeps {
    /// `None` forces the heuristic path.
    pub bridge: Option<Arc<dyn PrivilegedBridge>>,
    pub signals: Arc<dyn HostSignals>,
    pub navigation: Arc<dyn NavigationHost>,
    pub frames: Arc<Mutex<Box<dyn FrameSource>>>,
}

/// Composes the bridge, protocol probe and hardware sub-probes.
pub struct DetectionOrchestrator {
    bridge: Option<Arc<dyn PrivilegedBridge>>,
    protocol: ProtocolProbe,
    hardware: HardwareProber,
    storage: String,
}

impl DetectionOrchestrator {
    /// Build an orchestrator. Settings are validated first.
    pub fn new(deps: DetectionDeps, settings: &DetectionSettings) -> Result<Self, SettingsError> {
        validate_settings(settings)?;

        let DetectionDeps {
            bridge,
            signals,
            navigation,
            frames,
        } = deps;

        let hardware = HardwareProber::new(
            bridge.clone(),
            signals,
            frames,
            RefreshSampler::new(settings.sample_window()),
        );

        Ok(Self {
            bridge,
            protocol: ProtocolProbe::new(navigation, settings.protocol_timeout()),
            hardware,
            storage: settings.storage.clone(),
        })
    }

    /// Whether a privileged bridge was injected.
    pub const fn has_bridge(&self) -> bool {
        self.bridge.is_some()
    }

    /// Enumerate installed games.
    ///
    /// A non-empty bridge result is returned as-is. Otherwise each launcher
    /// scheme is probed and the curated list of every detected launcher is
    /// appended in launcher order. Never fails.
    pub async fn detect_installed_games(&self) -> Vec<GameRecord> {
        match AssertUnwindSafe(self.installed_games_chain())
            .catch_unwind()
            .await
        {
            Ok(games) => games,
            Err(_) => {
                warn!("Game detection panicked; reporting no games");
                Vec::new()
            }
        }
    }

    async fn installed_games_chain(&self) -> Vec<GameRecord> {
        if let Some(bridge) = &self.bridge {
            match bridge.detect_games().await {
                Ok(games) if !games.is_empty() => {
                    info!(count = games.len(), "Installed games from bridge");
                    return games;
                }
                Ok(_) => info!("Bridge found no games; probing launcher protocols"),
                Err(e) => warn!(error = %e, "Bridge game scan failed; probing launcher protocols"),
            }
        }

        let presence = self.protocol.detect_launchers().await;
        let games: Vec<GameRecord> = presence
            .iter_present()
            .flat_map(curated_games)
            .collect();
        info!(count = games.len(), ?presence, "Installed games from launcher heuristics");
        games
    }

    /// Estimate the user's hardware.
    ///
    /// Every sub-probe has its own fallback, so the only failure is a
    /// sub-probe panicking, reported as `DetectionExhausted`. No partial
    /// result is returned in that case.
    pub async fn detect_system_specs(&self) -> Result<SystemSpecs, DetectionError> {
        let specs = AssertUnwindSafe(self.system_specs_chain())
            .catch_unwind()
            .await
            .map_err(|payload| {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| (*s).to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "hardware probe panicked".to_string());
                DetectionError::DetectionExhausted(reason)
            })?;

        info!(
            cpu = %specs.cpu,
            gpu = %specs.gpu,
            ram_gb = specs.ram_gb.gigabytes(),
            resolution = %specs.monitor.resolution,
            refresh_hz = specs.monitor.refresh_rate_hz.hertz(),
            "System specs detected"
        );
        Ok(specs)
    }

    async fn system_specs_chain(&self) -> SystemSpecs {
        let cpu = self.hardware.probe_cpu().await;
        let gpu = self.hardware.probe_gpu().await;
        let ram_gb = self.hardware.probe_ram().await;
        let monitor = self.hardware.probe_monitor().await;

        SystemSpecs {
            cpu,
            gpu,
            ram_gb,
            storage: self.storage.clone(),
            monitor,
        }
    }

    /// Probe every launcher scheme without touching the bridge.
    pub async fn detect_launchers(&self) -> LauncherPresenceSet {
        self.protocol.detect_launchers().await
    }
}
