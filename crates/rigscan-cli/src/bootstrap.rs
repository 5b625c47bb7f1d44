//! CLI bootstrap - the composition root.
//!
//! The only place where native adapters are instantiated:
//! - Path resolver over the built-in root table
//! - Native bridge (unless `--no-bridge`)
//! - Native host signals, headless navigation host, interval frame source
//!
//! Handlers receive the composed `CliContext`.

use std::sync::Arc;

use rigscan_core::paths::normalize_home_override;
use rigscan_core::{
    DetectionDeps, DetectionOrchestrator, DetectionSettings, FrameSource, OsKey, PathResolver,
    PathTable, PrivilegedBridge, validate_settings,
};
use rigscan_runtime::{
    HeadlessNavigationHost, IntervalFrameSource, LibraryScanner, NativeBridge, NativeHostSignals,
};
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub settings: DetectionSettings,
    /// Whether to inject the native bridge.
    pub use_bridge: bool,
}

impl CliConfig {
    /// Build and validate configuration from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let home_override = cli
            .home
            .as_deref()
            .map(normalize_home_override)
            .transpose()?;

        let settings = DetectionSettings {
            protocol_timeout_ms: cli.probe_timeout_ms,
            sample_window_ms: cli.sample_window_ms,
            nominal_frame_rate_hz: cli.frame_rate_hz,
            storage: cli.storage.clone(),
            home_override,
        };
        validate_settings(&settings)?;

        Ok(Self {
            settings,
            use_bridge: !cli.no_bridge,
        })
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    pub orchestrator: DetectionOrchestrator,
    pub resolver: PathResolver,
    pub os: OsKey,
}

/// Wire the native adapters into an orchestrator.
///
/// Must be called from within a tokio runtime (the frame source owns a timer).
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let CliConfig {
        settings,
        use_bridge,
    } = config;

    let os = OsKey::current();
    let resolver = match settings.home_override.clone() {
        Some(home) => PathResolver::new(PathTable::builtin(), Some(home)),
        None => PathResolver::with_detected_home(PathTable::builtin()),
    };

    let bridge: Option<Arc<dyn PrivilegedBridge>> = if use_bridge {
        Some(Arc::new(NativeBridge::new(
            resolver.clone(),
            LibraryScanner::new(os),
        )))
    } else {
        None
    };
    debug!(%os, bridge = use_bridge, home = ?resolver.home(), "Bootstrapping detection");

    let frames: Box<dyn FrameSource> =
        Box::new(IntervalFrameSource::new(settings.nominal_frame_rate_hz));
    let deps = DetectionDeps {
        bridge,
        signals: Arc::new(NativeHostSignals::new()),
        navigation: Arc::new(HeadlessNavigationHost),
        frames: Arc::new(Mutex::new(frames)),
    };

    Ok(CliContext {
        orchestrator: DetectionOrchestrator::new(deps, &settings)?,
        resolver,
        os,
    })
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_config_rejects_out_of_range_flags() {
        let cli = Cli::parse_from(["rigscan", "--probe-timeout-ms", "1", "specs"]);
        let err = CliConfig::from_cli(&cli).unwrap_err();
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_config_rejects_relative_home() {
        let cli = Cli::parse_from(["rigscan", "--home", "relative/dir", "paths"]);
        assert!(matches!(
            CliConfig::from_cli(&cli),
            Err(CliError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_bootstrap_uses_home_override() {
        let home = TempDir::new().unwrap();
        let home_arg = home.path().to_string_lossy().into_owned();
        let cli = Cli::parse_from(["rigscan", "--no-bridge", "--home", home_arg.as_str(), "paths"]);

        let config = CliConfig::from_cli(&cli).unwrap();
        assert!(!config.use_bridge);

        let ctx = bootstrap(config).unwrap();
        assert_eq!(ctx.resolver.home(), Some(home.path()));
        assert!(!ctx.orchestrator.has_bridge());
    }
}
