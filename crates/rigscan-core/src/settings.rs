//! Detection settings and validation.
//!
//! Pure configuration values; the CLI fills them from flags and environment
//! variables, tests build them directly.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Deadline for a single protocol-handler probe.
pub const DEFAULT_PROTOCOL_TIMEOUT_MS: u64 = 100;

/// Wall-time window the refresh-rate sampler counts frames over.
pub const DEFAULT_SAMPLE_WINDOW_MS: u64 = 1000;

/// Frame rate of the native interval frame source.
pub const DEFAULT_NOMINAL_FRAME_RATE_HZ: u32 = 60;

/// Storage class reported when nothing better is known.
pub const DEFAULT_STORAGE: &str = "nvme";

/// Tunables for a detection pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DetectionSettings {
    /// Deadline for each protocol-handler probe, in milliseconds.
    pub protocol_timeout_ms: u64,

    /// Refresh-rate sampling window, in milliseconds.
    pub sample_window_ms: u64,

    /// Tick rate of the interval frame source used by native hosts.
    pub nominal_frame_rate_hz: u32,

    /// Storage class placed in `SystemSpecs::storage`.
    pub storage: String,

    /// Replaces the detected home directory for root resolution.
    pub home_override: Option<PathBuf>,
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self {
            protocol_timeout_ms: DEFAULT_PROTOCOL_TIMEOUT_MS,
            sample_window_ms: DEFAULT_SAMPLE_WINDOW_MS,
            nominal_frame_rate_hz: DEFAULT_NOMINAL_FRAME_RATE_HZ,
            storage: DEFAULT_STORAGE.to_string(),
            home_override: None,
        }
    }
}

impl DetectionSettings {
    #[must_use]
    pub const fn protocol_timeout(&self) -> Duration {
        Duration::from_millis(self.protocol_timeout_ms)
    }

    #[must_use]
    pub const fn sample_window(&self) -> Duration {
        Duration::from_millis(self.sample_window_ms)
    }
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Protocol timeout must be between 10 and 5000 ms, got {0}")]
    InvalidProtocolTimeout(u64),

    #[error("Sample window must be between 100 and 10000 ms, got {0}")]
    InvalidSampleWindow(u64),

    #[error("Nominal frame rate must be between 1 and 1000 Hz, got {0}")]
    InvalidFrameRate(u32),

    #[error("Storage class cannot be empty")]
    EmptyStorage,
}

/// Validate settings values.
pub fn validate_settings(settings: &DetectionSettings) -> Result<(), SettingsError> {
    if !(10..=5000).contains(&settings.protocol_timeout_ms) {
        return Err(SettingsError::InvalidProtocolTimeout(
            settings.protocol_timeout_ms,
        ));
    }

    if !(100..=10_000).contains(&settings.sample_window_ms) {
        return Err(SettingsError::InvalidSampleWindow(settings.sample_window_ms));
    }

    if !(1..=1000).contains(&settings.nominal_frame_rate_hz) {
        return Err(SettingsError::InvalidFrameRate(
            settings.nominal_frame_rate_hz,
        ));
    }

    if settings.storage.trim().is_empty() {
        return Err(SettingsError::EmptyStorage);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = DetectionSettings::default();
        assert_eq!(settings.protocol_timeout(), Duration::from_millis(100));
        assert_eq!(settings.sample_window(), Duration::from_secs(1));
        assert_eq!(settings.storage, "nvme");
        assert!(settings.home_override.is_none());
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_validate_timeout_out_of_range() {
        let settings = DetectionSettings {
            protocol_timeout_ms: 5,
            ..Default::default()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::InvalidProtocolTimeout(5))
        ));
    }

    #[test]
    fn test_validate_sample_window_out_of_range() {
        let settings = DetectionSettings {
            sample_window_ms: 60_000,
            ..Default::default()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::InvalidSampleWindow(60_000))
        ));
    }

    #[test]
    fn test_validate_frame_rate_zero() {
        let settings = DetectionSettings {
            nominal_frame_rate_hz: 0,
            ..Default::default()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::InvalidFrameRate(0))
        ));
    }

    #[test]
    fn test_validate_empty_storage() {
        let settings = DetectionSettings {
            storage: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::EmptyStorage)
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: DetectionSettings =
            serde_json::from_str(r#"{"protocol_timeout_ms": 250}"#).unwrap();
        assert_eq!(settings.protocol_timeout_ms, 250);
        assert_eq!(settings.sample_window_ms, DEFAULT_SAMPLE_WINDOW_MS);
    }
}
