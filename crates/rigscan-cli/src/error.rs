//! CLI-specific error types and exit codes.

use rigscan_core::{DetectionError, PathError, SettingsError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Hardware detection gave up entirely.
    #[error("{0}. Enter your specs manually instead.")]
    DetectionExhausted(String),

    /// Flags or environment values out of range.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Output could not be written or serialized.
    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    /// Map error to a process exit code (sysexits.h where one fits).
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::DetectionExhausted(_) => 1,
            Self::Config(_) => 78, // EX_CONFIG
            Self::Output(_) => 74, // EX_IOERR
        }
    }
}

impl From<DetectionError> for CliError {
    fn from(err: DetectionError) -> Self {
        match err {
            DetectionError::DetectionExhausted(_) => Self::DetectionExhausted(err.to_string()),
            other => Self::Config(other.to_string()),
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(format!("--home: {err}"))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhaustion_asks_for_manual_entry() {
        let err = CliError::from(DetectionError::DetectionExhausted("gpu probe panicked".into()));
        assert_eq!(err.exit_code(), 1);
        let msg = err.to_string();
        assert!(msg.contains("gpu probe panicked"));
        assert!(msg.contains("manually"));
    }

    #[test]
    fn test_settings_errors_are_config() {
        let err = CliError::from(SettingsError::InvalidFrameRate(0));
        assert_eq!(err.exit_code(), 78);
    }
}
