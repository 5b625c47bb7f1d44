//! Primary display mode detection.

use rigscan_core::{BridgeError, BridgeMonitor, BridgeResult};

#[cfg(target_os = "linux")]
pub fn detect_monitor() -> BridgeResult<BridgeMonitor> {
    let stdout = super::commands::run_query("xrandr", &["--current"])
        .map_err(|e| BridgeError::Unsupported(e.to_string()))?;
    parse_xrandr(&stdout)
        .ok_or_else(|| BridgeError::Failed("xrandr reported no active mode".to_string()))
}

#[cfg(not(target_os = "linux"))]
pub fn detect_monitor() -> BridgeResult<BridgeMonitor> {
    Err(BridgeError::Unsupported(
        "display mode query is only implemented for X11".to_string(),
    ))
}

/// Find the active mode (marked `*`) in `xrandr` output.
///
/// Mode lines look like `   2560x1440    164.96*+  59.95`. HDR is not
/// reported by xrandr and is always `false`.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_xrandr(stdout: &str) -> Option<BridgeMonitor> {
    stdout.lines().find_map(|line| {
        let mut tokens = line.split_whitespace();
        let resolution = tokens.next()?;
        if !resolution.contains('x') || !resolution.starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }
        let active = tokens.find(|t| t.contains('*'))?;
        let rate: f32 = active.trim_end_matches(['*', '+']).parse().ok()?;

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let refresh_rate_hz = rate.round() as u32;

        Some(BridgeMonitor {
            resolution: resolution.to_string(),
            refresh_rate_hz,
            hdr: false,
        })
    })
}
