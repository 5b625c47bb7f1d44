//! Monitor sub-probe: resolution, refresh rate and HDR.

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::{MonitorSpecs, RefreshRate, Resolution};
use crate::error::DetectionError;
use crate::ports::{BridgeMonitor, FrameSource, HostSignals, PrivilegedBridge};

use super::sampler::RefreshSampler;

fn resolution_from_screen(signals: &dyn HostSignals) -> Resolution {
    match signals.screen_metrics() {
        Ok(screen) => Resolution::from_width(screen.physical().0),
        Err(e) => {
            debug!("{}", DetectionError::HardwareQueryUnavailable(e.to_string()));
            Resolution::Fhd
        }
    }
}

async fn sampled_refresh_rate(
    signals: &dyn HostSignals,
    sampler: &RefreshSampler,
    frames: &Mutex<Box<dyn FrameSource>>,
) -> RefreshRate {
    if let Ok(hz) = signals.refresh_rate_hint() {
        return RefreshRate::snap(hz);
    }
    let mut source = frames.lock().await;
    sampler.sample(&mut **source).await
}

/// Bridge display mode first, then screen metrics and frame sampling.
///
/// A bridge record whose resolution does not parse still supplies refresh
/// rate and HDR; only the resolution falls back to the screen metrics.
pub async fn probe_monitor(
    bridge: Option<&dyn PrivilegedBridge>,
    signals: &dyn HostSignals,
    sampler: &RefreshSampler,
    frames: &Mutex<Box<dyn FrameSource>>,
) -> MonitorSpecs {
    if let Some(bridge) = bridge {
        match bridge.detect_monitor().await {
            Ok(BridgeMonitor {
                resolution,
                refresh_rate_hz,
                hdr,
            }) => {
                let bucket = Resolution::parse_bucketed(&resolution)
                    .unwrap_or_else(|| resolution_from_screen(signals));
                let monitor = MonitorSpecs {
                    resolution: bucket,
                    refresh_rate_hz: RefreshRate::snap(refresh_rate_hz),
                    hdr,
                };
                debug!(raw = %resolution, ?monitor, "Monitor from bridge");
                return monitor;
            }
            Err(e) => warn!(error = %e, "Bridge monitor query failed, using host signals"),
        }
    }

    let monitor = MonitorSpecs {
        resolution: resolution_from_screen(signals),
        refresh_rate_hz: sampled_refresh_rate(signals, sampler, frames).await,
        hdr: signals.hdr_supported().unwrap_or(false),
    };
    debug!(?monitor, "Monitor from host signals");
    monitor
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::ports::ScreenMetrics;
    use crate::test_utils::{FakeBridge, SimulatedFrameSource, StaticHostSignals};

    fn frames_at(hz: u32) -> Mutex<Box<dyn FrameSource>> {
        Mutex::new(Box::new(SimulatedFrameSource::at_rate(hz)) as Box<dyn FrameSource>)
    }

    #[tokio::test]
    async fn test_defaults_without_any_signal() {
        let monitor = probe_monitor(
            None,
            &StaticHostSignals::default(),
            &RefreshSampler::default(),
            &frames_at(60),
        )
        .await;
        assert_eq!(monitor, MonitorSpecs::default());
    }

    #[tokio::test]
    async fn test_screen_width_scaled_by_pixel_ratio() {
        let signals = StaticHostSignals {
            screen: Some(ScreenMetrics {
                width: 1920,
                height: 1080,
                device_pixel_ratio: 2.0,
            }),
            hdr: Some(true),
            ..StaticHostSignals::default()
        };
        let monitor = probe_monitor(
            None,
            &signals,
            &RefreshSampler::default(),
            &frames_at(144),
        )
        .await;

        assert_eq!(monitor.resolution, Resolution::Uhd);
        assert_eq!(monitor.refresh_rate_hz, RefreshRate::Hz144);
        assert!(monitor.hdr);
    }

    #[tokio::test]
    async fn test_refresh_hint_skips_sampling() {
        let signals = StaticHostSignals {
            refresh_rate_hint: Some(170),
            ..StaticHostSignals::default()
        };
        let frames = Mutex::new(Box::new(SimulatedFrameSource::with_interval(
            Duration::from_millis(1),
        )) as Box<dyn FrameSource>);
        let monitor = probe_monitor(None, &signals, &RefreshSampler::default(), &frames).await;
        assert_eq!(monitor.refresh_rate_hz, RefreshRate::Hz165);
    }

    #[tokio::test]
    async fn test_bridge_monitor_is_normalized() {
        let bridge = FakeBridge::unsupported().with_monitor("2560x1080", 75, true);
        let monitor = probe_monitor(
            Some(&bridge),
            &StaticHostSignals::default(),
            &RefreshSampler::default(),
            &frames_at(60),
        )
        .await;

        assert_eq!(
            monitor,
            MonitorSpecs {
                resolution: Resolution::Qhd,
                refresh_rate_hz: RefreshRate::Hz60,
                hdr: true,
            }
        );
    }

    #[tokio::test]
    async fn test_unparsable_bridge_resolution_uses_screen() {
        let bridge = FakeBridge::unsupported().with_monitor("primary", 240, false);
        let signals = StaticHostSignals {
            screen: Some(ScreenMetrics {
                width: 2560,
                height: 1440,
                device_pixel_ratio: 1.0,
            }),
            ..StaticHostSignals::default()
        };
        let monitor = probe_monitor(
            Some(&bridge),
            &signals,
            &RefreshSampler::default(),
            &frames_at(60),
        )
        .await;

        assert_eq!(monitor.resolution, Resolution::Qhd);
        assert_eq!(monitor.refresh_rate_hz, RefreshRate::Hz240);
    }
}
