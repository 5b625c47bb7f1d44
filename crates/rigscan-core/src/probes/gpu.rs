//! GPU sub-probe: renderer-string matching against the GPU catalog.

use tracing::{debug, warn};

use crate::domain::GpuTag;
use crate::error::DetectionError;
use crate::ports::{HostSignals, PrivilegedBridge};

/// One renderer-matching rule: both substrings must appear.
struct GpuRule {
    family: &'static str,
    sku: &'static str,
    tag: GpuTag,
}

/// Evaluated top to bottom; higher SKUs come first within each family.
const GPU_RULES: &[GpuRule] = &[
    GpuRule { family: "rtx", sku: "4090", tag: GpuTag::Rtx4090 },
    GpuRule { family: "rtx", sku: "4080", tag: GpuTag::Rtx4080 },
    GpuRule { family: "rtx", sku: "4070", tag: GpuTag::Rtx4070 },
    GpuRule { family: "rtx", sku: "4060", tag: GpuTag::Rtx4060 },
    GpuRule { family: "rx", sku: "7900", tag: GpuTag::Rx7900xt },
    GpuRule { family: "rx", sku: "7800", tag: GpuTag::Rx7800xt },
    GpuRule { family: "rx", sku: "7700", tag: GpuTag::Rx7700xt },
    GpuRule { family: "rx", sku: "7600", tag: GpuTag::Rx7600 },
];

/// Match a renderer or model string, case-insensitively.
pub fn match_renderer(renderer: &str) -> Option<GpuTag> {
    let lower = renderer.to_ascii_lowercase();
    GPU_RULES
        .iter()
        .find(|rule| lower.contains(rule.family) && lower.contains(rule.sku))
        .map(|rule| rule.tag)
}

/// Bridge model first, then the rendering context's unmasked renderer.
pub async fn probe_gpu(bridge: Option<&dyn PrivilegedBridge>, signals: &dyn HostSignals) -> GpuTag {
    if let Some(bridge) = bridge {
        match bridge.detect_gpu().await {
            Ok(gpu) => {
                let tag = match_renderer(&gpu.model).unwrap_or(GpuTag::DEFAULT);
                debug!(model = %gpu.model, %tag, "GPU from bridge");
                return tag;
            }
            Err(e) => warn!(error = %e, "Bridge GPU query failed, using renderer string"),
        }
    }

    let renderer = match signals.rendering_context() {
        Ok(context) => context.unmasked_renderer(),
        Err(e) => {
            debug!("{}", DetectionError::HardwareQueryUnavailable(e.to_string()));
            None
        }
    };

    let tag = renderer
        .as_deref()
        .and_then(match_renderer)
        .unwrap_or(GpuTag::DEFAULT);
    debug!(renderer = renderer.as_deref().unwrap_or("<none>"), %tag, "GPU from renderer");
    tag
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockHostSignals, RenderingContext, SignalError};
    use crate::test_utils::{FakeBridge, StaticRenderer};

    fn signals_with_renderer(renderer: Option<&str>) -> MockHostSignals {
        let renderer = renderer.map(str::to_string);
        let mut signals = MockHostSignals::new();
        signals.expect_rendering_context().returning(move || {
            Ok(Box::new(StaticRenderer {
                renderer: renderer.clone(),
                vendor: None,
            }) as Box<dyn RenderingContext>)
        });
        signals
    }

    #[test]
    fn test_match_renderer_known_strings() {
        assert_eq!(
            match_renderer("ANGLE (NVIDIA, NVIDIA GeForce RTX 4090 Direct3D11 vs_5_0 ps_5_0)"),
            Some(GpuTag::Rtx4090)
        );
        assert_eq!(
            match_renderer("AMD Radeon RX 7900 XTX"),
            Some(GpuTag::Rx7900xt)
        );
        assert_eq!(match_renderer("Radeon RX 7600"), Some(GpuTag::Rx7600));
        assert_eq!(match_renderer("NVIDIA GeForce GTX 1080"), None);
        assert_eq!(match_renderer("Apple M2"), None);
    }

    #[test]
    fn test_rules_are_ordered_by_descending_sku() {
        for family in ["rtx", "rx"] {
            let skus: Vec<u32> = GPU_RULES
                .iter()
                .filter(|rule| rule.family == family)
                .map(|rule| rule.sku.parse().unwrap())
                .collect();
            assert!(skus.windows(2).all(|pair| pair[0] > pair[1]));
        }
    }

    #[tokio::test]
    async fn test_renderer_rtx_4080() {
        let signals = signals_with_renderer(Some("NVIDIA GeForce RTX 4080"));
        assert_eq!(probe_gpu(None, &signals).await, GpuTag::Rtx4080);
    }

    #[tokio::test]
    async fn test_no_rendering_context_defaults_to_rtx4070() {
        let mut signals = MockHostSignals::new();
        signals
            .expect_rendering_context()
            .returning(|| Err(SignalError::Unavailable("rendering context")));
        assert_eq!(probe_gpu(None, &signals).await, GpuTag::Rtx4070);
    }

    #[tokio::test]
    async fn test_masked_renderer_defaults() {
        let signals = signals_with_renderer(None);
        assert_eq!(probe_gpu(None, &signals).await, GpuTag::DEFAULT);
    }

    #[tokio::test]
    async fn test_bridge_model_is_normalized() {
        let bridge = FakeBridge::unsupported().with_gpu("AMD", "Radeon RX 7800 XT");
        let mut signals = MockHostSignals::new();
        signals.expect_rendering_context().never();
        assert_eq!(probe_gpu(Some(&bridge), &signals).await, GpuTag::Rx7800xt);
    }
}
