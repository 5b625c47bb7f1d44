//! RAM sub-probe.

use tracing::{debug, warn};

use crate::domain::RamTier;
use crate::ports::{HostSignals, PrivilegedBridge};

use super::cpu::DEFAULT_CORE_COUNT;

const BYTES_PER_GIB: u64 = 1024 * 1024 * 1024;

/// Snap a heap-size limit down to a tier. Limits under 16 GiB give `None`.
pub fn tier_from_heap_limit(bytes: u64) -> Option<RamTier> {
    let gib = bytes.saturating_add(BYTES_PER_GIB / 2) / BYTES_PER_GIB;
    match gib {
        64.. => Some(RamTier::Gb64),
        32.. => Some(RamTier::Gb32),
        16.. => Some(RamTier::Gb16),
        _ => None,
    }
}

/// Estimate memory as four gigabytes per logical core.
pub fn tier_from_cores(cores: u32) -> RamTier {
    RamTier::nearest(cores.saturating_mul(4).clamp(16, 128))
}

/// Bridge total, then heap limit, then core-count estimate.
pub async fn probe_ram(
    bridge: Option<&dyn PrivilegedBridge>,
    signals: &dyn HostSignals,
) -> RamTier {
    if let Some(bridge) = bridge {
        match bridge.detect_ram().await {
            Ok(gb) => {
                let tier = RamTier::nearest(gb);
                debug!(gb, tier = tier.gigabytes(), "RAM from bridge");
                return tier;
            }
            Err(e) => warn!(error = %e, "Bridge RAM query failed, using host signals"),
        }
    }

    if let Some(tier) = signals
        .heap_size_limit_bytes()
        .ok()
        .and_then(tier_from_heap_limit)
    {
        debug!(tier = tier.gigabytes(), "RAM from heap limit");
        return tier;
    }

    let cores = signals.logical_cores().unwrap_or(DEFAULT_CORE_COUNT);
    let tier = tier_from_cores(cores);
    debug!(cores, tier = tier.gigabytes(), "RAM estimated from core count");
    tier
}
