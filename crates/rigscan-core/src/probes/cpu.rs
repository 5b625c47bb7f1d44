//! CPU sub-probe.

use tracing::{debug, warn};

use crate::domain::CpuTag;
use crate::error::DetectionError;
use crate::ports::{HostSignals, PrivilegedBridge};

/// Core count assumed when the host does not report one.
pub const DEFAULT_CORE_COUNT: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CpuVendor {
    Intel,
    Amd,
}

impl CpuVendor {
    /// Unknown vendors fall into the Intel catalog.
    fn from_identity(identity: &str) -> Self {
        let lower = identity.to_ascii_lowercase();
        if lower.contains("amd") || lower.contains("ryzen") {
            Self::Amd
        } else {
            Self::Intel
        }
    }
}

/// Map a vendor identity string and core count onto the CPU catalog.
pub fn classify_cpu(identity: &str, cores: u32) -> CpuTag {
    let vendor = CpuVendor::from_identity(identity);
    match (vendor, cores) {
        (CpuVendor::Intel, 32..) => CpuTag::I9_14900K,
        (CpuVendor::Intel, 24..) => CpuTag::I7_14700K,
        (CpuVendor::Intel, _) => CpuTag::I5_14600K,
        (CpuVendor::Amd, 32..) => CpuTag::R9_7950X,
        (CpuVendor::Amd, 24..) => CpuTag::R7_7700X,
        (CpuVendor::Amd, _) => CpuTag::R5_7600X,
    }
}

/// Bridge record first, then platform identity plus logical cores.
pub async fn probe_cpu(bridge: Option<&dyn PrivilegedBridge>, signals: &dyn HostSignals) -> CpuTag {
    if let Some(bridge) = bridge {
        match bridge.detect_cpu().await {
            Ok(cpu) => {
                let tag = classify_cpu(&format!("{} {}", cpu.manufacturer, cpu.brand), cpu.cores);
                debug!(brand = %cpu.brand, cores = cpu.cores, %tag, "CPU from bridge");
                return tag;
            }
            Err(e) => warn!(error = %e, "Bridge CPU query failed, using host signals"),
        }
    }

    let identity = signals.platform_identity().unwrap_or_else(|e| {
        debug!("{}", DetectionError::HardwareQueryUnavailable(e.to_string()));
        String::new()
    });
    let cores = signals.logical_cores().unwrap_or(DEFAULT_CORE_COUNT);
    let tag = classify_cpu(&identity, cores);
    debug!(cores, %tag, "CPU from host signals");
    tag
}
