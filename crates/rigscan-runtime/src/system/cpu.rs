//! CPU and memory facts from sysinfo.

use rigscan_core::{BridgeCpu, BridgeError, BridgeResult};
use sysinfo::System;

const BYTES_PER_GB: u64 = 1024 * 1024 * 1024;

pub fn detect_cpu() -> BridgeResult<BridgeCpu> {
    let mut sys = System::new();
    sys.refresh_cpu_all();

    let first = sys
        .cpus()
        .first()
        .ok_or_else(|| BridgeError::Unsupported("sysinfo reported no CPUs".to_string()))?;

    #[allow(clippy::cast_precision_loss)]
    let speed_ghz = first.frequency() as f32 / 1000.0;

    Ok(BridgeCpu {
        manufacturer: manufacturer_from_vendor_id(first.vendor_id()).to_string(),
        brand: first.brand().trim().to_string(),
        cores: u32::try_from(sys.cpus().len()).unwrap_or(u32::MAX),
        speed_ghz,
    })
}

/// Installed memory rounded to whole gigabytes.
pub fn detect_ram_gb() -> BridgeResult<u32> {
    let mut sys = System::new();
    sys.refresh_memory();

    let total = sys.total_memory();
    if total == 0 {
        return Err(BridgeError::Unsupported(
            "sysinfo reported no memory".to_string(),
        ));
    }
    Ok(u32::try_from((total + BYTES_PER_GB / 2) / BYTES_PER_GB).unwrap_or(u32::MAX))
}

/// Map a CPUID vendor string to a manufacturer name.
fn manufacturer_from_vendor_id(vendor_id: &str) -> &str {
    match vendor_id {
        "GenuineIntel" => "Intel",
        "AuthenticAMD" => "AMD",
        other => other,
    }
}

/// Platform identity string exposed to the heuristic probes.
pub fn platform_identity() -> Option<String> {
    let mut sys = System::new();
    sys.refresh_cpu_all();
    let cpu = sys.cpus().first()?;
    Some(format!(
        "{} {}",
        manufacturer_from_vendor_id(cpu.vendor_id()),
        cpu.brand().trim()
    ))
}
