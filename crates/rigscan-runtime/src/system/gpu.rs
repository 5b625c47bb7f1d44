//! GPU model detection via vendor and OS tools.
//!
//! Tried in order: `nvidia-smi`, then `lspci` (Linux), `wmic` (Windows) or
//! `system_profiler` (macOS). The first tool that names a controller wins.

use rigscan_core::{BridgeError, BridgeGpu, BridgeResult};
use tracing::debug;

use super::commands::run_query;

/// Query the primary GPU.
pub fn detect_gpu() -> BridgeResult<BridgeGpu> {
    match run_query(
        "nvidia-smi",
        &["--query-gpu=name,memory.total", "--format=csv,noheader,nounits"],
    ) {
        Ok(stdout) => {
            if let Some(gpu) = parse_nvidia_smi(&stdout) {
                return Ok(gpu);
            }
        }
        Err(e) => debug!(error = %e, "nvidia-smi unavailable"),
    }

    platform_gpu_model()
        .map(|model| BridgeGpu {
            vendor: vendor_of(&model).to_string(),
            model,
            vram_gb: None,
        })
        .ok_or_else(|| BridgeError::Unsupported("no GPU query tool answered".to_string()))
}

#[cfg(target_os = "linux")]
fn platform_gpu_model() -> Option<String> {
    run_query("lspci", &[])
        .map_err(|e| debug!(error = %e, "lspci unavailable"))
        .ok()
        .and_then(|stdout| parse_lspci(&stdout))
}

#[cfg(target_os = "windows")]
fn platform_gpu_model() -> Option<String> {
    run_query("wmic", &["path", "win32_VideoController", "get", "name"])
        .map_err(|e| debug!(error = %e, "wmic unavailable"))
        .ok()
        .and_then(|stdout| parse_wmic(&stdout))
}

#[cfg(target_os = "macos")]
fn platform_gpu_model() -> Option<String> {
    run_query("system_profiler", &["SPDisplaysDataType"])
        .map_err(|e| debug!(error = %e, "system_profiler unavailable"))
        .ok()
        .and_then(|stdout| parse_system_profiler(&stdout))
}

#[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
fn platform_gpu_model() -> Option<String> {
    None
}

/// First line of `name, memory.total` CSV. VRAM arrives in MiB.
fn parse_nvidia_smi(stdout: &str) -> Option<BridgeGpu> {
    let line = stdout.lines().map(str::trim).find(|l| !l.is_empty())?;
    let (name, memory) = line
        .split_once(',')
        .map_or((line, None), |(name, mem)| (name, Some(mem)));
    let vram_gb = memory
        .and_then(|mib| mib.trim().parse::<u32>().ok())
        .map(|mib| (mib + 512) / 1024);

    Some(BridgeGpu {
        vendor: "NVIDIA".to_string(),
        model: name.trim().to_string(),
        vram_gb,
    })
}

/// Pick a display controller from `lspci`, preferring discrete vendors.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_lspci(stdout: &str) -> Option<String> {
    let controllers: Vec<&str> = stdout
        .lines()
        .filter(|l| l.contains("VGA compatible controller") || l.contains("3D controller"))
        .filter_map(|l| l.splitn(3, ": ").nth(1).or_else(|| l.rsplit(": ").next()))
        .map(str::trim)
        .collect();

    controllers
        .iter()
        .find(|c| matches!(vendor_of(c), "NVIDIA" | "AMD"))
        .or_else(|| controllers.first())
        .map(|c| (*c).to_string())
}

#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
fn parse_wmic(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.eq_ignore_ascii_case("name"))
        .map(str::to_string)
        .next()
}

#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn parse_system_profiler(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .find_map(|l| l.trim().strip_prefix("Chipset Model:"))
        .map(|model| model.trim().to_string())
}

fn vendor_of(model: &str) -> &'static str {
    let lower = model.to_ascii_lowercase();
    if lower.contains("nvidia") || lower.contains("geforce") {
        "NVIDIA"
    } else if lower.contains("amd") || lower.contains("radeon") || lower.contains("ati ") {
        "AMD"
    } else if lower.contains("intel") {
        "Intel"
    } else if lower.contains("apple") {
        "Apple"
    } else {
        "Unknown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nvidia_smi_csv() {
        let gpu = parse_nvidia_smi("NVIDIA GeForce RTX 4080, 16376\n").unwrap();
        assert_eq!(gpu.model, "NVIDIA GeForce RTX 4080");
        assert_eq!(gpu.vram_gb, Some(16));
        assert!(parse_nvidia_smi("\n").is_none());
    }

    #[test]
    fn test_parse_lspci_prefers_discrete() {
        let stdout = "\
00:02.0 VGA compatible controller: Intel Corporation Raptor Lake-S GT1 [UHD Graphics 770] (rev 04)
01:00.0 VGA compatible controller: NVIDIA Corporation AD103 [GeForce RTX 4080] (rev a1)
01:00.1 Audio device: NVIDIA Corporation AD103 High Definition Audio Controller (rev a1)
";
        let model = parse_lspci(stdout).unwrap();
        assert!(model.starts_with("NVIDIA Corporation AD103"));
        assert!(parse_lspci("00:1f.3 Audio device: Intel\n").is_none());
    }

    #[test]
    fn test_parse_wmic_skips_header() {
        let stdout = "Name  \r\nAMD Radeon RX 7800 XT  \r\n\r\n";
        assert_eq!(parse_wmic(stdout).as_deref(), Some("AMD Radeon RX 7800 XT"));
    }

    #[test]
    fn test_parse_system_profiler_chipset() {
        let stdout = "Graphics/Displays:\n\n    Apple M2 Pro:\n\n      Chipset Model: Apple M2 Pro\n      Type: GPU\n";
        assert_eq!(parse_system_profiler(stdout).as_deref(), Some("Apple M2 Pro"));
    }

    #[test]
    fn test_vendor_of_model_strings() {
        assert_eq!(vendor_of("AMD Radeon RX 7600"), "AMD");
        assert_eq!(vendor_of("NVIDIA GeForce RTX 4060"), "NVIDIA");
        assert_eq!(vendor_of("Intel Arc A770"), "Intel");
        assert_eq!(vendor_of("Matrox G200"), "Unknown");
    }
}
