//! Privileged bridge port.
//!
//! The bridge is the desktop shell's ground-truth OS query surface. The core
//! never requires it: an absent bridge and a failing bridge call are handled
//! identically, by falling back to heuristics.
//!
//! # Design Notes
//!
//! - Core owns the trait and record types
//! - Runtime owns the native implementation (sysinfo + command probing)
//! - Bridge records carry free text; probes normalize them into catalog tags

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::GameRecord;

/// Errors a bridge call can report.
#[derive(Debug, Clone, Error)]
pub enum BridgeError {
    /// The bridge exists but cannot answer this query on this host.
    #[error("Bridge query unsupported: {0}")]
    Unsupported(String),

    /// The query was attempted and failed.
    #[error("Bridge query failed: {0}")]
    Failed(String),
}

/// Result type for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// CPU facts as the OS reports them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeCpu {
    /// Vendor name, e.g. `"Intel"` or `"AMD"`.
    pub manufacturer: String,
    /// Marketing name, e.g. `"Core i7-13700K"`.
    pub brand: String,
    /// Logical core count.
    pub cores: u32,
    /// Base clock in GHz.
    pub speed_ghz: f32,
}

/// GPU facts as the OS reports them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeGpu {
    pub vendor: String,
    pub model: String,
    pub vram_gb: Option<u32>,
}

/// Primary display facts as the OS reports them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeMonitor {
    /// `"WxH"` in physical pixels.
    pub resolution: String,
    pub refresh_rate_hz: u32,
    pub hdr: bool,
}

/// Port for the privileged OS-query bridge.
///
/// Each call is one round trip; callers never pipeline requests.
#[async_trait]
pub trait PrivilegedBridge: Send + Sync {
    async fn detect_cpu(&self) -> BridgeResult<BridgeCpu>;

    async fn detect_gpu(&self) -> BridgeResult<BridgeGpu>;

    /// Total installed memory in whole gigabytes.
    async fn detect_ram(&self) -> BridgeResult<u32>;

    async fn detect_monitor(&self) -> BridgeResult<BridgeMonitor>;

    /// Games found by scanning launcher libraries on disk.
    async fn detect_games(&self) -> BridgeResult<Vec<GameRecord>>;
}
