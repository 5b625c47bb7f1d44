//! Native implementation of the privileged bridge.
//!
//! Every query runs on tokio's blocking pool: sysinfo refreshes, command
//! execution and directory walks all block.

mod commands;
mod cpu;
mod display;
mod gpu;

use async_trait::async_trait;
use rigscan_core::{
    BridgeCpu, BridgeError, BridgeGpu, BridgeMonitor, BridgeResult, GameRecord, PathResolver,
    PrivilegedBridge,
};
use tracing::debug;

use crate::library::LibraryScanner;

pub use commands::CommandError;
pub(crate) use cpu::platform_identity;

/// Bridge answering from the local machine.
#[derive(Debug, Clone)]
pub struct NativeBridge {
    resolver: PathResolver,
    scanner: LibraryScanner,
}

impl NativeBridge {
    pub const fn new(resolver: PathResolver, scanner: LibraryScanner) -> Self {
        Self { resolver, scanner }
    }
}

async fn blocking<T, F>(query: &'static str, f: F) -> BridgeResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> BridgeResult<T> + Send + 'static,
{
    let result = tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| BridgeError::Failed(format!("{query} task failed: {e}")))?;
    if let Err(e) = &result {
        debug!(query, error = %e, "Native bridge query failed");
    }
    result
}

#[async_trait]
impl PrivilegedBridge for NativeBridge {
    async fn detect_cpu(&self) -> BridgeResult<BridgeCpu> {
        blocking("cpu", cpu::detect_cpu).await
    }

    async fn detect_gpu(&self) -> BridgeResult<BridgeGpu> {
        blocking("gpu", gpu::detect_gpu).await
    }

    async fn detect_ram(&self) -> BridgeResult<u32> {
        blocking("ram", cpu::detect_ram_gb).await
    }

    async fn detect_monitor(&self) -> BridgeResult<BridgeMonitor> {
        blocking("monitor", display::detect_monitor).await
    }

    async fn detect_games(&self) -> BridgeResult<Vec<GameRecord>> {
        let resolver = self.resolver.clone();
        let scanner = self.scanner;
        blocking("games", move || Ok(scanner.scan_installed(&resolver))).await
    }
}
