//! An out-of-crate bridge adapter written against the crate-root exports only,
//! the way `rigscan-runtime` implements its native bridge.

use std::sync::Arc;

use async_trait::async_trait;
use rigscan_core::{
    BridgeCpu, BridgeError, BridgeGpu, BridgeMonitor, BridgeResult, GameRecord, Platform,
    PrivilegedBridge,
};

struct FixedBridge;

#[async_trait]
impl PrivilegedBridge for FixedBridge {
    async fn detect_cpu(&self) -> BridgeResult<BridgeCpu> {
        Ok(BridgeCpu {
            manufacturer: "Intel".to_string(),
            brand: "Core i9-14900K".to_string(),
            cores: 32,
            speed_ghz: 3.2,
        })
    }

    async fn detect_gpu(&self) -> BridgeResult<BridgeGpu> {
        Err(BridgeError::Unsupported("gpu".to_string()))
    }

    async fn detect_ram(&self) -> BridgeResult<u32> {
        Ok(64)
    }

    async fn detect_monitor(&self) -> BridgeResult<BridgeMonitor> {
        Err(BridgeError::Failed("no display".to_string()))
    }

    async fn detect_games(&self) -> BridgeResult<Vec<GameRecord>> {
        Ok(GameRecord::new("Fortnite", Platform::Epic).into_iter().collect())
    }
}

#[tokio::test]
async fn adapter_built_from_root_exports() {
    let bridge: Arc<dyn PrivilegedBridge> = Arc::new(FixedBridge);

    assert_eq!(bridge.detect_cpu().await.unwrap().cores, 32);
    assert_eq!(bridge.detect_ram().await.unwrap(), 64);
    assert!(matches!(
        bridge.detect_gpu().await,
        Err(BridgeError::Unsupported(_))
    ));
    assert!(bridge.detect_monitor().await.is_err());

    let games = bridge.detect_games().await.unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].id(), "fortnite");
}
