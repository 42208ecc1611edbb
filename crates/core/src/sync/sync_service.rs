use std::time::Duration;

use async_trait::async_trait;
use log::info;

use crate::errors::Result;

/// Fixed delay used to simulate the remote round trip.
pub const SYNC_SIMULATION_DELAY: Duration = Duration::from_secs(1);

/// Trait for synchronizing local state with a remote backend.
#[async_trait]
pub trait SyncServiceTrait: Send + Sync {
    /// Pushes local state to the remote service.
    async fn sync_remote(&self) -> Result<()>;
}

/// Placeholder implementation until a real backend exists: waits a fixed
/// duration and unconditionally succeeds. No data leaves the process, and
/// there is no retry or cancellation. A real implementation needs request
/// handling, a timeout, and partial-failure reporting.
pub struct RemoteSyncService {
    delay: Duration,
}

impl RemoteSyncService {
    pub fn new() -> Self {
        RemoteSyncService {
            delay: SYNC_SIMULATION_DELAY,
        }
    }

    /// Overrides the simulated round-trip duration.
    pub fn with_delay(delay: Duration) -> Self {
        RemoteSyncService { delay }
    }
}

impl Default for RemoteSyncService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SyncServiceTrait for RemoteSyncService {
    async fn sync_remote(&self) -> Result<()> {
        tokio::time::sleep(self.delay).await;
        info!("リモート同期が完了しました");
        Ok(())
    }
}
