//! Remote synchronization module.

mod sync_service;

pub use sync_service::{RemoteSyncService, SyncServiceTrait, SYNC_SIMULATION_DELAY};
