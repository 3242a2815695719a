//! Application state

use crate::config::GatewayConfig;
use s3mock_core::{BucketStore, CoreError, FsObjectStore, KeyRegistry, MemoryKeyRegistry};
use std::sync::Arc;
use tracing::{info, warn};

/// Owner ID reported in bucket listings
pub const DEFAULT_OWNER_ID: &str =
    "79a59df900b949e55d96a1e698fbacedfd6e09d98eacf8f8d5218e7cd47ef2be";

/// Owner display name reported in bucket listings
pub const DEFAULT_OWNER_NAME: &str = "s3-mock-file-store";

/// Application state shared across handlers
pub struct AppState {
    /// Gateway configuration
    pub config: GatewayConfig,
    /// Bucket store
    pub bucket_store: Arc<BucketStore>,
    /// KMS key references per bucket
    pub key_registry: Arc<MemoryKeyRegistry>,
}

impl AppState {
    /// Create a new application state
    ///
    /// Opens the bucket store on the configured root and creates the initial
    /// buckets. An initial bucket left over from a previous run is reused.
    pub fn new(config: GatewayConfig) -> anyhow::Result<Self> {
        let key_registry = Arc::new(MemoryKeyRegistry::new());
        let bucket_store = Arc::new(BucketStore::open(
            config.root_dir.clone(),
            Arc::new(FsObjectStore::new()),
            Arc::clone(&key_registry) as Arc<dyn KeyRegistry>,
        )?);

        info!("Storage root: {}", bucket_store.root().display());

        for name in &config.initial_buckets {
            match bucket_store.create_bucket(name) {
                Ok(_) => info!("Created initial bucket {}", name),
                Err(CoreError::BucketAlreadyExists(_)) => {
                    info!("Initial bucket {} already exists", name)
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(Self {
            config,
            bucket_store,
            key_registry,
        })
    }

    /// Release the storage root unless it should outlive the process
    pub fn cleanup(&self) -> anyhow::Result<()> {
        if self.config.retain_files_on_exit {
            info!(
                "Retaining storage root {}",
                self.bucket_store.root().display()
            );
            return Ok(());
        }

        match std::fs::remove_dir_all(self.bucket_store.root()) {
            Ok(()) => {
                info!("Removed storage root {}", self.bucket_store.root().display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                warn!("Failed to remove storage root: {}", e);
                Err(e.into())
            }
        }
    }
}
