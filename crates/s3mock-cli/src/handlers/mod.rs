//! S3 API request handlers

pub mod bucket;
pub mod service;

pub use bucket::*;
pub use service::*;

use crate::{AppState, ApiError};
use s3mock_core::BucketStore;
use std::sync::Arc;

/// Run a bucket store operation on the blocking pool
///
/// Store operations block on filesystem I/O. Once started they run to
/// completion even if the request future is dropped.
pub(crate) async fn with_store<F, T>(state: &Arc<AppState>, op: F) -> Result<T, ApiError>
where
    F: FnOnce(&BucketStore) -> s3mock_core::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let store = Arc::clone(&state.bucket_store);
    let result = tokio::task::spawn_blocking(move || op(&store))
        .await
        .map_err(|e| ApiError::Internal(format!("store task failed: {}", e)))?;
    Ok(result?)
}
