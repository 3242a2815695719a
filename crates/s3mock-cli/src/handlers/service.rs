//! Service-level handlers (ListBuckets)

use super::with_store;
use crate::state::{DEFAULT_OWNER_ID, DEFAULT_OWNER_NAME};
use crate::{AppState, ApiError};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use s3mock_core::{ListAllMyBucketsResult, Owner};
use std::sync::Arc;

/// GET / - List all buckets
pub async fn list_buckets(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let buckets = with_store(&state, |store| store.list_buckets()).await?;

    let owner = Owner {
        id: DEFAULT_OWNER_ID.to_string(),
        display_name: DEFAULT_OWNER_NAME.to_string(),
    };
    let xml_response = ListAllMyBucketsResult::new(owner, &buckets).to_xml()?;

    Ok((
        StatusCode::OK,
        [("Content-Type", "application/xml")],
        xml_response,
    )
        .into_response())
}

/// HEAD / - Health check
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
