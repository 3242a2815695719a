//! Bucket operation handlers

use super::with_store;
use crate::{AppState, ApiError, S3ErrorCode};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// PUT /{bucket} - Create bucket
pub async fn create_bucket(
    State(state): State<Arc<AppState>>,
    Path(bucket): Path<String>,
) -> Result<Response, ApiError> {
    let name = bucket.clone();
    with_store(&state, move |store| store.create_bucket(&name)).await?;

    // Header values must be ASCII; bucket names may not be
    Ok((
        StatusCode::OK,
        [("Location", format!("/{}", urlencoding::encode(&bucket)))],
        "",
    )
        .into_response())
}

/// HEAD /{bucket} - Check if bucket exists
pub async fn head_bucket(
    State(state): State<Arc<AppState>>,
    Path(bucket): Path<String>,
) -> Result<Response, ApiError> {
    let name = bucket.clone();
    if !with_store(&state, move |store| store.does_bucket_exist(&name)).await? {
        return Err(no_such_bucket(&bucket));
    }

    Ok(StatusCode::OK.into_response())
}

/// DELETE /{bucket} - Delete bucket
pub async fn delete_bucket(
    State(state): State<Arc<AppState>>,
    Path(bucket): Path<String>,
) -> Result<Response, ApiError> {
    let name = bucket.clone();
    if !with_store(&state, move |store| store.delete_bucket(&name)).await? {
        return Err(no_such_bucket(&bucket));
    }

    Ok(StatusCode::NO_CONTENT.into_response())
}

fn no_such_bucket(bucket: &str) -> ApiError {
    ApiError::s3_with_resource(
        S3ErrorCode::NoSuchBucket,
        "The specified bucket does not exist",
        format!("/{}", bucket),
    )
}
