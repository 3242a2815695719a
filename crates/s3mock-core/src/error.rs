//! Error types for the s3mock-core crate

use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur in bucket store operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid bucket name
    #[error("invalid bucket name: {0}")]
    InvalidBucketName(String),

    /// Bucket already exists
    #[error("bucket already exists: {0}")]
    BucketAlreadyExists(String),

    /// Bucket not found
    #[error("bucket not found: {0}")]
    BucketNotFound(String),

    /// Bucket still holds objects
    #[error("bucket not empty: {0}")]
    BucketNotEmpty(String),

    /// Malformed tag
    #[error("invalid tag: {0}")]
    InvalidTag(String),

    /// Underlying storage medium failed
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Deserialization error
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// Key registry cleanup failed
    #[error("key registry error: {0}")]
    KeyRegistry(String),
}

impl CoreError {
    /// Whether this error was raised before any mutation took place
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidBucketName(_)
                | Self::BucketAlreadyExists(_)
                | Self::BucketNotFound(_)
                | Self::BucketNotEmpty(_)
                | Self::InvalidTag(_)
        )
    }
}
