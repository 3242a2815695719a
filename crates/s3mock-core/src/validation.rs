//! Bucket name validation
//!
//! Pure checks with no filesystem access. A name that passes is safe to use
//! as a single path component below the storage root.

use crate::{CoreError, Result};

/// Minimum bucket name length, in characters
pub const MIN_BUCKET_NAME_LEN: usize = 3;

/// Maximum bucket name length, in characters
pub const MAX_BUCKET_NAME_LEN: usize = 63;

/// Validate a bucket name
///
/// Names are measured in characters, so non-ASCII letters count once.
/// Allowed characters are Unicode letters and digits plus `-`, `.` and `_`;
/// the first and last character must be a letter or digit.
pub fn validate_bucket_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(CoreError::InvalidBucketName(
            "Bucket name cannot be empty".to_string(),
        ));
    }

    let len = name.chars().count();
    if !(MIN_BUCKET_NAME_LEN..=MAX_BUCKET_NAME_LEN).contains(&len) {
        return Err(CoreError::InvalidBucketName(format!(
            "Bucket name must be between {} and {} characters: {}",
            MIN_BUCKET_NAME_LEN, MAX_BUCKET_NAME_LEN, name
        )));
    }

    if let Some(c) = name.chars().find(|c| !is_permitted(*c)) {
        return Err(CoreError::InvalidBucketName(format!(
            "Bucket name contains illegal character {:?}: {}",
            c, name
        )));
    }

    let first = name.chars().next();
    let last = name.chars().next_back();
    if !first.is_some_and(char::is_alphanumeric) || !last.is_some_and(char::is_alphanumeric) {
        return Err(CoreError::InvalidBucketName(format!(
            "Bucket name must start and end with a letter or digit: {}",
            name
        )));
    }

    Ok(())
}

/// Check a bucket name without building an error
pub fn is_valid_bucket_name(name: &str) -> bool {
    validate_bucket_name(name).is_ok()
}

fn is_permitted(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '.' | '_')
}
