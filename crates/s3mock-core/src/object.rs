//! Object store collaborator
//!
//! The bucket store only needs to know whether a bucket still holds objects
//! before it removes the backing directory.

use crate::{Bucket, Result};
use std::fs;

/// Read-side view of the object data held inside buckets
pub trait ObjectStore: Send + Sync {
    /// List the keys of all objects stored in `bucket`
    fn list_objects(&self, bucket: &Bucket) -> Result<Vec<String>>;
}

/// Object store that treats every visible entry in the bucket directory as an object
///
/// Entries starting with `.` are bucket-scoped bookkeeping and never count.
#[derive(Clone, Debug, Default)]
pub struct FsObjectStore;

impl FsObjectStore {
    pub fn new() -> Self {
        Self
    }
}

impl ObjectStore for FsObjectStore {
    fn list_objects(&self, bucket: &Bucket) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(bucket.path())? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.starts_with('.') {
                keys.push(name);
            }
        }
        keys.sort();
        Ok(keys)
    }
}
