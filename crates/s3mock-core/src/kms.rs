//! Key registry collaborator
//!
//! Holds the KMS key references that were registered for a bucket. The bucket
//! store drops them when the bucket goes away.

use crate::Result;
use dashmap::DashMap;
use tracing::debug;

/// Registry of encryption key references scoped to a bucket
pub trait KeyRegistry: Send + Sync {
    /// Drop every key reference associated with `bucket`
    fn remove_key(&self, bucket: &str) -> Result<()>;
}

/// In-process key registry
#[derive(Debug, Default)]
pub struct MemoryKeyRegistry {
    keys: DashMap<String, Vec<String>>,
}

impl MemoryKeyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a key reference for a bucket; duplicates are ignored
    pub fn register_key(&self, bucket: &str, key_ref: impl Into<String>) {
        let key_ref = key_ref.into();
        let mut refs = self.keys.entry(bucket.to_string()).or_default();
        if !refs.contains(&key_ref) {
            refs.push(key_ref);
        }
    }

    /// Key references registered for a bucket
    pub fn keys_for(&self, bucket: &str) -> Vec<String> {
        self.keys
            .get(bucket)
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// Whether any key is registered for a bucket
    pub fn has_keys(&self, bucket: &str) -> bool {
        self.keys.get(bucket).is_some_and(|r| !r.is_empty())
    }
}

impl KeyRegistry for MemoryKeyRegistry {
    fn remove_key(&self, bucket: &str) -> Result<()> {
        if let Some((_, refs)) = self.keys.remove(bucket) {
            debug!(bucket, removed = refs.len(), "Dropped key references");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_remove() {
        let registry = MemoryKeyRegistry::new();
        registry.register_key("bucket-a", "arn:aws:kms:us-east-1:1:key/one");
        registry.register_key("bucket-a", "arn:aws:kms:us-east-1:1:key/one");
        registry.register_key("bucket-a", "arn:aws:kms:us-east-1:1:key/two");
        registry.register_key("bucket-b", "arn:aws:kms:us-east-1:1:key/three");

        assert_eq!(registry.keys_for("bucket-a").len(), 2);

        registry.remove_key("bucket-a").unwrap();
        assert!(!registry.has_keys("bucket-a"));
        assert!(registry.has_keys("bucket-b"));
    }

    #[test]
    fn test_remove_unknown_bucket_is_noop() {
        let registry = MemoryKeyRegistry::new();
        assert!(registry.remove_key("never-registered").is_ok());
    }
}
