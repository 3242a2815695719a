//! Bucket management backed by the local filesystem
//!
//! Every bucket is one directory directly below the storage root. The
//! directory tree is the only source of truth: nothing about a bucket is kept
//! in memory, so a store opened on an existing root sees every bucket created
//! by a previous process.

use crate::{
    CoreError, Result,
    kms::{KeyRegistry, MemoryKeyRegistry},
    object::{FsObjectStore, ObjectStore},
    validation::{is_valid_bucket_name, validate_bucket_name},
};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use parking_lot::Mutex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// A named storage container, backed by one directory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bucket {
    name: String,
    creation_date: DateTime<Utc>,
    path: PathBuf,
}

impl Bucket {
    pub fn new(name: String, creation_date: DateTime<Utc>, path: PathBuf) -> Self {
        Self {
            name,
            creation_date,
            path,
        }
    }

    /// Get bucket name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get creation timestamp
    pub fn creation_date(&self) -> DateTime<Utc> {
        self.creation_date
    }

    /// Get the backing directory
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Registry of buckets under a root storage directory
///
/// Create and delete are serialized per bucket name, so the existence check
/// and the filesystem mutation that follows it happen as one step. Reads take
/// no lock: bucket directories appear through a single `mkdir`, so a reader
/// sees a bucket either fully created or not at all.
pub struct BucketStore {
    /// Root storage directory
    root: PathBuf,
    /// Consulted for emptiness before deletion
    objects: Arc<dyn ObjectStore>,
    /// Notified after a bucket directory is removed
    keys: Arc<dyn KeyRegistry>,
    /// Per-name mutation locks
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl BucketStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub fn open(
        root: impl Into<PathBuf>,
        objects: Arc<dyn ObjectStore>,
        keys: Arc<dyn KeyRegistry>,
    ) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        debug!(root = %root.display(), "Opened bucket store");

        Ok(Self {
            root,
            objects,
            keys,
            locks: DashMap::new(),
        })
    }

    /// Open a store with the filesystem object store and an in-memory key registry
    pub fn open_default(root: impl Into<PathBuf>) -> Result<Self> {
        Self::open(
            root,
            Arc::new(FsObjectStore::new()),
            Arc::new(MemoryKeyRegistry::new()),
        )
    }

    /// Root storage directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory backing the bucket called `name`
    pub fn bucket_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Create a new bucket
    #[instrument(skip(self))]
    pub fn create_bucket(&self, name: &str) -> Result<Bucket> {
        validate_bucket_name(name)?;

        let lock = self.name_lock(name);
        let _guard = lock.lock();

        let path = self.bucket_path(name);
        if dir_exists(&path)? {
            return Err(CoreError::BucketAlreadyExists(name.to_string()));
        }

        fs::create_dir(&path)?;
        let bucket = load_bucket(name, path)?;

        info!(bucket = name, "Created bucket");
        Ok(bucket)
    }

    /// Check if bucket exists
    pub fn does_bucket_exist(&self, name: &str) -> Result<bool> {
        if !is_valid_bucket_name(name) {
            return Ok(false);
        }
        dir_exists(&self.bucket_path(name))
    }

    /// Get a bucket, or `None` if it does not exist
    pub fn get_bucket(&self, name: &str) -> Result<Option<Bucket>> {
        if !is_valid_bucket_name(name) {
            return Ok(None);
        }

        match load_bucket(name, self.bucket_path(name)) {
            Ok(bucket) => Ok(Some(bucket)),
            Err(CoreError::BucketNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// List all buckets, sorted by name
    pub fn list_buckets(&self) -> Result<Vec<Bucket>> {
        let mut buckets = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }

            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                debug!(entry = ?entry.file_name(), "Skipping non UTF-8 entry");
                continue;
            };
            if name.starts_with('.') || !is_valid_bucket_name(&name) {
                debug!(entry = %name, "Skipping non-bucket entry");
                continue;
            }

            match load_bucket(&name, entry.path()) {
                Ok(bucket) => buckets.push(bucket),
                // Deleted between read_dir and stat
                Err(CoreError::BucketNotFound(_)) => continue,
                Err(e) => return Err(e),
            }
        }

        buckets.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(buckets)
    }

    /// Delete a bucket
    ///
    /// Returns `false` if the bucket does not exist. Fails with
    /// [`CoreError::BucketNotEmpty`] without touching anything if the object
    /// store still reports objects for it.
    #[instrument(skip(self))]
    pub fn delete_bucket(&self, name: &str) -> Result<bool> {
        if !is_valid_bucket_name(name) {
            return Ok(false);
        }

        let lock = self.name_lock(name);
        let _guard = lock.lock();

        let bucket = match load_bucket(name, self.bucket_path(name)) {
            Ok(bucket) => bucket,
            Err(CoreError::BucketNotFound(_)) => return Ok(false),
            Err(e) => return Err(e),
        };

        let objects = self.objects.list_objects(&bucket)?;
        if !objects.is_empty() {
            return Err(CoreError::BucketNotEmpty(name.to_string()));
        }

        fs::remove_dir_all(bucket.path())?;

        if let Err(e) = self.keys.remove_key(name) {
            warn!(bucket = name, error = %e, "Bucket removed but key cleanup failed");
            return Err(e);
        }

        info!(bucket = name, "Deleted bucket");
        Ok(true)
    }

    // Entries are never evicted: a new mutex for a name that still has
    // waiters on the old one would let two mutations run at once.
    fn name_lock(&self, name: &str) -> Arc<Mutex<()>> {
        let entry = self
            .locks
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())));
        Arc::clone(entry.value())
    }
}

fn dir_exists(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

fn load_bucket(name: &str, path: PathBuf) -> Result<Bucket> {
    let meta = match fs::metadata(&path) {
        Ok(meta) if meta.is_dir() => meta,
        Ok(_) => return Err(CoreError::BucketNotFound(name.to_string())),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(CoreError::BucketNotFound(name.to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    // Not every filesystem records birth time
    let created = meta.created().or_else(|_| meta.modified())?;

    Ok(Bucket::new(name.to_string(), DateTime::<Utc>::from(created), path))
}
