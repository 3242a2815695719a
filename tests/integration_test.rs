//! Integration tests for the s3mock bucket store
//!
//! These exercise the store the way the gateway uses it, across store
//! instances sharing one root directory.

use s3mock_core::{
    BucketStore, Buckets, CoreError, FsObjectStore, KeyRegistry, MemoryKeyRegistry, Tagging,
};
use std::collections::HashSet;
use std::fs;
use std::sync::{Arc, Barrier};
use std::thread;
use tempfile::TempDir;

/// Buckets outlive the store instance that created them
#[test]
fn test_buckets_survive_restart() {
    let dir = TempDir::new().unwrap();

    {
        let store = BucketStore::open_default(dir.path()).unwrap();
        store.create_bucket("durable-bucket").unwrap();
    }

    let reopened = BucketStore::open_default(dir.path()).unwrap();
    assert!(reopened.does_bucket_exist("durable-bucket").unwrap());
    assert!(reopened.get_bucket("durable-bucket").unwrap().is_some());

    let err = reopened.create_bucket("durable-bucket").unwrap_err();
    assert!(matches!(err, CoreError::BucketAlreadyExists(_)));
}

/// Non-ASCII names round-trip through create, get and list
#[test]
fn test_should_hold_all_buckets() {
    let dir = TempDir::new().unwrap();
    let store = BucketStore::open_default(dir.path()).unwrap();
    let names = ["myNüwNämeÄins", "myNüwNämeZwöei", "myNüwNämeDrü"];

    for name in names {
        assert_eq!(store.create_bucket(name).unwrap().name(), name);
        assert_eq!(store.get_bucket(name).unwrap().unwrap().name(), name);
    }

    let buckets = store.list_buckets().unwrap();
    assert_eq!(buckets.len(), 3);

    let listed: HashSet<_> = buckets.iter().map(|b| b.name().to_string()).collect();
    let expected: HashSet<_> = names.iter().map(|n| n.to_string()).collect();
    assert_eq!(listed, expected);

    // Repeated listing with unchanged state is stable
    assert_eq!(store.list_buckets().unwrap(), buckets);
}

/// Buckets created through one store are visible through another on the same root
#[test]
fn test_two_stores_share_one_root() {
    let dir = TempDir::new().unwrap();
    let a = BucketStore::open_default(dir.path()).unwrap();
    let b = BucketStore::open_default(dir.path()).unwrap();

    a.create_bucket("shared-bucket").unwrap();
    assert!(b.does_bucket_exist("shared-bucket").unwrap());

    assert!(b.delete_bucket("shared-bucket").unwrap());
    assert!(!a.does_bucket_exist("shared-bucket").unwrap());
}

/// Objects written into a bucket directory block its deletion
#[test]
fn test_bucket_with_objects_cannot_be_deleted() {
    let dir = TempDir::new().unwrap();
    let keys = Arc::new(MemoryKeyRegistry::new());
    let store = BucketStore::open(
        dir.path(),
        Arc::new(FsObjectStore::new()),
        Arc::clone(&keys) as Arc<dyn KeyRegistry>,
    )
    .unwrap();

    let bucket = store.create_bucket("busy-bucket").unwrap();
    keys.register_key("busy-bucket", "arn:aws:kms:us-east-1:1:key/busy");
    fs::write(bucket.path().join("report.csv"), b"a,b,c").unwrap();

    let err = store.delete_bucket("busy-bucket").unwrap_err();
    assert!(matches!(err, CoreError::BucketNotEmpty(_)));
    assert!(store.does_bucket_exist("busy-bucket").unwrap());
    assert!(keys.has_keys("busy-bucket"));

    fs::remove_file(bucket.path().join("report.csv")).unwrap();
    assert!(store.delete_bucket("busy-bucket").unwrap());
    assert!(!keys.has_keys("busy-bucket"));
}

/// Concurrent creates of distinct names all succeed
#[test]
fn test_concurrent_distinct_creates() {
    const THREADS: usize = 8;
    let dir = TempDir::new().unwrap();
    let store = Arc::new(BucketStore::open_default(dir.path()).unwrap());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                store.create_bucket(&format!("bucket-{i}"))
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }
    assert_eq!(store.list_buckets().unwrap().len(), THREADS);
}

/// Listing renders as a `Buckets` document and tags parse from headers
#[test]
fn test_response_model_from_store() {
    let dir = TempDir::new().unwrap();
    let store = BucketStore::open_default(dir.path()).unwrap();
    store.create_bucket("render-b").unwrap();
    store.create_bucket("render-a").unwrap();

    let xml = Buckets::from_buckets(&store.list_buckets().unwrap())
        .to_xml()
        .unwrap();
    let a = xml.find("<Name>render-a</Name>").unwrap();
    let b = xml.find("<Name>render-b</Name>").unwrap();
    assert!(xml.contains("<Buckets><Bucket>"));
    assert!(a < b);

    let tagging = Tagging::from_header("env=test").unwrap();
    assert!(tagging.to_xml().unwrap().contains("<Key>env</Key><Value>test</Value>"));
}
