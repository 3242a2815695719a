//! # s3mock Core
//!
//! Bucket store for the s3mock local S3 stand-in.
//!
//! This crate provides:
//! - **Bucket Store**: durable bucket registry, one directory per bucket
//! - **Name Validation**: pure bucket name checks
//! - **Collaborators**: object store and key registry seams used on delete
//! - **Wire Entities**: `Buckets`, `Tag` and `Tagging` XML shapes
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              S3 API Layer               │
//! ├─────────────────────────────────────────┤
//! │   Bucket Store   │   Response Model     │
//! ├──────────────────┴──────────────────────┤
//! │  Object Store   │   Key Registry        │
//! ├─────────────────────────────────────────┤
//! │        Root storage directory           │
//! └─────────────────────────────────────────┘
//! ```

pub mod bucket;
pub mod dto;
pub mod error;
pub mod kms;
pub mod object;
pub mod validation;

pub use bucket::{Bucket, BucketStore};
pub use dto::{BucketEntry, Buckets, ListAllMyBucketsResult, Owner, Tag, TagSet, Tagging};
pub use error::{CoreError, Result};
pub use kms::{KeyRegistry, MemoryKeyRegistry};
pub use object::{FsObjectStore, ObjectStore};
pub use validation::{is_valid_bucket_name, validate_bucket_name};
