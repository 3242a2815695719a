//! # s3mock Gateway
//!
//! Local S3-compatible endpoint backed by the s3mock bucket store.
//!
//! This crate provides:
//! - **S3 API**: ListBuckets, CreateBucket, HeadBucket, DeleteBucket
//! - **Configuration**: storage root, initial buckets, retention on exit
//! - **Lifecycle**: startup bucket seeding and root cleanup on shutdown
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                   HTTP Clients                      │
//! │           (boto3, AWS SDK, curl, etc.)              │
//! └─────────────────────────┬───────────────────────────┘
//!                           │
//! ┌─────────────────────────▼───────────────────────────┐
//! │                  s3mock Gateway                     │
//! ├─────────────────────────────────────────────────────┤
//! │     Request ID │ Request Logging │ CORS │ Trace     │
//! ├─────────────────────────────────────────────────────┤
//! │               S3 API Handlers                       │
//! ├─────────────────────────────────────────────────────┤
//! │                  s3mock-core                        │
//! │           (Bucket Store, wire entities)             │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::GatewayConfig;
pub use error::{ApiError, S3ErrorCode};
pub use server::{run_server, run_server_with_shutdown};
pub use state::AppState;
