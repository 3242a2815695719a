//! Gateway configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Gateway server configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Root storage directory; one subdirectory per bucket
    pub root_dir: PathBuf,
    /// Buckets created at startup
    pub initial_buckets: Vec<String>,
    /// Keep the root directory when the server shuts down
    pub retain_files_on_exit: bool,
    /// Maximum request body size (bytes)
    pub max_body_size: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 9090,
            root_dir: default_root_dir(),
            initial_buckets: Vec::new(),
            retain_files_on_exit: false,
            max_body_size: 64 * 1024 * 1024, // 64 MB
        }
    }
}

impl GatewayConfig {
    /// Get the bind address
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Fresh directory below the system temp dir
pub fn default_root_dir() -> PathBuf {
    std::env::temp_dir().join(format!("s3mock-{}", uuid::Uuid::new_v4()))
}

/// Split a comma separated bucket list, dropping blanks
pub fn parse_bucket_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
