//! s3mock Gateway - local S3-compatible bucket store

use clap::Parser;
use s3mock_cli::{GatewayConfig, config::parse_bucket_list, run_server};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "s3mock-gateway")]
#[command(about = "Local S3-compatible endpoint backed by the filesystem")]
#[command(version)]
struct Args {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "S3MOCK_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "9090", env = "S3MOCK_PORT")]
    port: u16,

    /// Root storage directory (defaults to a fresh temp directory)
    #[arg(long, env = "S3MOCK_ROOT")]
    root: Option<PathBuf>,

    /// Comma separated buckets to create at startup
    #[arg(long, default_value = "", env = "S3MOCK_INITIAL_BUCKETS")]
    initial_buckets: String,

    /// Keep the root directory on shutdown
    #[arg(long, env = "S3MOCK_RETAIN_FILES_ON_EXIT")]
    retain_files_on_exit: bool,

    /// Enable debug logging
    #[arg(short, long, env = "S3MOCK_DEBUG")]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "s3mock_cli={level},s3mock_core={level},tower_http=debug",
                    level = log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting s3mock gateway on {}:{}", args.host, args.port);

    if args.retain_files_on_exit {
        tracing::info!("Storage root will be kept on exit");
    }

    let defaults = GatewayConfig::default();
    let config = GatewayConfig {
        host: args.host,
        port: args.port,
        root_dir: args.root.unwrap_or(defaults.root_dir),
        initial_buckets: parse_bucket_list(&args.initial_buckets),
        retain_files_on_exit: args.retain_files_on_exit,
        max_body_size: defaults.max_body_size,
    };

    run_server(config).await
}
