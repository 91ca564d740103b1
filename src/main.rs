#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use list_order_daemon::cors::{build_cors_layer, normalize_origins, DEFAULT_CORS_ORIGINS};
use list_order_daemon::logging::{self, init_logging, parse_rotation, LogConfig, LOG_FILENAME};
use list_order_daemon::user_config::{self, UserConfig};
use list_order_daemon::utils::get_data_dir;
use list_order_daemon::{build_router, ListService};
use tokio::net::TcpListener;
use tracing::{info, warn};

const DEFAULT_ADDR: &str = "127.0.0.1:4000";

/// List Order Daemon - searchable, reorderable, multi-select list service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, env = "LIST_ORDER_ADDR", default_value = DEFAULT_ADDR)]
    addr: String,

    /// Comma-separated list of allowed CORS origins.
    /// Use "*" to allow all origins.
    #[arg(
        long,
        env = "LIST_ORDER_CORS_ORIGINS",
        default_value = DEFAULT_CORS_ORIGINS,
        value_delimiter = ','
    )]
    cors_origins: Vec<String>,

    /// Number of items to seed (overrides `[store] item_count`)
    #[arg(long, env = "LIST_ORDER_ITEM_COUNT")]
    item_count: Option<u32>,

    /// Enable JSON log format (for production/log aggregation)
    #[arg(long, env = "LIST_ORDER_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "LIST_ORDER_LOG_ROTATION", default_value = "daily")]
    log_rotation: String,

    /// Custom log directory (default: ~/.list-order/logs)
    #[arg(long, env = "LIST_ORDER_LOG_DIR")]
    log_dir: Option<String>,
}

fn report_bind_error(addr: SocketAddr, log_file: &Path, e: &std::io::Error) {
    if e.kind() == std::io::ErrorKind::AddrInUse {
        eprintln!();
        eprintln!("Error: Failed to start server - address {addr} is already in use");
        eprintln!();
        eprintln!("Another instance of list-order-daemon may already be running.");
        eprintln!("  Use a different port:        list-order-daemon --addr 127.0.0.1:4001");
        eprintln!("  Check what's using the port: lsof -i :{}", addr.port());
    } else {
        eprintln!();
        eprintln!("Error: Failed to start server: {e}");
    }
    eprintln!();
    eprintln!("Logs: {}", log_file.display());
    eprintln!();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal, stopping server...");
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    let log_dir = args
        .log_dir
        .map_or_else(|| get_data_dir().join("logs"), PathBuf::from);
    let log_file = log_dir.join(LOG_FILENAME);
    logging::set_log_file_path(log_file.to_string_lossy().to_string());

    let log_config = LogConfig {
        log_dir,
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..Default::default()
    };

    if let Err(e) = init_logging(log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    // User-level config (~/.list-order/config.toml); file is optional.
    let mut config = user_config::load_user_config().unwrap_or_else(|e| {
        warn!("Failed to load user config, using defaults: {e}");
        UserConfig::default()
    });
    if let Some(count) = args.item_count {
        config.store.item_count = count;
    }

    let addr: SocketAddr = args.addr.parse()?;

    let cors_origins = normalize_origins(&args.cors_origins);
    info!("CORS origins: {}", cors_origins.join(", "));
    let cors = build_cors_layer(cors_origins);

    let service = Arc::new(ListService::new(&config));
    let app = build_router(service, cors);

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            report_bind_error(addr, &log_file, &e);
            return Err(e.into());
        }
    };

    info!("Starting list-order daemon on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("List-order daemon stopped");
    Ok(())
}
