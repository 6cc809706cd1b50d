//! Recipes Server - Main entry point

use anyhow::Result;
use recipes_common::logging::{init_logging, LogConfig};
use tracing::info;

use recipes_server::{api, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before logging so LOG_* variables are picked up
    dotenvy::dotenv().ok();

    let log_config = LogConfig::builder()
        .log_file_prefix("recipes-server")
        .filter_directives("recipes_server=debug,tower_http=debug,sqlx=info")
        .build()
        .merge_env()?;

    let _log_guard = init_logging(&log_config)?;

    info!("Starting Recipes Server");

    let config = Config::load()?;
    info!(
        backend = %config.store,
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );

    api::serve(config).await
}
