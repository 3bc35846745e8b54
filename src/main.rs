//! MCP Server Entry Point
//!
//! This is the main entry point for the MCP server. It initializes logging,
//! loads configuration, and starts the server with the configured transport.
//! Any startup failure terminates the process with a non-zero exit code.

use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use zenblocks_mcp_server::core::config::LoggingConfig;
use zenblocks_mcp_server::core::{Config, TransportService, ZenblocksServer};
use zenblocks_mcp_server::domains::github::GithubClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging before loading configuration; Config::from_env
    // emits operator messages that would otherwise be dropped.
    dotenvy::dotenv().ok();
    init_logging(&LoggingConfig::level_from_env());

    // Load configuration from environment
    let config = Config::from_env();

    info!("Starting {} v{}", config.server.name, config.server.version);

    // GitHub collaborator for the upstream repository; report the current
    // rate-limit budget without blocking startup.
    let github = GithubClient::new(config.credentials.github_token.clone())?;
    tokio::spawn(async move {
        match github.rate_limit().await {
            Ok(rate) => info!(
                "GitHub rate limit: {}/{} requests remaining",
                rate.remaining, rate.limit
            ),
            Err(e) => warn!("Could not query GitHub rate limit: {}", e),
        }
    });

    // Create the MCP server
    let server = ZenblocksServer::new(config.clone())?;

    info!("Server initialized");

    // Create and run the transport service
    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level and format. Output goes
/// to stderr; stdout carries the JSON-RPC stream.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
