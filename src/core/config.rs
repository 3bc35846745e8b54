//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Document store configuration.
    pub docs: DocsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the document store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Base directory holding the markdown documents. Fixed at startup;
    /// request handlers never influence it.
    pub base_path: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl LoggingConfig {
    /// Log level straight from the environment.
    ///
    /// The subscriber must be installed before [`Config::from_env`] runs,
    /// or the messages emitted while loading configuration are dropped.
    pub fn level_from_env() -> String {
        std::env::var("MCP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
    }
}

/// Configuration for external API credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// GitHub personal access token for the upstream repository client.
    /// Optional: absent means unauthenticated, rate-limited access.
    pub github_token: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "github_token",
                &self.github_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            base_path: default_docs_dir(),
        }
    }
}

/// The document directory shipped alongside the installation.
///
/// Prefers a `docs/` directory next to the executable; falls back to the
/// crate's own `docs/` for development runs.
fn default_docs_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("docs")))
        .filter(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("docs"))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "zenblocks-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            docs: DocsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_DOCS_DIR`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(docs_dir) = std::env::var("MCP_DOCS_DIR") {
            config.docs.base_path = PathBuf::from(docs_dir);
            info!("Document directory overridden: {:?}", config.docs.base_path);
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        // Load GitHub token; the original env var name is kept as a fallback
        let token = std::env::var("MCP_GITHUB_TOKEN")
            .or_else(|_| std::env::var("GITHUB_PERSONAL_ACCESS_TOKEN"))
            .ok();
        if token.is_some() {
            config.credentials.github_token = token;
            info!("GitHub token loaded from environment");
        } else {
            warn!(
                "No GitHub token set. For higher rate limits against the upstream \
                 repository, set MCP_GITHUB_TOKEN."
            );
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_github_token_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_GITHUB_TOKEN", "ghp_test_12345");
        }
        let config = Config::from_env();
        assert_eq!(
            config.credentials.github_token.as_deref(),
            Some("ghp_test_12345")
        );
        unsafe {
            std::env::remove_var("MCP_GITHUB_TOKEN");
        }
    }

    #[test]
    fn test_github_token_absent_is_not_fatal() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_GITHUB_TOKEN");
            std::env::remove_var("GITHUB_PERSONAL_ACCESS_TOKEN");
        }
        let config = Config::from_env();
        assert!(config.credentials.github_token.is_none());
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            github_token: Some("super_secret_token".to_string()),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
    }

    #[test]
    fn test_default_server_identity() {
        let config = Config::default();
        assert_eq!(config.server.name, "zenblocks-mcp-server");
        assert_eq!(config.server.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_log_level_readable_before_config_loads() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_LOG_LEVEL");
        }
        assert_eq!(LoggingConfig::level_from_env(), "info");

        unsafe {
            std::env::set_var("MCP_LOG_LEVEL", "debug");
        }
        assert_eq!(LoggingConfig::level_from_env(), "debug");
        unsafe {
            std::env::remove_var("MCP_LOG_LEVEL");
        }
    }

    #[test]
    fn test_docs_dir_override() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_DOCS_DIR", "/tmp/custom-docs");
        }
        let config = Config::from_env();
        assert_eq!(config.docs.base_path, PathBuf::from("/tmp/custom-docs"));
        unsafe {
            std::env::remove_var("MCP_DOCS_DIR");
        }
    }
}
