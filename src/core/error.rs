//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and external dependencies. Per-request failures never reach
//! this type: dispatchers absorb them into content-level payloads. What is
//! left here is startup-time failure and collaborator errors.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid catalog contents detected at startup.
    #[error("Catalog error: {0}")]
    Catalog(#[from] crate::domains::docs::CatalogError),

    /// Error originating from the document store.
    #[error("Docs error: {0}")]
    Docs(#[from] crate::domains::docs::DocsError),

    /// Error originating from tool dispatch.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the GitHub collaborator.
    #[error("GitHub error: {0}")]
    Github(#[from] crate::domains::github::GithubError),

    /// Configuration-related errors. The only class permitted to be fatal.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors from file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
