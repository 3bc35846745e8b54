//! ZenBlocks MCP Server Library
//!
//! This crate serves the ZenBlocks documentation over the Model Context
//! Protocol: a fixed catalog of markdown documents exposed both as
//! URI-addressed resources and as parameterless tools.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **docs**: The document catalogs and the filesystem-backed store
//!   - **resources**: URI-addressed resource dispatch over the catalog
//!   - **tools**: Parameterless documentation tools over the catalog
//!   - **github**: Authenticated client for the upstream repository
//!
//! # Example
//!
//! ```rust,no_run
//! use zenblocks_mcp_server::{core::Config, core::ZenblocksServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = ZenblocksServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, Result, ZenblocksServer};
