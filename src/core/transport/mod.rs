//! Transport layer for the MCP server.
//!
//! STDIO is the only supported transport: the host delivers JSON-RPC over
//! stdin/stdout and all logging goes to stderr. The transport handles the
//! connection lifecycle and delegates message processing to the MCP server
//! handler.

mod config;
mod error;
mod service;
mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;
