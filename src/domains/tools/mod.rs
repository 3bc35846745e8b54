//! Tools domain module.
//!
//! Every entry in the tool catalog becomes one parameterless MCP tool that
//! returns its backing document as a text payload. Tools are registered
//! lazily: the document is read on each invocation, so one missing file
//! never breaks registration or unrelated tools.
//!
//! ## Architecture
//!
//! - `catalog.rs` - the static tool catalog (flat tool names)
//! - `router.rs` - builds the rmcp `ToolRouter` from the catalog
//! - `registry.rs` - name listing and direct dispatch
//! - `error.rs` - tool-specific error types
//!
//! ## Adding a New Tool
//!
//! Add an entry to `TOOL_ENTRIES` in `catalog.rs` and drop the backing
//! markdown file into the document directory. The router picks it up.

mod catalog;
mod error;
mod registry;
mod router;

pub use catalog::tool_catalog;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
