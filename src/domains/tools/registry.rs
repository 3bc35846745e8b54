//! Tool Registry - name listing and direct dispatch.
//!
//! The registry mirrors the router: both are built from the same catalog, so
//! the set of names they expose is identical. The router is what rmcp drives
//! over the wire; the registry is the direct-dispatch surface for callers
//! that hold the library rather than a transport - embedders, future
//! non-stdio frontends, and the end-to-end test suite.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use tracing::warn;

use super::error::ToolError;
use super::router::{doc_tool, serve_document};
use crate::domains::docs::{Catalog, DocStore};

/// Tool registry over the tool catalog.
///
/// Direct-dispatch counterpart to [`build_tool_router`](crate::domains::tools::build_tool_router):
/// same catalog, same tool set, callable without an rmcp transport.
pub struct ToolRegistry {
    catalog: Catalog,
    store: Arc<DocStore>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(catalog: Catalog, store: Arc<DocStore>) -> Self {
        Self { catalog, store }
    }

    /// Get all tool names, in catalog order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.catalog.entries().iter().map(|e| e.identifier).collect()
    }

    /// Get all tools as Tool models (metadata), in catalog order.
    pub fn get_all_tools(&self) -> Vec<Tool> {
        self.catalog.entries().iter().map(doc_tool).collect()
    }

    /// Call a tool by name.
    ///
    /// Unknown names are a dispatch error; load failures of known tools are
    /// contained in the returned result payload.
    pub async fn call_tool(&self, name: &str) -> Result<CallToolResult, ToolError> {
        let Some(entry) = self.catalog.find(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };
        Ok(serve_document(entry, &self.store).await)
    }
}
