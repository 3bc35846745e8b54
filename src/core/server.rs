//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the catalog-driven dispatchers.
//!
//! ## Composition
//!
//! `ZenblocksServer::new` builds both catalogs (failing fast on duplicate
//! identifiers), shares one `DocStore` between the resource service and the
//! tool router, and advertises the `resources` and `tools` capability
//! groups. Everything registered comes from the catalogs; adding a document
//! does not require modifying this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::core::error::Error;
use crate::domains::docs::DocStore;
use crate::domains::resources::{ResourceService, resource_catalog};
use crate::domains::tools::{build_tool_router, tool_catalog};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and serves
/// the resource and tool catalogs.
#[derive(Clone)]
pub struct ZenblocksServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl ZenblocksServer {
    /// Create a new server with the given configuration.
    ///
    /// Fails only on invalid catalog contents, which is a startup-time
    /// configuration error.
    pub fn new(config: Config) -> Result<Self, Error> {
        let config = Arc::new(config);
        let store = Arc::new(DocStore::new(config.docs.base_path.clone()));

        let resource_service = Arc::new(ResourceService::new(resource_catalog()?, store.clone()));
        let tool_router = build_tool_router(tool_catalog()?, store);

        Ok(Self {
            config,
            resource_service,
            tool_router,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for ZenblocksServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            instructions: Some(
                "ZenBlocks documentation server. Resources expose the documentation \
                 by zenblocks:// URI; tools return the same documents as text. \
                 Run zenblocks-scaffolding before the other ZenBlocks tools."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_resources()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        Ok(ListResourcesResult {
            resources: self.resource_service.list_resources(),
            next_cursor: None,
            meta: None,
        })
    }

    /// Reading a resource never yields a protocol error: unknown URIs and
    /// unreadable documents come back as content-level fallback messages.
    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        Ok(self.resource_service.read_resource(&request.uri).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config::default()
    }

    #[test]
    fn test_server_composition() {
        let server = ZenblocksServer::new(test_config()).unwrap();
        assert_eq!(server.name(), "zenblocks-mcp-server");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_capabilities_advertised() {
        let server = ZenblocksServer::new(test_config()).unwrap();
        let info = server.get_info();
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.tools.is_some());
        assert_eq!(info.server_info.name, "zenblocks-mcp-server");
    }

    #[test]
    fn test_composition_is_idempotent() {
        let first = ZenblocksServer::new(test_config()).unwrap();
        let second = ZenblocksServer::new(test_config()).unwrap();

        let mut first_tools: Vec<_> = first
            .tool_router
            .list_all()
            .iter()
            .map(|t| t.name.to_string())
            .collect();
        let mut second_tools: Vec<_> = second
            .tool_router
            .list_all()
            .iter()
            .map(|t| t.name.to_string())
            .collect();
        first_tools.sort();
        second_tools.sort();
        assert_eq!(first_tools, second_tools);
        assert_eq!(first_tools.len(), 6);

        let first_resources: Vec<_> = first
            .resource_service
            .list_resources()
            .iter()
            .map(|r| r.raw.uri.clone())
            .collect();
        let second_resources: Vec<_> = second
            .resource_service
            .list_resources()
            .iter()
            .map(|r| r.raw.uri.clone())
            .collect();
        assert_eq!(first_resources, second_resources);
    }
}
