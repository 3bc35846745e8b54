//! Tool Router - builds the rmcp ToolRouter from the tool catalog.
//!
//! One route is created per catalog entry. Routes are pure functions of the
//! catalog: building the router twice yields the same set of tool names.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter, cached_schema_for_type};
use rmcp::model::{CallToolResult, Content, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, warn};

use crate::domains::docs::{Catalog, CatalogEntry, DocStore};

/// Documentation tools take no arguments.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct NoArgs {}

/// Build the tool router with one route per catalog entry.
pub fn build_tool_router<S>(catalog: Catalog, store: Arc<DocStore>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    let mut router = ToolRouter::new();
    for entry in catalog.entries() {
        router = router.with_route(doc_tool_route(entry, store.clone()));
    }
    router
}

/// Tool metadata for a catalog entry.
pub(crate) fn doc_tool(entry: &'static CatalogEntry) -> Tool {
    Tool {
        name: entry.identifier.into(),
        description: Some(entry.description.into()),
        input_schema: cached_schema_for_type::<NoArgs>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: Some(entry.title.into()),
    }
}

/// Serve a catalog entry's backing document as a tool result.
///
/// The document is read on every call. A load failure is contained here: it
/// becomes an error payload naming the file and the cause, never a protocol
/// fault.
pub(crate) async fn serve_document(entry: &CatalogEntry, store: &DocStore) -> CallToolResult {
    info!("Tool called: {}", entry.identifier);

    match store.load(entry.filename).await {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => {
            warn!("Tool {} failed to load its document: {}", entry.identifier, e);
            CallToolResult::error(vec![Content::text(format!(
                "Error loading {}: {}",
                entry.filename, e
            ))])
        }
    }
}

fn doc_tool_route<S>(entry: &'static CatalogEntry, store: Arc<DocStore>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(doc_tool(entry), move |_ctx: ToolCallContext<'_, S>| {
        let store = store.clone();
        async move { Ok(serve_document(entry, &store).await) }.boxed()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::tool_catalog;
    use std::fs;
    use tempfile::TempDir;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let store = Arc::new(DocStore::new("docs"));
        let router: ToolRouter<TestServer> = build_tool_router(tool_catalog().unwrap(), store);
        let tools = router.list_all();
        assert_eq!(tools.len(), 6);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"zenblocks-scaffolding"));
        assert!(names.contains(&"zenblocks-create-php"));
        assert!(names.contains(&"zenblocks-create-css"));
        assert!(names.contains(&"zenblocks-create-json"));
        assert!(names.contains(&"zenblocks-create-js"));
        assert!(names.contains(&"zenblocks-quality-assurance"));
    }

    #[test]
    fn test_build_router_is_idempotent() {
        let catalog = tool_catalog().unwrap();
        let store = Arc::new(DocStore::new("docs"));

        let first: ToolRouter<TestServer> = build_tool_router(catalog, store.clone());
        let second: ToolRouter<TestServer> = build_tool_router(catalog, store);

        let mut first_names: Vec<_> =
            first.list_all().iter().map(|t| t.name.to_string()).collect();
        let mut second_names: Vec<_> =
            second.list_all().iter().map(|t| t.name.to_string()).collect();
        first_names.sort();
        second_names.sort();
        assert_eq!(first_names, second_names);
    }

    #[tokio::test]
    async fn test_serve_document_returns_content() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("scaffolding.md"), "# Scaffolding\n").unwrap();
        let store = DocStore::new(dir.path());

        let catalog = tool_catalog().unwrap();
        let entry = catalog.find("zenblocks-scaffolding").unwrap();

        let result = serve_document(entry, &store).await;
        assert!(result.is_error.is_none() || !result.is_error.unwrap());

        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        assert_eq!(text, "# Scaffolding\n");
    }

    #[tokio::test]
    async fn test_serve_document_missing_file_contained() {
        let dir = TempDir::new().unwrap();
        let store = DocStore::new(dir.path());

        let catalog = tool_catalog().unwrap();
        let entry = catalog.find("zenblocks-create-css").unwrap();

        let result = serve_document(entry, &store).await;
        assert!(result.is_error.unwrap_or(false));

        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        assert!(text.contains("create-css.md"));
    }
}
