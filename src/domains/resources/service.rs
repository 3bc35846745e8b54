//! Resource service implementation.
//!
//! The ResourceService serves resource listings and reads straight from the
//! catalog and the document store. Read failures never surface as protocol
//! errors: an unknown URI or an unreadable backing file resolves to a
//! content-level fallback message so the client always gets a well-formed
//! envelope.

use std::sync::Arc;

use rmcp::model::{AnnotateAble, RawResource, ReadResourceResult, Resource, ResourceContents};
use tracing::{error, info};

use super::catalog::registration_key;
use crate::domains::docs::{Catalog, DocStore};

/// Payload returned when the requested URI has no catalog entry.
const NOT_FOUND_TEXT: &str = "Resource not found.";

/// Payload returned when the backing document cannot be read.
const LOAD_ERROR_TEXT: &str = "Error loading resource content.";

/// Service for listing and reading catalog-backed resources.
pub struct ResourceService {
    catalog: Catalog,
    store: Arc<DocStore>,
}

impl ResourceService {
    /// Create a new ResourceService over the given catalog and store.
    pub fn new(catalog: Catalog, store: Arc<DocStore>) -> Self {
        info!("Initializing ResourceService with {} resources", catalog.len());
        Self { catalog, store }
    }

    /// List all resources, in catalog declaration order.
    pub fn list_resources(&self) -> Vec<Resource> {
        self.catalog
            .entries()
            .iter()
            .map(|entry| {
                let mut raw = RawResource::new(entry.identifier, registration_key(entry));
                raw.title = Some(entry.title.to_string());
                raw.description = Some(entry.description.to_string());
                raw.mime_type = Some(entry.mime_type.to_string());
                raw.no_annotation()
            })
            .collect()
    }

    /// Read a resource by URI.
    ///
    /// Always produces a single-item text envelope: the document content on
    /// success, or a fallback message when the URI is unknown or the backing
    /// file cannot be read.
    pub async fn read_resource(&self, uri: &str) -> ReadResourceResult {
        let (text, mime_type) = match self.catalog.find(uri) {
            Some(entry) => match self.store.load(entry.filename).await {
                Ok(content) => (content, entry.mime_type),
                Err(e) => {
                    error!("Error reading resource {}: {}", uri, e);
                    (LOAD_ERROR_TEXT.to_string(), entry.mime_type)
                }
            },
            None => (NOT_FOUND_TEXT.to_string(), "text/markdown"),
        };

        ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: Some(mime_type.to_string()),
                text,
                meta: None,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::resources::resource_catalog;
    use std::fs;
    use tempfile::TempDir;

    fn service_with_docs(files: &[(&str, &str)]) -> (TempDir, ResourceService) {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        let store = Arc::new(DocStore::new(dir.path()));
        let service = ResourceService::new(resource_catalog().unwrap(), store);
        (dir, service)
    }

    fn text_of(result: &ReadResourceResult) -> &str {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text,
            _ => panic!("Expected text contents"),
        }
    }

    #[tokio::test]
    async fn test_list_resources_in_catalog_order() {
        let (_dir, service) = service_with_docs(&[]);

        let resources = service.list_resources();
        assert_eq!(resources.len(), 4);
        assert_eq!(resources[0].raw.uri, "zenblocks://overview");
        assert_eq!(resources[0].raw.name, "zenblocks:resources:overview");
        assert_eq!(resources[3].raw.uri, "zenblocks://documentation");
        assert_eq!(
            resources[1].raw.mime_type.as_deref(),
            Some("text/markdown")
        );
    }

    #[tokio::test]
    async fn test_read_existing_resource_verbatim() {
        let content = "# Overview\n\nHow to use ZenBlocks.\n";
        let (_dir, service) = service_with_docs(&[("overview.md", content)]);

        let result = service.read_resource("zenblocks://overview").await;
        assert_eq!(text_of(&result), content);

        match &result.contents[0] {
            ResourceContents::TextResourceContents { uri, mime_type, .. } => {
                assert_eq!(uri, "zenblocks://overview");
                assert_eq!(mime_type.as_deref(), Some("text/markdown"));
            }
            _ => panic!("Expected text contents"),
        }
    }

    #[tokio::test]
    async fn test_read_unknown_uri_soft_fallback() {
        let (_dir, service) = service_with_docs(&[]);

        let result = service.read_resource("zenblocks://nonexistent").await;
        assert_eq!(text_of(&result), "Resource not found.");
    }

    #[tokio::test]
    async fn test_read_missing_backing_file_soft_fallback() {
        // Catalog knows the URI but the file is absent on disk.
        let (_dir, service) = service_with_docs(&[]);

        let result = service.read_resource("zenblocks://important").await;
        assert_eq!(text_of(&result), "Error loading resource content.");
    }
}
