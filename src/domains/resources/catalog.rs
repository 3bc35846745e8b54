//! The static resource catalog.
//!
//! Four ZenBlocks documentation resources, each identified by a
//! `zenblocks://` URI and backed by a markdown file in the document
//! directory.

use crate::domains::docs::{Catalog, CatalogEntry, CatalogError};

const RESOURCE_ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        identifier: "zenblocks://overview",
        filename: "overview.md",
        title: "Overview",
        description: "An overview of how to use Zenblocks",
        mime_type: "text/markdown",
    },
    CatalogEntry {
        identifier: "zenblocks://important",
        filename: "important.md",
        title: "Important Information",
        description: "Key details about using Zenblocks",
        mime_type: "text/markdown",
    },
    CatalogEntry {
        identifier: "zenblocks://examples",
        filename: "examples.md",
        title: "Examples",
        description: "Code examples for using Zenblocks",
        mime_type: "text/markdown",
    },
    CatalogEntry {
        identifier: "zenblocks://documentation",
        filename: "documentation.md",
        title: "Documentation",
        description: "Comprehensive guide to using Zenblocks",
        mime_type: "text/markdown",
    },
];

/// Build the resource catalog, validating identifier uniqueness.
pub fn resource_catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(RESOURCE_ENTRIES)
}

/// Registration key for a resource entry, derived from its backing filename.
///
/// E.g. `overview.md` registers as `zenblocks:resources:overview`.
pub fn registration_key(entry: &CatalogEntry) -> String {
    format!("zenblocks:resources:{}", entry.slug())
}
