//! The static tool catalog.
//!
//! Six ZenBlocks documentation tools, each a flat name token backed by a
//! markdown file in the document directory.

use crate::domains::docs::{Catalog, CatalogEntry, CatalogError};

const TOOL_ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        identifier: "zenblocks-scaffolding",
        filename: "scaffolding.md",
        title: "ZenBlocks Scaffolding",
        description: "First tool to use when creating ZenBlocks. This tool MUST be run before any other ZenBlocks tools.",
        mime_type: "text/markdown",
    },
    CatalogEntry {
        identifier: "zenblocks-create-php",
        filename: "create-php.md",
        title: "ZenBlocks PHP template",
        description: "PHP template information for creating ZenBlocks.",
        mime_type: "text/markdown",
    },
    CatalogEntry {
        identifier: "zenblocks-create-css",
        filename: "create-css.md",
        title: "ZenBlocks Create CSS file",
        description: "CSS file information for creating ZenBlocks.",
        mime_type: "text/markdown",
    },
    CatalogEntry {
        identifier: "zenblocks-create-json",
        filename: "create-json.md",
        title: "ZenBlocks Create JSON file",
        description: "JSON block file information for creating ZenBlocks.",
        mime_type: "text/markdown",
    },
    CatalogEntry {
        identifier: "zenblocks-create-js",
        filename: "create-js.md",
        title: "ZenBlocks Create JavaScript file",
        description: "JavaScript file information for creating ZenBlocks.",
        mime_type: "text/markdown",
    },
    CatalogEntry {
        identifier: "zenblocks-quality-assurance",
        filename: "quality-assurance.md",
        title: "ZenBlocks Quality Assurance",
        description: "Quality assurance information for creating ZenBlocks.",
        mime_type: "text/markdown",
    },
];

/// Build the tool catalog, validating identifier uniqueness.
pub fn tool_catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(TOOL_ENTRIES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_builds() {
        let catalog = tool_catalog().unwrap();
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn test_catalog_order() {
        let catalog = tool_catalog().unwrap();
        let names: Vec<_> = catalog.entries().iter().map(|e| e.identifier).collect();
        assert_eq!(
            names,
            vec![
                "zenblocks-scaffolding",
                "zenblocks-create-php",
                "zenblocks-create-css",
                "zenblocks-create-json",
                "zenblocks-create-js",
                "zenblocks-quality-assurance",
            ]
        );
    }

    #[test]
    fn test_find_by_name() {
        let catalog = tool_catalog().unwrap();
        let entry = catalog.find("zenblocks-scaffolding").unwrap();
        assert_eq!(entry.filename, "scaffolding.md");
    }
}
