//! Document catalog types.
//!
//! A catalog is a static table mapping stable external identifiers (resource
//! URIs or tool names) to document metadata. Catalogs are built once at
//! startup from `const` entry tables and never mutated afterwards; all
//! resource and tool registration is driven from them.

use thiserror::Error;

/// A single catalog entry: one identifier backed by one markdown document.
///
/// Multiple entries may share a backing file; identifiers must be unique
/// within their catalog (enforced by [`Catalog::new`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Stable external identifier. A `zenblocks://` URI for resources,
    /// a flat name token for tools.
    pub identifier: &'static str,

    /// Backing filename inside the document directory. Bare filename only,
    /// no path segments.
    pub filename: &'static str,

    /// Human-readable title, passed through to clients unmodified.
    pub title: &'static str,

    /// Human-readable description, passed through to clients unmodified.
    pub description: &'static str,

    /// MIME type of the document content.
    pub mime_type: &'static str,
}

impl CatalogEntry {
    /// Backing filename with its `.md` extension stripped.
    ///
    /// Used to derive registration keys such as `zenblocks:resources:overview`.
    pub fn slug(&self) -> &'static str {
        self.filename
            .strip_suffix(".md")
            .unwrap_or(self.filename)
    }
}

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two entries declare the same identifier. First-match lookup would
    /// silently shadow the second one, so this is rejected at startup.
    #[error("duplicate catalog identifier: {0}")]
    DuplicateIdentifier(String),
}

/// An immutable lookup table over a static slice of [`CatalogEntry`] values.
///
/// Iteration order is declaration order; lookup is a linear scan returning
/// the first match. Catalogs are small (tens of entries at most).
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    entries: &'static [CatalogEntry],
}

impl Catalog {
    /// Build a catalog, validating identifier uniqueness.
    pub fn new(entries: &'static [CatalogEntry]) -> Result<Self, CatalogError> {
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.identifier == entry.identifier) {
                return Err(CatalogError::DuplicateIdentifier(
                    entry.identifier.to_string(),
                ));
            }
        }
        Ok(Self { entries })
    }

    /// Find the entry with the given identifier, if any.
    pub fn find(&self, identifier: &str) -> Option<&'static CatalogEntry> {
        self.entries.iter().find(|e| e.identifier == identifier)
    }

    /// All entries, in declaration order.
    pub fn entries(&self) -> &'static [CatalogEntry] {
        self.entries
    }

    /// Number of entries in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
