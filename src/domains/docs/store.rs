//! Filesystem-backed document store.
//!
//! The store resolves bare filenames against a fixed base directory decided
//! at construction time. It performs exactly one read per call; content is
//! never cached, so edits to the markdown files are visible on the next
//! request.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::DocsError;
use crate::core::security::resolve_doc_path;

/// Loads documents from the trusted document directory.
#[derive(Debug, Clone)]
pub struct DocStore {
    base: PathBuf,
}

impl DocStore {
    /// Create a store rooted at the given directory.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// The document directory this store reads from.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Read a document by bare filename.
    ///
    /// Filenames containing path separators or `..` segments are rejected
    /// before any filesystem access.
    pub async fn load(&self, filename: &str) -> Result<String, DocsError> {
        let path = resolve_doc_path(&self.base, filename)?;
        debug!("Loading document {}", path.display());
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| DocsError::Io {
                filename: filename.to_string(),
                source,
            })
    }
}
