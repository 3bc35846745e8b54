//! Document loading errors.

use thiserror::Error;

use crate::core::security::PathSecurityError;

/// Errors that can occur while loading a document from the store.
#[derive(Debug, Error)]
pub enum DocsError {
    /// The filename failed path validation. Treated the same as an
    /// unreadable file: refused, never read.
    #[error("invalid document name: {0}")]
    Path(#[from] PathSecurityError),

    /// The backing file is missing or unreadable.
    #[error("failed to read document {filename}: {source}")]
    Io {
        filename: String,
        #[source]
        source: std::io::Error,
    },
}
