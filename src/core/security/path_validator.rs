use std::path::{Component, Path, PathBuf};

/// Errors that can occur during document path validation
#[derive(Debug, thiserror::Error)]
pub enum PathSecurityError {
    #[error("empty document name")]
    Empty,

    #[error("document name '{0}' escapes the document directory")]
    Traversal(String),

    #[error("document name '{0}' is not a bare filename")]
    NotAFilename(String),
}

/// Resolves a catalog-declared filename against the document directory.
///
/// Catalog entries address documents by bare filename only; anything else is
/// refused before touching the filesystem:
///
/// 1. Empty names are rejected
/// 2. `..` segments and absolute paths are rejected as traversal attempts
/// 3. Multi-component paths (subdirectories) and `\` are rejected
///
/// # Returns
///
/// * `Ok(PathBuf)` - the filename joined onto `base`
/// * `Err(PathSecurityError)` - if validation fails
pub fn resolve_doc_path(base: &Path, filename: &str) -> Result<PathBuf, PathSecurityError> {
    if filename.is_empty() {
        return Err(PathSecurityError::Empty);
    }

    let path = Path::new(filename);
    let mut components = path.components();
    let first = components.next();

    if components.next().is_some() {
        // More than one component: a subdirectory or an escape attempt.
        return Err(PathSecurityError::Traversal(filename.to_string()));
    }

    match first {
        // Backslash is a separator on Windows; no catalog filename uses it.
        Some(Component::Normal(name)) if !filename.contains('\\') => Ok(base.join(name)),
        Some(Component::ParentDir) => Err(PathSecurityError::Traversal(filename.to_string())),
        _ => Err(PathSecurityError::NotAFilename(filename.to_string())),
    }
}
