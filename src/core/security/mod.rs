// Security module for document path validation
//
// Resolves catalog-declared filenames against the trusted document
// directory and rejects anything that could escape it.

pub mod path_validator;

pub use path_validator::{PathSecurityError, resolve_doc_path};
