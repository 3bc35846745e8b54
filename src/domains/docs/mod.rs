//! Docs domain module.
//!
//! This module owns the building blocks shared by the resources and tools
//! domains: the static document catalogs and the store that reads the
//! backing markdown files from disk.
//!
//! ## Architecture
//!
//! - `catalog.rs` - `CatalogEntry` and the `Catalog` lookup table
//! - `store.rs` - `DocStore`, the filesystem-backed document loader
//! - `error.rs` - document loading errors

mod catalog;
mod error;
mod store;

pub use catalog::{Catalog, CatalogEntry, CatalogError};
pub use error::DocsError;
pub use store::DocStore;
