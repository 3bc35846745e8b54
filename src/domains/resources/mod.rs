//! Resources domain module.
//!
//! Resources are the URI-addressed face of the document catalog: each entry
//! in the resource catalog is advertised to MCP clients and served on read
//! requests.
//!
//! ## Architecture
//!
//! - `catalog.rs` - the static resource catalog (`zenblocks://` URIs)
//! - `service.rs` - `ResourceService`, listing and soft-failure reads
//!
//! ## Adding a New Resource
//!
//! Add an entry to `RESOURCE_ENTRIES` in `catalog.rs` and drop the backing
//! markdown file into the document directory. Nothing else needs to change.

mod catalog;
mod service;

pub use catalog::{registration_key, resource_catalog};
pub use service::ResourceService;
