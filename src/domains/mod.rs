//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain represents a specific area of functionality within the
//! server: the shared document catalog and store, the resource and tool
//! dispatchers built on top of it, and the GitHub collaborator.

pub mod docs;
pub mod github;
pub mod resources;
pub mod tools;
