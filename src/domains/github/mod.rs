//! GitHub domain module.
//!
//! Authenticated client against the upstream ZenBlocks repository: raw
//! document fetches and API rate-limit queries. The token is optional;
//! without one the client runs against unauthenticated rate limits.

mod client;
mod error;

pub use client::{GithubClient, RateLimit};
pub use error::GithubError;
