//! GitHub client error types.

use thiserror::Error;

/// Errors that can occur while talking to the GitHub API.
#[derive(Debug, Error)]
pub enum GithubError {
    /// Transport or deserialization failure from the HTTP client.
    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to construct the HTTP client.
    #[error("failed to build GitHub client: {0}")]
    Build(String),
}
