//! GitHub API client for the upstream ZenBlocks repository.
//!
//! Two endpoints are used: the REST API (rate-limit queries) and the raw
//! content mirror (document fetches). The bearer token lives behind a lock
//! so it can be swapped after construction; in-flight and subsequent
//! requests pick up the current value when they are built.

use std::sync::RwLock;
use std::time::Duration;

use serde::Deserialize;
use tracing::{info, warn};

use super::error::GithubError;

// Constants for the upstream repository structure
const REPO_OWNER: &str = "gustavogomez092";
const REPO_NAME: &str = "zenblocks-mcp";
const REPO_BRANCH: &str = "main";

const API_BASE: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("zenblocks-mcp-server/", env!("CARGO_PKG_VERSION"));

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// GitHub API rate-limit snapshot (the core resource pool).
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}

#[derive(Debug, Deserialize)]
struct RateLimitResponse {
    rate: RateLimit,
}

/// Client for the upstream ZenBlocks GitHub repository.
pub struct GithubClient {
    http: reqwest::Client,
    token: RwLock<Option<String>>,
}

impl GithubClient {
    /// Create a client, optionally authenticated with a personal access token.
    ///
    /// A missing token is not an error: requests fall back to unauthenticated
    /// rate limits, with a warning for the operator.
    pub fn new(token: Option<String>) -> Result<Self, GithubError> {
        if token.is_none() {
            warn!(
                "No GitHub token configured - using unauthenticated requests. \
                 Set MCP_GITHUB_TOKEN for higher rate limits."
            );
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GithubError::Build(e.to_string()))?;

        Ok(Self {
            http,
            token: RwLock::new(token.filter(|t| !t.trim().is_empty())),
        })
    }

    /// Set or clear the bearer token used by subsequent requests.
    pub fn set_token(&self, token: Option<String>) {
        let token = token.filter(|t| !t.trim().is_empty());
        if token.is_some() {
            info!("GitHub API token updated");
        } else {
            warn!("GitHub API token removed - using unauthenticated requests");
        }
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = token;
    }

    /// Whether a token is currently configured.
    pub fn has_token(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let token = self.token.read().unwrap_or_else(|e| e.into_inner()).clone();
        match token {
            Some(token) => request.bearer_auth(token.trim()),
            None => request,
        }
    }

    /// Query the current API rate-limit status.
    pub async fn rate_limit(&self) -> Result<RateLimit, GithubError> {
        let response = self
            .authorize(
                self.http
                    .get(format!("{API_BASE}/rate_limit"))
                    .header(reqwest::header::ACCEPT, "application/vnd.github+json"),
            )
            .send()
            .await?
            .error_for_status()?;

        let body: RateLimitResponse = response.json().await?;
        Ok(body.rate)
    }

    /// Fetch a file from the repository's raw-content mirror.
    ///
    /// Raw-content requests are sent without authorization; the mirror is
    /// public and does not count against the API rate limit.
    pub async fn fetch_raw(&self, path: &str) -> Result<String, GithubError> {
        let response = self
            .http
            .get(raw_url(path))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }
}

/// Raw-content URL for a repository file on the pinned branch.
fn raw_url(path: &str) -> String {
    format!("https://raw.githubusercontent.com/{REPO_OWNER}/{REPO_NAME}/{REPO_BRANCH}/{path}")
}
