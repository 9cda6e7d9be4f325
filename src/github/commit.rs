// src/github/commit.rs
// =============================================================================
// This module resolves a branch name to the commit it currently points at.
//
// Strategy:
// - Call GitHub's REST API: GET {api_base}/repos/{owner}/{repo}/commits/{branch}
// - Read the "sha" field of the JSON answer
// - Check it looks like a 40 character hex hash
//
// Failures are returned as ResolutionError and never retried. The caller
// decides what to do with them (the conversion pipeline falls back to the
// branch name).
//
// Rust concepts:
// - Traits: CommitResolver lets tests plug in a fake resolver
// - async-trait: async fn inside a trait, boxed behind the scenes
// - thiserror: #[from] turns reqwest::Error into ResolutionError for `?`
// =============================================================================

use async_trait::async_trait;
use percent_encoding::percent_decode_str;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::source::SourceReference;

/// Public GitHub API
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Length of a full SHA-1 commit hash
const FULL_HASH_LEN: usize = 40;

/// Length of the abbreviated hash used in short CDN links
const SHORT_HASH_LEN: usize = 7;

/// GitHub rejects API requests without a User-Agent
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// A commit hash in both its full and abbreviated form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedCommit {
    pub full_hash: String,
    pub short_hash: String,
}

impl ResolvedCommit {
    /// Builds a ResolvedCommit from a full 40 character hex hash
    pub fn from_sha(sha: &str) -> Result<Self, ResolutionError> {
        let is_hex = sha.chars().all(|c| c.is_ascii_hexdigit());
        if sha.len() != FULL_HASH_LEN || !is_hex {
            return Err(ResolutionError::MalformedSha(sha.to_string()));
        }

        Ok(Self {
            full_hash: sha.to_string(),
            short_hash: sha[..SHORT_HASH_LEN].to_string(),
        })
    }
}

/// Why a branch could not be resolved to a commit
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("request to GitHub failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("GitHub API answered HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("GitHub API answer has no commit sha")]
    MissingSha,

    #[error("GitHub API returned a malformed commit sha: {0:?}")]
    MalformedSha(String),

    #[error("API base URL cannot hold a path: {0}")]
    InvalidApiBase(String),
}

/// Anything that can turn (owner, repository, branch) into a commit
///
/// The pipeline only depends on this trait, so tests can swap in a stub.
#[async_trait]
pub trait CommitResolver: Send + Sync {
    async fn resolve(&self, source: &SourceReference) -> Result<ResolvedCommit, ResolutionError>;
}

/// Settings for talking to the GitHub API
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Base URL of the REST API (GitHub Enterprise uses https://host/api/v3)
    pub api_base: Url,
    /// Optional token, raises the anonymous rate limit
    pub token: Option<String>,
    /// Transport timeout for the single request
    pub timeout: Duration,
}

// Only the field we need from the commit payload
#[derive(Debug, Deserialize)]
struct CommitPayload {
    sha: Option<String>,
}

/// CommitResolver backed by the GitHub REST API
pub struct GithubResolver {
    client: Client,
    config: ResolverConfig,
}

impl GithubResolver {
    /// Creates the resolver and its HTTP client
    pub fn new(config: ResolverConfig) -> Result<Self, ResolutionError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl CommitResolver for GithubResolver {
    async fn resolve(&self, source: &SourceReference) -> Result<ResolvedCommit, ResolutionError> {
        // Build the API URL for this owner/repo/branch
        let endpoint = commits_endpoint(&self.config.api_base, source)?;
        debug!(%endpoint, "fetching commit hash");

        // GitHub recommends asking for its versioned JSON media type
        let mut request = self
            .client
            .get(endpoint)
            .header(header::ACCEPT, "application/vnd.github+json");

        // Anonymous requests work too, just with a lower rate limit
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        // Transport errors (DNS, refused connection, timeout) become
        // ResolutionError::Request through the ? operator and #[from]
        let response = request.send().await?;

        // 404 (unknown repo) and 422 (unknown branch) end up here
        if !response.status().is_success() {
            return Err(ResolutionError::Status(response.status()));
        }

        // Deserialize only the "sha" field, everything else is ignored
        let payload: CommitPayload = response.json().await?;
        let sha = payload.sha.ok_or(ResolutionError::MissingSha)?;

        ResolvedCommit::from_sha(&sha)
    }
}

// Builds {api_base}/repos/{owner}/{repo}/commits/{branch}
//
// Segments taken from a GitHub URL are still percent-encoded (for example a
// non-ASCII branch "%E5%8A%9F%E8%83%BD"). They are decoded first, then the
// url crate encodes them exactly once while appending, so a stray '?' or '#'
// cannot change the meaning of the request either.
fn commits_endpoint(api_base: &Url, source: &SourceReference) -> Result<Url, ResolutionError> {
    let mut endpoint = api_base.clone();

    // Cow<str>: borrowed when nothing needed decoding, owned otherwise
    let decoded: Vec<Cow<'_, str>> = [&source.owner, &source.repository, &source.branch]
        .into_iter()
        .map(|segment| percent_decode_str(segment).decode_utf8_lossy())
        .collect();

    endpoint
        .path_segments_mut()
        .map_err(|_| ResolutionError::InvalidApiBase(api_base.to_string()))?
        .pop_if_empty()
        .extend([
            "repos",
            decoded[0].as_ref(),
            decoded[1].as_ref(),
            "commits",
            decoded[2].as_ref(),
        ]);

    Ok(endpoint)
}
