// src/source/parse.rs
// =============================================================================
// This module parses GitHub file URLs into a SourceReference.
//
// Supported formats:
//   - https://raw.githubusercontent.com/{owner}/{repo}/{branch}/{path...}
//   - https://github.com/{owner}/{repo}/{blob|raw|blame}/{branch}/{path...}
//
// The scheme is optional, so "github.com/owner/repo/blob/main/a.js" works too.
// Segments are taken as-is: no percent-decoding, no character validation.
// =============================================================================

use serde::Serialize;
use thiserror::Error;

/// Host serving raw file contents
const RAW_HOST: &str = "raw.githubusercontent.com";

/// Hosts serving the GitHub web UI
const WEB_HOSTS: &[&str] = &["github.com", "www.github.com"];

/// View keywords that sit between the repository and the branch on github.com
const VIEW_KINDS: &[&str] = &["blob", "raw", "blame"];

/// A file inside a GitHub repository, pinned to a branch
///
/// All four fields are non-empty. `path` may contain `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceReference {
    pub owner: String,
    pub repository: String,
    pub branch: String,
    pub path: String,
}

/// Why a URL was not recognized
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("not a github.com or raw.githubusercontent.com URL: {0}")]
    UnsupportedHost(String),

    #[error("expected at least {expected} path segments, found {found}")]
    TooFewSegments { expected: usize, found: usize },

    #[error("unrecognized view '{0}' (expected blob, raw or blame)")]
    UnknownView(String),

    #[error("empty {0} segment")]
    EmptySegment(&'static str),
}

// Parses a GitHub file URL
//
// Example:
//   "https://github.com/facebook/react/blob/main/README.md"
//   -> SourceReference { owner: "facebook", repository: "react",
//                        branch: "main", path: "README.md" }
pub fn parse(url: &str) -> Result<SourceReference, ParseError> {
    let trimmed = url.trim();

    // Remove the scheme, the same way for both hosts
    let without_scheme = strip_scheme(trimmed);

    // Query strings and fragments are not part of the file path
    let without_suffix = without_scheme
        .split(['?', '#'])
        .next()
        .unwrap_or_default();

    let (host, rest) = without_suffix
        .split_once('/')
        .unwrap_or((without_suffix, ""));
    let host = host.to_ascii_lowercase();
    let parts: Vec<&str> = rest.split('/').collect();

    if host == RAW_HOST {
        parse_raw_parts(&parts)
    } else if WEB_HOSTS.contains(&host.as_str()) {
        parse_web_parts(&parts)
    } else {
        Err(ParseError::UnsupportedHost(trimmed.to_string()))
    }
}

// Removes a leading "https://" or "http://", ignoring case like the host
fn strip_scheme(url: &str) -> &str {
    for scheme in ["https://", "http://"] {
        // get() returns None instead of panicking on a non-char boundary
        let matches = url
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme));
        if matches {
            return &url[scheme.len()..];
        }
    }
    url
}

// raw.githubusercontent.com/{owner}/{repo}/{branch}/{path...}
fn parse_raw_parts(parts: &[&str]) -> Result<SourceReference, ParseError> {
    if parts.len() < 4 {
        return Err(ParseError::TooFewSegments {
            expected: 4,
            found: parts.len(),
        });
    }

    build_reference(parts[0], parts[1], parts[2], &parts[3..])
}

// github.com/{owner}/{repo}/{view}/{branch}/{path...}
fn parse_web_parts(parts: &[&str]) -> Result<SourceReference, ParseError> {
    if parts.len() < 5 {
        return Err(ParseError::TooFewSegments {
            expected: 5,
            found: parts.len(),
        });
    }

    let view = parts[2];
    if !VIEW_KINDS.contains(&view) {
        return Err(ParseError::UnknownView(view.to_string()));
    }

    build_reference(parts[0], parts[1], parts[3], &parts[4..])
}

fn build_reference(
    owner: &str,
    repository: &str,
    branch: &str,
    path_parts: &[&str],
) -> Result<SourceReference, ParseError> {
    let path = path_parts.join("/");

    for (name, value) in [
        ("owner", owner),
        ("repository", repository),
        ("branch", branch),
        ("path", path.as_str()),
    ] {
        if value.is_empty() {
            return Err(ParseError::EmptySegment(name));
        }
    }

    Ok(SourceReference {
        owner: owner.to_string(),
        repository: repository.to_string(),
        branch: branch.to_string(),
        path,
    })
}
