// src/links/derive.rs
// =============================================================================
// This module turns a SourceReference into jsDelivr CDN URLs.
//
// Template:
//   https://cdn.jsdelivr.net/gh/{owner}/{repository}@{ref}/{path}
//   https://cdn.jsdelivr.net/gh/{owner}/{repository}/{path}   (no ref)
//
// Without a resolved commit, both hash-pinned links fall back to the branch.
// =============================================================================

use serde::Serialize;

use crate::github::ResolvedCommit;
use crate::source::SourceReference;

/// jsDelivr's GitHub endpoint
const CDN_BASE: &str = "https://cdn.jsdelivr.net/gh";

/// The four CDN links for one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedLinks {
    /// Pinned to the full 40 character commit hash
    pub full_hash: String,
    /// Pinned to the 7 character short hash
    pub short_hash: String,
    /// Pinned to the branch name
    pub branch: String,
    /// No version, jsDelivr serves the default branch
    pub default_branch: String,
}

// Formats one CDN URL; `version` = None gives the branch-agnostic form
pub fn cdn_url(source: &SourceReference, version: Option<&str>) -> String {
    match version {
        Some(version) => format!(
            "{}/{}/{}@{}/{}",
            CDN_BASE, source.owner, source.repository, version, source.path
        ),
        None => format!(
            "{}/{}/{}/{}",
            CDN_BASE, source.owner, source.repository, source.path
        ),
    }
}

/// Derives all CDN links for a file
///
/// A missing commit is not an error: the hash variants use the branch name.
pub fn derive(source: &SourceReference, commit: Option<&ResolvedCommit>) -> DerivedLinks {
    let (full, short) = match commit {
        Some(commit) => (commit.full_hash.as_str(), commit.short_hash.as_str()),
        None => (source.branch.as_str(), source.branch.as_str()),
    };

    DerivedLinks {
        full_hash: cdn_url(source, Some(full)),
        short_hash: cdn_url(source, Some(short)),
        branch: cdn_url(source, Some(&source.branch)),
        default_branch: cdn_url(source, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_source() -> SourceReference {
        SourceReference {
            owner: "user".to_string(),
            repository: "repo".to_string(),
            branch: "main".to_string(),
            path: "dist/app.js".to_string(),
        }
    }

    fn sample_commit() -> ResolvedCommit {
        ResolvedCommit::from_sha("0123456789abcdef0123456789abcdef01234567").unwrap()
    }

    #[test]
    fn test_derive_with_commit() {
        let links = derive(&sample_source(), Some(&sample_commit()));
        assert_eq!(
            links.full_hash,
            "https://cdn.jsdelivr.net/gh/user/repo@0123456789abcdef0123456789abcdef01234567/dist/app.js"
        );
        assert_eq!(
            links.short_hash,
            "https://cdn.jsdelivr.net/gh/user/repo@0123456/dist/app.js"
        );
        assert_eq!(
            links.branch,
            "https://cdn.jsdelivr.net/gh/user/repo@main/dist/app.js"
        );
        assert_eq!(
            links.default_branch,
            "https://cdn.jsdelivr.net/gh/user/repo/dist/app.js"
        );
    }

    #[test]
    fn test_derive_without_commit_falls_back_to_branch() {
        let links = derive(&sample_source(), None);
        assert_eq!(links.full_hash, links.branch);
        assert_eq!(links.short_hash, links.branch);
        assert_eq!(
            links.default_branch,
            "https://cdn.jsdelivr.net/gh/user/repo/dist/app.js"
        );
    }

    #[test]
    fn test_derive_is_idempotent() {
        let source = sample_source();
        let commit = sample_commit();
        assert_eq!(derive(&source, Some(&commit)), derive(&source, Some(&commit)));
        assert_eq!(derive(&source, None), derive(&source, None));
    }
}
