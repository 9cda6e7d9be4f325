// src/github/mod.rs
// =============================================================================
// This module looks up the latest commit of a branch on GitHub.
//
// Currently implements:
// - A CommitResolver trait so the conversion pipeline can be tested offline
// - GithubResolver, which calls GET /repos/{owner}/{repo}/commits/{branch}
// - ResolvedCommit, the full and short hash of the answer
// =============================================================================

mod commit;

pub use commit::{CommitResolver, GithubResolver, ResolvedCommit, ResolverConfig, DEFAULT_API_BASE};

#[cfg(test)]
pub use commit::ResolutionError;
