// src/convert.rs
// =============================================================================
// The conversion pipeline: input string -> links and embed snippets.
//
// Steps:
// 1. Reject empty input
// 2. Parse the URL into a SourceReference (rejection on failure)
// 3. Ask the CommitResolver for the branch's latest commit
// 4. Derive the CDN links and embed snippets
//
// A failed commit lookup is logged and the links fall back to the branch.
// Only input problems are reported to the user as errors.
//
// Rust concepts:
// - Result vs Option: input errors are a Result, a missing commit is an Option
// - Early return: `return Err(e)` leaves as soon as the input is rejected
// =============================================================================

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::github::{CommitResolver, ResolvedCommit};
use crate::links::{self, DerivedLinks, EmbedSet};
use crate::notify::{NotificationKind, Notifier, DEFAULT_DURATION};
use crate::source::{self, ParseError, SourceReference};

/// The result of converting one URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub source: SourceReference,
    /// None when the lookup failed or was skipped
    pub commit: Option<ResolvedCommit>,
    pub links: DerivedLinks,
    pub embeds: EmbedSet,
}

/// Input the pipeline refuses to convert
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a GitHub URL")]
    Empty,

    #[error("Invalid GitHub URL format")]
    Unrecognized(#[source] ParseError),
}

// Converts one GitHub file URL
//
// Parameters:
//   input: the URL as typed by the user
//   resolver: commit lookup, or None to skip it (offline mode)
//   notifier: where rejections are reported
pub async fn convert(
    input: &str,
    resolver: Option<&dyn CommitResolver>,
    notifier: &dyn Notifier,
) -> Result<Conversion, InputError> {
    // Ignore surrounding whitespace from copy/paste
    let input = input.trim();

    // Empty input and unrecognized URLs are both rejections
    let source = if input.is_empty() {
        Err(InputError::Empty)
    } else {
        source::parse(input).map_err(InputError::Unrecognized)
    };

    let source = match source {
        Ok(source) => source,
        Err(e) => {
            // The error's Display text is the user-facing message
            notifier.show(&e.to_string(), NotificationKind::Error, DEFAULT_DURATION);
            return Err(e);
        }
    };

    info!(
        owner = %source.owner,
        repository = %source.repository,
        branch = %source.branch,
        path = %source.path,
        "parsed GitHub URL"
    );

    // Look up the commit; a failure only downgrades the result
    let commit = match resolver {
        Some(resolver) => match resolver.resolve(&source).await {
            Ok(commit) => Some(commit),
            Err(e) => {
                warn!(error = %e, branch = %source.branch, "could not fetch commit hash, using branch");
                None
            }
        },
        // Offline mode
        None => None,
    };

    // Both derivations are pure, they only read source and commit
    let links = links::derive(&source, commit.as_ref());
    let embeds = links::embed_snippets(&source, commit.as_ref());

    Ok(Conversion {
        source,
        commit,
        links,
        embeds,
    })
}
