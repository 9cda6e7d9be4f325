// src/links/mod.rs
// =============================================================================
// This module builds the jsDelivr links and embed snippets for a file.
//
// Submodules:
// - derive: The four CDN URLs (full hash, short hash, branch, default branch)
// - embed: HTML snippets picked by file extension
//
// Everything here is a pure function of the SourceReference and the
// (optional) resolved commit.
// =============================================================================

mod derive;
mod embed;

pub use derive::{derive, DerivedLinks};
pub use embed::{embed_snippets, EmbedSet};

#[cfg(test)]
pub use embed::EmbedKind;
