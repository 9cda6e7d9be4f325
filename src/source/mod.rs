// src/source/mod.rs
// =============================================================================
// This module turns a GitHub file URL into its parts.
//
// Submodules:
// - parse: Recognizes github.com and raw.githubusercontent.com URL shapes
//
// Rust concepts:
// - Modules: Organizing related functionality
// - pub use: Re-exporting so callers write `source::parse()`
// =============================================================================

mod parse;

pub use parse::{parse, ParseError, SourceReference};
