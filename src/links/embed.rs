// src/links/embed.rs
// =============================================================================
// This module picks embed snippets based on the file extension.
//
// Extension table (case-insensitive):
//   js, mjs                          -> <script> tags (+ an ES module import)
//   css, scss, less                  -> <link rel="stylesheet"> tags
//   jpg, jpeg, png, gif, svg, webp   -> <img> tags
//   anything else                    -> plain links
//
// Each shape is produced for the full hash, the short hash and the branch.
// =============================================================================

use serde::Serialize;

use super::derive::cdn_url;
use crate::github::ResolvedCommit;
use crate::source::SourceReference;

/// The kind of snippet a file gets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmbedKind {
    /// JavaScript, embedded with a <script> tag
    Script,
    /// Stylesheets, embedded with <link rel="stylesheet">
    Stylesheet,
    /// Images, embedded with <img>
    Image,
    /// Anything else, just the URL
    Raw,
}

impl EmbedKind {
    /// Looks up the snippet kind for a file path
    pub fn for_path(path: &str) -> Self {
        let file_name = path.rsplit('/').next().unwrap_or(path);
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "js" | "mjs" => EmbedKind::Script,
            "css" | "scss" | "less" => EmbedKind::Stylesheet,
            "jpg" | "jpeg" | "png" | "gif" | "svg" | "webp" => EmbedKind::Image,
            _ => EmbedKind::Raw,
        }
    }

    /// Human-readable name of the file type
    pub fn label(self) -> &'static str {
        match self {
            EmbedKind::Script => "JavaScript",
            EmbedKind::Stylesheet => "CSS",
            EmbedKind::Image => "Image",
            EmbedKind::Raw => "file",
        }
    }

    // Title prefix and snippet body for one URL
    fn render(self, url: &str) -> (&'static str, String) {
        match self {
            EmbedKind::Script => ("Script tag", format!(r#"<script src="{}"></script>"#, url)),
            EmbedKind::Stylesheet => (
                "Stylesheet link",
                format!(r#"<link rel="stylesheet" href="{}">"#, url),
            ),
            EmbedKind::Image => ("Image tag", format!(r#"<img src="{}" alt="Image">"#, url)),
            EmbedKind::Raw => ("Direct link", url.to_string()),
        }
    }
}

/// One ready-to-paste snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedSnippet {
    pub title: String,
    pub code: String,
}

/// All snippets for a file, plus the kind that was picked
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedSet {
    pub kind: EmbedKind,
    pub snippets: Vec<EmbedSnippet>,
}

/// Builds the embed snippets for a file
///
/// Like `derive`, a missing commit makes the hash variants use the branch.
pub fn embed_snippets(source: &SourceReference, commit: Option<&ResolvedCommit>) -> EmbedSet {
    let kind = EmbedKind::for_path(&source.path);

    let (full, short) = match commit {
        Some(commit) => (commit.full_hash.as_str(), commit.short_hash.as_str()),
        None => (source.branch.as_str(), source.branch.as_str()),
    };

    let variants = [
        ("with full commit hash", full),
        ("with short commit hash", short),
        ("without commit hash", source.branch.as_str()),
    ];

    let mut snippets: Vec<EmbedSnippet> = variants
        .into_iter()
        .map(|(suffix, version)| {
            let (prefix, code) = kind.render(&cdn_url(source, Some(version)));
            EmbedSnippet {
                title: format!("{} {}", prefix, suffix),
                code,
            }
        })
        .collect();

    if kind == EmbedKind::Script {
        snippets.push(EmbedSnippet {
            title: "ES Module import".to_string(),
            code: format!(
                "import {{ /* your imports */ }} from '{}';",
                cdn_url(source, Some(full))
            ),
        });
    }

    EmbedSet { kind, snippets }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_with_path(path: &str) -> SourceReference {
        SourceReference {
            owner: "user".to_string(),
            repository: "repo".to_string(),
            branch: "main".to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn test_kind_for_path() {
        assert_eq!(EmbedKind::for_path("dist/app.js"), EmbedKind::Script);
        assert_eq!(EmbedKind::for_path("esm/index.MJS"), EmbedKind::Script);
        assert_eq!(EmbedKind::for_path("theme.Less"), EmbedKind::Stylesheet);
        assert_eq!(EmbedKind::for_path("img/logo.SVG"), EmbedKind::Image);
        assert_eq!(EmbedKind::for_path("data.xyz"), EmbedKind::Raw);
        assert_eq!(EmbedKind::for_path("Makefile"), EmbedKind::Raw);
        assert_eq!(EmbedKind::for_path("v1.js/README"), EmbedKind::Raw);
    }

    #[test]
    fn test_script_snippets() {
        let commit = ResolvedCommit::from_sha("0123456789abcdef0123456789abcdef01234567").unwrap();
        let set = embed_snippets(&source_with_path("app.js"), Some(&commit));

        assert_eq!(set.kind, EmbedKind::Script);
        assert_eq!(set.snippets.len(), 4);
        assert_eq!(set.snippets[0].title, "Script tag with full commit hash");
        assert_eq!(
            set.snippets[1].code,
            r#"<script src="https://cdn.jsdelivr.net/gh/user/repo@0123456/app.js"></script>"#
        );
        assert_eq!(set.snippets[2].title, "Script tag without commit hash");
        assert_eq!(
            set.snippets[3].code,
            "import { /* your imports */ } from 'https://cdn.jsdelivr.net/gh/user/repo@0123456789abcdef0123456789abcdef01234567/app.js';"
        );
    }

    #[test]
    fn test_stylesheet_and_image_snippets() {
        let css = embed_snippets(&source_with_path("css/site.css"), None);
        assert_eq!(css.snippets.len(), 3);
        assert_eq!(
            css.snippets[2].code,
            r#"<link rel="stylesheet" href="https://cdn.jsdelivr.net/gh/user/repo@main/css/site.css">"#
        );

        let img = embed_snippets(&source_with_path("logo.png"), None);
        assert_eq!(img.kind, EmbedKind::Image);
        assert_eq!(
            img.snippets[0].code,
            r#"<img src="https://cdn.jsdelivr.net/gh/user/repo@main/logo.png" alt="Image">"#
        );
    }

    #[test]
    fn test_unknown_extension_uses_raw_links() {
        let set = embed_snippets(&source_with_path("notes.xyz"), None);
        assert_eq!(set.kind, EmbedKind::Raw);
        assert_eq!(set.snippets.len(), 3);
        assert_eq!(set.snippets[0].title, "Direct link with full commit hash");
        for snippet in &set.snippets {
            assert_eq!(
                snippet.code,
                "https://cdn.jsdelivr.net/gh/user/repo@main/notes.xyz"
            );
        }
    }
}
