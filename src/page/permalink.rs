//! Permalink derivation from path stems.
//!
//! ```text
//! /pages-root/index           → /index.html
//! /pages-root/foo/bar         → /foo/bar/index.html
//! /pages-root/foo/baz/index   → /foo/baz/index.html
//! ```

use crate::config::PermalinkConfig;

/// Derive the output path of a page from its path stem.
///
/// `root` is the source-root segment, with or without its leading `/`.
/// Steps, in order:
/// 1. remove the first whole-segment occurrence of `/<root>`
/// 2. remove a trailing `index` segment with its separator
/// 3. append `/<filename>`
///
/// The stem must contain the root segment. The rendering engine guarantees
/// it, so this is only checked in debug builds.
pub fn derive_permalink(stem: &str, root: &str, filename: &str) -> String {
    let segment = root_segment(root);
    let found = find_segment(stem, &segment);
    debug_assert!(
        found.is_some(),
        "path stem `{stem}` does not contain `{segment}`"
    );

    let stripped = match found {
        Some(at) => format!("{}{}", &stem[..at], &stem[at + segment.len()..]),
        None => stem.to_string(),
    };
    let trimmed = stripped.strip_suffix('/').unwrap_or(&stripped);
    let base = strip_index(trimmed);
    format!("{base}/{filename}")
}

/// Byte offset of the first `segment` that ends at a `/` or at the end of
/// `stem`, so `/pages-root` does not match inside `/pages-rootish`.
fn find_segment(stem: &str, segment: &str) -> Option<usize> {
    stem.match_indices(segment)
        .map(|(at, _)| at)
        .find(|&at| matches!(stem[at + segment.len()..].chars().next(), None | Some('/')))
}

/// `pages-root`, `/pages-root` and `/pages-root/` all become `/pages-root`.
fn root_segment(root: &str) -> String {
    format!("/{}", root.trim_matches('/'))
}

/// Drop a trailing `index` segment; `indexing` or `reindex` are kept.
fn strip_index(path: &str) -> &str {
    if path == "index" {
        return "";
    }
    path.strip_suffix("/index").unwrap_or(path)
}

/// Configured permalink rule (`[permalink]` root and filename).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermalinkRule {
    root: String,
    filename: String,
}

impl PermalinkRule {
    pub fn new(root: &str, filename: impl Into<String>) -> Self {
        Self {
            root: root_segment(root),
            filename: filename.into(),
        }
    }

    pub fn from_config(config: &PermalinkConfig) -> Self {
        Self::new(&config.root, config.filename.clone())
    }

    /// Normalized root segment (leading `/`, no trailing `/`).
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Whether `stem` satisfies the deriver's precondition.
    pub fn accepts(&self, stem: &str) -> bool {
        find_segment(stem, &self.root).is_some()
    }

    pub fn derive(&self, stem: &str) -> String {
        derive_permalink(stem, &self.root, &self.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(stem: &str) -> String {
        derive_permalink(stem, "pages-root", "index.html")
    }

    #[test]
    fn test_root_index_collapses_to_filename() {
        assert_eq!(derive("/pages-root/index"), "/index.html");
    }

    #[test]
    fn test_leaf_page_keeps_full_path() {
        assert_eq!(derive("/pages-root/foo/bar"), "/foo/bar/index.html");
    }

    #[test]
    fn test_nested_index_is_stripped() {
        assert_eq!(derive("/pages-root/foo/baz/index"), "/foo/baz/index.html");
    }

    #[test]
    fn test_index_lookalikes_are_kept() {
        assert_eq!(derive("/pages-root/indexing"), "/indexing/index.html");
        assert_eq!(derive("/pages-root/blog/reindex"), "/blog/reindex/index.html");
        assert_eq!(derive("/pages-root/index/about"), "/index/about/index.html");
    }

    #[test]
    fn test_only_first_root_occurrence_removed() {
        assert_eq!(
            derive("/pages-root/docs/pages-root/intro"),
            "/docs/pages-root/intro/index.html"
        );
    }

    #[test]
    fn test_root_lookalike_is_not_a_segment() {
        assert_eq!(
            derive("/pages-rootish/a/pages-root/b"),
            "/pages-rootish/a/b/index.html"
        );
        let rule = PermalinkRule::new("pages-root", "index.html");
        assert!(!rule.accepts("/pages-rootish/a"));
        assert!(rule.accepts("/pages-root"));
    }

    #[test]
    fn test_trailing_separator_is_ignored() {
        assert_eq!(derive("/pages-root/"), "/index.html");
        assert_eq!(derive("/pages-root/foo/"), "/foo/index.html");
        assert_eq!(derive("/pages-root/foo/index/"), "/foo/index.html");
    }

    #[test]
    fn test_root_spelling_is_normalized() {
        assert_eq!(
            derive_permalink("/pages/about", "/pages/", "index.html"),
            "/about/index.html"
        );
        assert_eq!(
            derive_permalink("/pages/index", "pages", "page.html"),
            "/page.html"
        );
    }

    #[test]
    fn test_rule() {
        let rule = PermalinkRule::from_config(&PermalinkConfig::default());
        assert_eq!(rule.root(), "/pages-root");
        assert!(rule.accepts("/pages-root/foo"));
        assert!(!rule.accepts("/posts/foo"));
        assert_eq!(rule.derive("/pages-root/foo/index"), "/foo/index.html");
    }
}
