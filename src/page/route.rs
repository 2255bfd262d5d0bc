//! Page route - source to permalink mapping.

use std::path::{Path, PathBuf};

/// Source → permalink mapping for a page template
///
/// # Example
///
/// ```text
/// Source: src/pages-root/blog/hello.njk
///
/// PageRoute {
///     source:    src/pages-root/blog/hello.njk
///     stem:      /pages-root/blog/hello
///     permalink: /blog/hello/index.html
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRoute {
    /// Template file path (absolute)
    pub source: PathBuf,
    /// Path stem relative to the templating root
    pub stem: String,
    /// Destination path relative to the output root
    pub permalink: String,
}

impl PageRoute {
    /// Output file under `output_dir`.
    pub fn output_file(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.permalink.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file() {
        let route = PageRoute {
            source: PathBuf::from("/site/src/pages-root/index.njk"),
            stem: "/pages-root/index".into(),
            permalink: "/index.html".into(),
        };
        assert_eq!(
            route.output_file(Path::new("/site/dist")),
            PathBuf::from("/site/dist/index.html")
        );
    }
}
