//! Page template discovery (pure, filesystem reads only).

use std::path::{Component, Path};

use jwalk::WalkDir;

use crate::config::SiteConfig;
use crate::debug;

use super::{PageRoute, PermalinkRule};

/// Path stem of `file` relative to `templates_root`.
///
/// Extension removed, `/`-separated, with a leading `/`. Returns `None` when
/// the file is not under the root or has a non UTF-8 component.
///
/// ```text
/// templates_root: /site/src
/// file:           /site/src/pages-root/foo/bar.njk
/// stem:           /pages-root/foo/bar
/// ```
pub fn path_stem(templates_root: &Path, file: &Path) -> Option<String> {
    let rel = file.strip_prefix(templates_root).ok()?;
    let rel = rel.with_extension("");

    let mut stem = String::new();
    for component in rel.components() {
        let Component::Normal(part) = component else {
            return None;
        };
        stem.push('/');
        stem.push_str(part.to_str()?);
    }

    (!stem.is_empty()).then_some(stem)
}

/// Scan `<templates>/<root>` for page templates and derive their permalinks.
///
/// Only files with a configured extension are considered. Results are
/// sorted by stem. A missing pages directory yields no routes.
pub fn scan_pages(config: &SiteConfig) -> Vec<PageRoute> {
    let templates = &config.permalink.templates;
    let pages_dir = config.permalink.pages_dir();
    if !pages_dir.is_dir() {
        debug!("routes"; "pages directory {} not found", pages_dir.display());
        return Vec::new();
    }

    let rule = PermalinkRule::from_config(&config.permalink);
    let extensions = &config.permalink.extensions;

    let mut routes: Vec<_> = WalkDir::new(&pages_dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| extensions.iter().any(|e| e == ext))
        })
        .filter_map(|source| {
            let stem = path_stem(templates, &source)?;
            let permalink = rule.derive(&stem);
            Some(PageRoute {
                source,
                stem,
                permalink,
            })
        })
        .collect();

    routes.sort_by(|a, b| a.stem.cmp(&b.stem));
    routes
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_path_stem() {
        let root = Path::new("/site/src");
        assert_eq!(
            path_stem(root, Path::new("/site/src/pages-root/foo/bar.njk")).as_deref(),
            Some("/pages-root/foo/bar")
        );
        assert_eq!(
            path_stem(root, Path::new("/site/src/pages-root/index.md")).as_deref(),
            Some("/pages-root/index")
        );
        assert_eq!(path_stem(root, Path::new("/elsewhere/index.md")), None);
    }

    #[test]
    fn test_scan_pages() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let pages = root.join("src/pages-root");
        fs::create_dir_all(pages.join("foo/baz")).unwrap();
        fs::write(pages.join("index.njk"), "").unwrap();
        fs::write(pages.join("foo/bar.md"), "").unwrap();
        fs::write(pages.join("foo/baz/index.html"), "").unwrap();
        // Not a page template
        fs::write(pages.join("foo/photo.png"), "").unwrap();
        // Outside the pages directory
        fs::create_dir_all(root.join("src/_includes")).unwrap();
        fs::write(root.join("src/_includes/base.njk"), "").unwrap();

        let mut config = SiteConfig::default();
        config.finalize(root);
        let routes = scan_pages(&config);

        let pairs: Vec<_> = routes
            .iter()
            .map(|r| (r.stem.as_str(), r.permalink.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("/pages-root/foo/bar", "/foo/bar/index.html"),
                ("/pages-root/foo/baz/index", "/foo/baz/index.html"),
                ("/pages-root/index", "/index.html"),
            ]
        );
        assert_eq!(routes[2].source, pages.join("index.njk"));
        assert_eq!(
            routes[0].output_file(&config.build.output),
            root.join("dist/foo/bar/index.html")
        );
    }

    #[test]
    fn test_scan_missing_pages_dir() {
        let mut config = SiteConfig::default();
        config.finalize(&PathBuf::from("/nonexistent/site"));
        assert!(scan_pages(&config).is_empty());
    }
}
