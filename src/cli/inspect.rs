//! Read-only commands: `resolve`, `permalink`, `routes`.
//!
//! Output goes to the given writer (stdout from `main`), logs to stderr.

use std::io::Write;

use anyhow::{Result, bail};

use crate::asset::{self, AssetRegistry};
use crate::config::SiteConfig;
use crate::core::BuildMode;
use crate::page::{PermalinkRule, scan_pages};

/// Print the cache-busting table as `key token` lines or as JSON.
pub fn run_resolve(config: &SiteConfig, mode: BuildMode, json: bool, out: &mut impl Write) -> Result<()> {
    let registry = AssetRegistry::from_config(&config.assets, config.get_root());
    let table = asset::resolve(&registry, mode)?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &table)?;
        writeln!(out)?;
    } else {
        let width = table.keys().map(str::len).max().unwrap_or(0);
        for (key, token) in table.iter() {
            writeln!(out, "{key:<width$}  {token}")?;
        }
    }
    Ok(())
}

/// Print the permalink of each stem.
///
/// Every stem is checked before any output, so a bad argument produces no
/// partial listing.
pub fn run_permalink(config: &SiteConfig, stems: &[String], out: &mut impl Write) -> Result<()> {
    let rule = PermalinkRule::from_config(&config.permalink);

    if let Some(stem) = stems.iter().find(|s| !rule.accepts(s)) {
        bail!(
            "path stem `{}` does not contain the source-root segment `{}`",
            stem,
            rule.root()
        );
    }

    for stem in stems {
        writeln!(out, "{}", rule.derive(stem))?;
    }
    Ok(())
}

/// Print `stem -> permalink` for every page template.
pub fn run_routes(config: &SiteConfig, out: &mut impl Write) -> Result<()> {
    for route in scan_pages(config) {
        writeln!(out, "{} -> {}", route.stem, route.permalink)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AssetEntryConfig;
    use std::fs;
    use tempfile::TempDir;

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> Result<String> {
        let mut buf = Vec::new();
        f(&mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_permalink_lines() {
        let config = SiteConfig::default();
        let stems = vec![
            "/pages-root/index".to_string(),
            "/pages-root/foo/bar".to_string(),
            "/pages-root/foo/baz/index".to_string(),
        ];
        let text = output(|out| run_permalink(&config, &stems, out)).unwrap();
        assert_eq!(text, "/index.html\n/foo/bar/index.html\n/foo/baz/index.html\n");
    }

    #[test]
    fn test_permalink_rejects_foreign_stem() {
        let config = SiteConfig::default();
        let stems = vec!["/pages-root/ok".to_string(), "/posts/hello".to_string()];
        let mut buf = Vec::new();
        let err = run_permalink(&config, &stems, &mut buf).unwrap_err();
        assert!(err.to_string().contains("/posts/hello"));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_resolve_lines_and_json() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("main.css"), "a{}").unwrap();

        let mut config = SiteConfig::default();
        config.assets.registry = vec![AssetEntryConfig {
            key: "mainCss".into(),
            path: "main.css".into(),
        }];
        config.finalize(dir.path());

        let text = output(|out| run_resolve(&config, BuildMode::Development, false, out)).unwrap();
        assert!(text.starts_with("mainCss  "));

        let json = output(|out| run_resolve(&config, BuildMode::Production, true, out)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["mainCss"].as_str().unwrap().len(), 64);
    }

    #[test]
    fn test_routes_listing() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/pages-root/blog")).unwrap();
        fs::write(dir.path().join("src/pages-root/blog/first.md"), "").unwrap();

        let mut config = SiteConfig::default();
        config.finalize(dir.path());

        let text = output(|out| run_routes(&config, out)).unwrap();
        assert_eq!(text, "/pages-root/blog/first -> /blog/first/index.html\n");
    }
}
