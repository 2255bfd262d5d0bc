//! Asset registry: logical key → file path, in declaration order.

use std::path::{Path, PathBuf};

use crate::config::AssetsConfig;

use super::{CacheBustTable, CacheBustToken};

/// One registered asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    /// Logical key used from templates (e.g. `mainCss`).
    pub key: String,
    /// File whose content versions the asset.
    pub path: PathBuf,
}

impl AssetEntry {
    pub fn new(key: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            key: key.into(),
            path: path.into(),
        }
    }

    /// File name used in the public URL.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }
}

/// Ordered, immutable list of assets for one build.
///
/// Keys are unique: duplicates are rejected during config validation.
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    entries: Vec<AssetEntry>,
}

impl AssetRegistry {
    pub fn new(entries: Vec<AssetEntry>) -> Self {
        Self { entries }
    }

    /// Build from `[assets]`, resolving relative paths against `root`.
    ///
    /// Paths of a finalized config are already absolute and kept as is.
    pub fn from_config(config: &AssetsConfig, root: &Path) -> Self {
        let entries = config
            .registry
            .iter()
            .map(|e| AssetEntry::new(e.key.clone(), root.join(&e.path)))
            .collect();
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssetEntry> {
        self.entries.iter()
    }

    pub fn get(&self, key: &str) -> Option<&AssetEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Versioned URL for an asset: `<prefix>/<file name>?<token>`.
pub fn versioned_url(prefix: &str, entry: &AssetEntry, token: &CacheBustToken) -> String {
    format!("{}/{}?{}", prefix.trim_end_matches('/'), entry.file_name(), token)
}

/// Versioned URLs for every registry entry, in registry order.
///
/// Entries without a token (not produced by the same resolve) are skipped.
pub fn versioned_urls(
    registry: &AssetRegistry,
    table: &CacheBustTable,
    prefix: &str,
) -> Vec<(String, String)> {
    registry
        .iter()
        .filter_map(|entry| {
            let token = table.get(&entry.key)?;
            Some((entry.key.clone(), versioned_url(prefix, entry, token)))
        })
        .collect()
}
