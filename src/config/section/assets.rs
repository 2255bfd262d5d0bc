//! `[assets]` section configuration.
//!
//! Declares the asset registry: logical keys mapped to files whose URLs get a
//! cache-busting token. Order is preserved in every generated data file.
//!
//! # Example
//!
//! ```toml
//! [assets]
//! prefix = "/assets"
//!
//! [[assets.registry]]
//! key = "mainCss"
//! path = "dist/assets/main.css"
//!
//! [[assets.registry]]
//! key = "mainJs"
//! path = "dist/assets/main.js"
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::util::resolve_path;
use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// URL prefix under which assets are served.
    pub prefix: String,

    /// Ordered registry entries.
    pub registry: Vec<AssetEntryConfig>,
}

/// One `[[assets.registry]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntryConfig {
    pub key: String,
    pub path: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            prefix: "/assets".into(),
            registry: Vec::new(),
        }
    }
}

impl AssetsConfig {
    /// Resolve registry paths against `root`. Empty paths stay empty for
    /// `validate` to report.
    pub(crate) fn normalize(&mut self, root: &Path) {
        for entry in &mut self.registry {
            if !entry.path.as_os_str().is_empty() {
                entry.path = resolve_path(root, &entry.path);
            }
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        const PREFIX: FieldPath = FieldPath::new("assets.prefix");
        const REGISTRY: FieldPath = FieldPath::new("assets.registry");

        if !self.prefix.starts_with('/') {
            diag.error_with_hint(
                PREFIX,
                format!("prefix `{}` must start with `/`", self.prefix),
                "use a site-absolute prefix such as \"/assets\"",
            );
        }

        let mut seen = HashSet::new();
        for (idx, entry) in self.registry.iter().enumerate() {
            if entry.key.trim().is_empty() {
                diag.error(REGISTRY, format!("[{idx}] key must not be empty"));
                continue;
            }
            if !seen.insert(entry.key.as_str()) {
                diag.error_with_hint(
                    REGISTRY,
                    format!("[{idx}] duplicate key `{}`", entry.key),
                    "every asset key must be unique",
                );
            }
            if entry.path.as_os_str().is_empty() {
                diag.error(REGISTRY, format!("[{idx}] `{}` has an empty path", entry.key));
            }
        }
    }
}
