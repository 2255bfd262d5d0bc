//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "dist"        # Build output root (relative to site root)
//! data = "src/_data"     # Data directory read by the templating layer
//! env = "SITE_ENV"       # Environment variable selecting the build mode
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::util::resolve_path;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::DEFAULT_ENV_VAR;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Build output directory.
    pub output: PathBuf,

    /// Directory receiving `cachebust.json`, `assets.json`, `routes.json`.
    pub data: PathBuf,

    /// Environment variable whose value `production` selects production mode.
    pub env: String,

    /// Remove the output directory before building (CLI only).
    #[serde(skip)]
    pub clean: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: "dist".into(),
            data: "src/_data".into(),
            env: DEFAULT_ENV_VAR.into(),
            clean: false,
        }
    }
}

impl BuildConfig {
    pub(crate) fn normalize(&mut self, root: &Path) {
        self.output = resolve_path(root, &self.output);
        self.data = resolve_path(root, &self.data);
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.env.trim().is_empty() {
            diag.error_with_hint(
                FieldPath::new("build.env"),
                "environment variable name must not be empty",
                format!("remove the field to use the default `{DEFAULT_ENV_VAR}`"),
            );
        }
    }
}
