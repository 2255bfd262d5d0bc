//! `[permalink]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [permalink]
//! templates = "src"                  # Templating root, stems are relative to it
//! root = "pages-root"                # Segment stripped from every stem
//! filename = "index.html"            # Appended to every permalink
//! extensions = ["njk", "md", "html"] # Page template extensions
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::util::resolve_path;
use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PermalinkConfig {
    pub templates: PathBuf,
    pub root: String,
    pub filename: String,
    pub extensions: Vec<String>,
}

impl Default for PermalinkConfig {
    fn default() -> Self {
        Self {
            templates: "src".into(),
            root: "pages-root".into(),
            filename: "index.html".into(),
            extensions: vec!["njk".into(), "md".into(), "html".into()],
        }
    }
}

impl PermalinkConfig {
    pub(crate) fn normalize(&mut self, root: &Path) {
        self.templates = resolve_path(root, &self.templates);
    }

    /// Directory holding page templates (`<templates>/<root>`).
    pub fn pages_dir(&self) -> PathBuf {
        self.templates.join(self.root.trim_matches('/'))
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.root.trim_matches('/').is_empty() {
            diag.error(FieldPath::new("permalink.root"), "source-root segment must not be empty");
        }
        if self.filename.is_empty() || self.filename.contains('/') {
            diag.error_with_hint(
                FieldPath::new("permalink.filename"),
                format!("`{}` is not a plain file name", self.filename),
                "use a name such as \"index.html\"",
            );
        }
        if self.extensions.is_empty() {
            diag.error(
                FieldPath::new("permalink.extensions"),
                "at least one page template extension is required",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_is_ok() {
        let mut diag = ConfigDiagnostics::new();
        PermalinkConfig::default().validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = PermalinkConfig {
            root: "/".into(),
            filename: "out/index.html".into(),
            extensions: vec![],
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_pages_dir() {
        let mut config = PermalinkConfig {
            root: "/pages-root/".into(),
            ..Default::default()
        };
        config.normalize(Path::new("/site"));
        assert_eq!(config.pages_dir(), PathBuf::from("/site/src/pages-root"));
    }
}
