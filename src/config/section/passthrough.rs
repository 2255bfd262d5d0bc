//! `[passthrough]` section configuration.
//!
//! Files and directories copied into the output directory as-is, keeping
//! their path relative to the site root.
//!
//! # Example
//!
//! ```toml
//! [passthrough]
//! copy = [
//!     "src/static",      # src/static/** → dist/src/static/**
//!     "robots.txt",      # → dist/robots.txt
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PassthroughConfig {
    /// Paths relative to the site root. Kept relative: the same relative
    /// path is reproduced under the output directory.
    pub copy: Vec<PathBuf>,
}

impl PassthroughConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (idx, path) in self.copy.iter().enumerate() {
            if path.as_os_str().is_empty() {
                diag.error(FieldPath::new("passthrough.copy"), format!("[{idx}] empty path"));
            }
        }
    }
}
