//! Passthrough copy: files and directories copied verbatim into the output.
//!
//! ```text
//! [passthrough] copy = ["src/static", "robots.txt"]
//!
//! src/static/fonts/a.woff2  → dist/src/static/fonts/a.woff2
//! robots.txt                → dist/robots.txt
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jwalk::WalkDir;

use crate::config::SiteConfig;
use crate::utils::hash::is_same_content;
use crate::{debug, log};

/// Copy every `[passthrough]` entry into the output directory.
///
/// Unless `build.clean` is set, destinations whose bytes already match their
/// source are left alone. Missing sources are reported and skipped.
///
/// Returns the number of files written.
pub fn copy_passthrough(config: &SiteConfig) -> Result<usize> {
    let output = &config.build.output;
    let clean = config.build.clean;
    let mut count = 0;

    for rel in &config.passthrough.copy {
        let source = config.resolve(rel);
        if !source.exists() {
            log!("warning"; "passthrough source `{}` does not exist, skipping", rel.display());
            continue;
        }

        let dest = output.join(dest_relative(rel, &source));
        if source.is_dir() {
            count += copy_dir(&source, &dest, clean)?;
        } else if copy_file(&source, &dest, clean)? {
            count += 1;
        }
    }

    Ok(count)
}

/// Path below the output directory for a configured entry.
///
/// Relative entries keep their path. Absolute ones (or `~/...`) keep only
/// their final component.
fn dest_relative(configured: &Path, resolved: &Path) -> PathBuf {
    if configured.is_absolute() || configured.starts_with("~") {
        resolved.file_name().map(PathBuf::from).unwrap_or_default()
    } else {
        configured.to_path_buf()
    }
}

fn copy_dir(src_dir: &Path, dest_dir: &Path, clean: bool) -> Result<usize> {
    let mut count = 0;
    for entry in WalkDir::new(src_dir).sort(true) {
        let entry = entry.with_context(|| format!("failed to walk {}", src_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let rel = path.strip_prefix(src_dir).unwrap_or(&path);
        if copy_file(&path, &dest_dir.join(rel), clean)? {
            count += 1;
        }
    }
    Ok(count)
}

/// Copy one file. Returns `false` when the destination was already fresh.
fn copy_file(src: &Path, dest: &Path, clean: bool) -> Result<bool> {
    if !clean && is_same_content(src, dest) {
        return Ok(false);
    }

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::copy(src, dest)
        .with_context(|| format!("failed to copy {} to {}", src.display(), dest.display()))?;
    debug!("copy"; "{}", dest.display());
    Ok(true)
}
