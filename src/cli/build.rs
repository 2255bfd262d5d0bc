//! Site build orchestration.
//!
//! Build phases:
//! - **Resolve** - cache-busting tokens for the asset registry
//! - **Clean** - empty the output directory, keeping registry files (`--clean` only)
//! - **Routes** - page templates and their permalinks
//! - **Data** - JSON data files for the templating layer
//! - **Passthrough** - verbatim file copies into the output

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::asset::{self, AssetRegistry, CacheBustTable, versioned_urls};
use crate::config::SiteConfig;
use crate::core::BuildMode;
use crate::page::{PageRoute, scan_pages};
use crate::{debug, log};

/// Data file holding the cache-busting table.
pub const CACHEBUST_FILE: &str = "cachebust.json";
/// Data file holding key → versioned asset URL.
pub const ASSETS_FILE: &str = "assets.json";
/// Data file holding stem → permalink.
pub const ROUTES_FILE: &str = "routes.json";

/// What a build produced.
#[derive(Debug)]
pub struct BuildReport {
    pub table: CacheBustTable,
    pub routes: Vec<PageRoute>,
    pub data_files: Vec<PathBuf>,
    pub copied: usize,
}

/// Run a full build.
pub fn build_site(config: &SiteConfig, mode: BuildMode) -> Result<BuildReport> {
    log!("build"; "{} build", mode);

    // Resolve before cleaning, registry files may live under the output
    let registry = AssetRegistry::from_config(&config.assets, config.get_root());
    let table = asset::resolve(&registry, mode).context("failed to resolve cache-busting tokens")?;
    log!("assets"; "resolved {} token(s)", table.len());

    let output = &config.build.output;
    if config.build.clean && output.exists() {
        let keep: Vec<&Path> = registry.iter().map(|entry| entry.path.as_path()).collect();
        clean_output(output, &keep)
            .with_context(|| format!("failed to clean {}", output.display()))?;
        debug!("build"; "cleaned {}", output.display());
    }

    let routes = scan_pages(config);
    log!("routes"; "found {} page(s)", routes.len());

    let data_files = write_data_files(config, &registry, &table, &routes)?;

    let copied = asset::copy_passthrough(config)?;
    log!("copy"; "{} file(s) copied", copied);

    Ok(BuildReport {
        table,
        routes,
        data_files,
        copied,
    })
}

/// Remove everything below `dir` except the `keep` files and the directories
/// leading to them.
fn clean_output(dir: &Path, keep: &[&Path]) -> Result<()> {
    if !keep.iter().any(|path| path.starts_with(dir)) {
        fs::remove_dir_all(dir)?;
        return Ok(());
    }

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if keep.iter().any(|kept| kept.starts_with(&path)) {
            if entry.file_type()?.is_dir() {
                clean_output(&path, keep)?;
            } else {
                debug!("build"; "kept {}", path.display());
            }
        } else if entry.file_type()?.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}

/// Write `cachebust.json`, `assets.json` and `routes.json` into `build.data`.
///
/// Returns the written paths.
pub fn write_data_files(
    config: &SiteConfig,
    registry: &AssetRegistry,
    table: &CacheBustTable,
    routes: &[PageRoute],
) -> Result<Vec<PathBuf>> {
    let data_dir = &config.build.data;
    fs::create_dir_all(data_dir)
        .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;

    let urls: Map<String, Value> = versioned_urls(registry, table, &config.assets.prefix)
        .into_iter()
        .map(|(key, url)| (key, Value::String(url)))
        .collect();

    let routes: Map<String, Value> = routes
        .iter()
        .map(|r| (r.stem.clone(), Value::String(r.permalink.clone())))
        .collect();

    let written = vec![
        write_json(&data_dir.join(CACHEBUST_FILE), table)?,
        write_json(&data_dir.join(ASSETS_FILE), &urls)?,
        write_json(&data_dir.join(ROUTES_FILE), &routes)?,
    ];

    for path in &written {
        debug!("data"; "wrote {}", config.root_relative(path).display());
    }
    Ok(written)
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<PathBuf> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path.to_path_buf())
}
