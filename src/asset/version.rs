//! Asset version management for cache busting.
//!
//! Production builds version assets by content hash, so a token only changes
//! when the file bytes change. Development builds use the build timestamp,
//! shared by every entry of one resolve, because assets may not be compiled
//! yet and only need to change on every build.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use thiserror::Error;

use crate::core::BuildMode;
use crate::utils::hash::compute_file_hash;

use super::AssetRegistry;

/// Asset resolution errors.
#[derive(Debug, Error)]
pub enum AssetError {
    /// A registered asset could not be read for content hashing.
    ///
    /// Fatal: a missing production asset means the bundler has not produced
    /// it yet.
    #[error("asset `{key}` not found at `{}`", path.display())]
    Missing {
        key: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Cache-busting token appended to an asset URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CacheBustToken {
    /// Hex content digest (production).
    Digest(String),
    /// Milliseconds since the Unix epoch (development).
    Timestamp(u64),
}

impl fmt::Display for CacheBustToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digest(hex) => f.write_str(hex),
            Self::Timestamp(ms) => write!(f, "{ms}"),
        }
    }
}

/// Asset key → token, in registry order.
///
/// Always holds exactly the keys of the registry it was resolved from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheBustTable {
    entries: Vec<(String, CacheBustToken)>,
}

impl CacheBustTable {
    pub fn get(&self, key: &str) -> Option<&CacheBustToken> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, token)| token)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CacheBustToken)> {
        self.entries.iter().map(|(k, t)| (k.as_str(), t))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Serialized as a JSON object so templates can index it by key.
impl Serialize for CacheBustTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, token) in &self.entries {
            map.serialize_entry(key, token)?;
        }
        map.end()
    }
}

/// Resolve cache-busting tokens for every registered asset.
///
/// The clock is sampled once per call.
pub fn resolve(registry: &AssetRegistry, mode: BuildMode) -> Result<CacheBustTable, AssetError> {
    resolve_at(registry, mode, now_millis())
}

/// Resolve with an explicit development timestamp.
///
/// In production `now_ms` is unused and every file is hashed; the first
/// unreadable file aborts resolution.
pub fn resolve_at(
    registry: &AssetRegistry,
    mode: BuildMode,
    now_ms: u64,
) -> Result<CacheBustTable, AssetError> {
    let entries = registry
        .iter()
        .map(|entry| {
            let token = if mode.is_production() {
                let hash = compute_file_hash(&entry.path).map_err(|source| AssetError::Missing {
                    key: entry.key.clone(),
                    path: entry.path.clone(),
                    source,
                })?;
                CacheBustToken::Digest(hash.to_hex())
            } else {
                CacheBustToken::Timestamp(now_ms)
            };
            Ok((entry.key.clone(), token))
        })
        .collect::<Result<Vec<_>, AssetError>>()?;

    Ok(CacheBustTable { entries })
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}
