//! Content hashing (blake3) for production cache-busting tokens and
//! passthrough freshness.
//!
//! The hash depends on file bytes only, never on the file name or path,
//! so identical content always yields the same token.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// A 256-bit content hash (blake3 output).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    #[inline]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Hash an in-memory buffer.
    pub fn of(bytes: &[u8]) -> Self {
        Self(*blake3::hash(bytes).as_bytes())
    }

    /// Full lowercase hex encoding (64 chars).
    pub fn to_hex(self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // First 16 hex chars for brevity
        write!(f, "{}", &self.to_hex()[..16])
    }
}

/// Compute blake3 hash of file contents.
///
/// Unlike a freshness check, a missing or unreadable file is an error here:
/// the caller decides whether that is fatal.
pub fn compute_file_hash(path: &Path) -> io::Result<ContentHash> {
    let file = File::open(path)?;

    let mut reader = BufReader::with_capacity(64 * 1024, file);
    let mut hasher = blake3::Hasher::new();
    let mut buffer = [0u8; 64 * 1024];

    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => {
                hasher.update(&buffer[..n]);
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(ContentHash::new(*hasher.finalize().as_bytes()))
}

/// Whether `dest` already holds the same bytes as `source`.
///
/// `false` when either file is missing or unreadable.
pub fn is_same_content(source: &Path, dest: &Path) -> bool {
    let (Ok(src_meta), Ok(dest_meta)) = (source.metadata(), dest.metadata()) else {
        return false;
    };
    if src_meta.len() != dest_meta.len() {
        return false;
    }
    match (compute_file_hash(source), compute_file_hash(dest)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_content_hash_display() {
        let hash = ContentHash::new([0xab; 32]);
        assert_eq!(format!("{}", hash), "abababababababab");
        assert_eq!(hash.to_hex().len(), 64);
    }

    #[test]
    fn test_same_content_different_names() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.css");
        let b = dir.path().join("nested-b.css");
        fs::write(&a, "body { color: red; }").unwrap();
        fs::write(&b, "body { color: red; }").unwrap();

        assert_eq!(compute_file_hash(&a).unwrap(), compute_file_hash(&b).unwrap());
    }

    #[test]
    fn test_one_byte_change() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.js");
        fs::write(&path, "console.log(1)").unwrap();
        let before = compute_file_hash(&path).unwrap();

        fs::write(&path, "console.log(2)").unwrap();
        let after = compute_file_hash(&path).unwrap();
        assert_ne!(before, after);
    }

    #[test]
    fn test_matches_in_memory_hash() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("big.bin");
        // Larger than one read buffer
        let data: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
        fs::write(&path, &data).unwrap();

        assert_eq!(compute_file_hash(&path).unwrap(), ContentHash::of(&data));
    }

    #[test]
    fn test_nonexistent_is_not_found() {
        let err = compute_file_hash(Path::new("/nonexistent/file.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_is_same_content() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src.txt");
        let dest = dir.path().join("dest.txt");
        fs::write(&src, "abc").unwrap();
        assert!(!is_same_content(&src, &dest));

        fs::write(&dest, "abc").unwrap();
        assert!(is_same_content(&src, &dest));

        fs::write(&dest, "abd").unwrap();
        assert!(!is_same_content(&src, &dest));
    }
}
