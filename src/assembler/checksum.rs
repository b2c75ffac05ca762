//! Tree checksum calculation.
//!
//! Both functions produce the same digest for the same logical tree: one over
//! an in-memory [`SourceTree`], one over a directory written to disk. This is
//! how a run verifies that what it wrote matches what it composed.

use crate::bail;
use crate::assembler::error::{ErrorExt, Result};
use crate::assembler::tree::{SourceTree, TreePath};
use sha2::{Digest, Sha256};

/// Calculates the SHA-256 digest of an in-memory tree.
///
/// # Algorithm
///
/// For each entry in path order: hash(path, NUL, content length as
/// little-endian u64, content). Returns the hex-encoded digest.
pub fn tree_digest(tree: &SourceTree) -> String {
    let mut hasher = Sha256::new();
    for (path, content) in tree.iter() {
        update_entry(&mut hasher, path, content);
    }
    hex::encode(hasher.finalize())
}

/// Calculates the SHA-256 digest of a directory tree on disk.
///
/// Uses the same record format and ordering as [`tree_digest`]: entries are
/// sorted by their normalized tree path, not by filesystem order.
pub async fn directory_digest(dir_path: &std::path::Path) -> Result<String> {
    if !dir_path.is_dir() {
        bail!("Path is not a directory: {}", dir_path.display());
    }

    let mut entries = Vec::new();
    for entry in walkdir::WalkDir::new(dir_path).follow_links(false) {
        let entry = entry.map_err(|e| {
            crate::assembler::Error::GenericError(format!(
                "walking {}: {}",
                dir_path.display(),
                e
            ))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel_path = entry
            .path()
            .strip_prefix(dir_path)
            .map_err(|e| crate::assembler::Error::GenericError(e.to_string()))?;
        entries.push((TreePath::from_relative(rel_path)?, entry.into_path()));
    }

    // Sort by path for deterministic ordering
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut hasher = Sha256::new();
    for (tree_path, fs_path) in entries {
        let content = tokio::fs::read(&fs_path)
            .await
            .fs_context("reading file for hash calculation", &fs_path)?;
        update_entry(&mut hasher, &tree_path, &content);
    }

    Ok(hex::encode(hasher.finalize()))
}

fn update_entry(hasher: &mut Sha256, path: &TreePath, content: &[u8]) {
    hasher.update(path.as_str().as_bytes());
    hasher.update([0u8]);
    hasher.update((content.len() as u64).to_le_bytes());
    hasher.update(content);
}
