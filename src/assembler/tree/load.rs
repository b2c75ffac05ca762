//! Loading source trees from disk.

use super::{SourceTree, TreePath};
use crate::assembler::error::{Error, Result};
use bytes::Bytes;
use std::path::Path;

/// Recursively reads every file under `root` into a [`SourceTree`].
///
/// Symlinks are followed so linked harness files land as regular entries.
/// Fails with [`Error::MissingInput`] when `root` does not exist and with
/// [`Error::Encoding`] when any entry cannot be read.
///
/// This is blocking; async callers run it under `spawn_blocking`.
pub fn load_dir(root: &Path) -> Result<SourceTree> {
    if !root.exists() {
        return Err(Error::MissingInput {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(Error::GenericError(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    let mut tree = SourceTree::new();
    for entry in walkdir::WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
            Error::Encoding { path, source }
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        debug_assert!(entry.path().starts_with(root));
        let rel_path = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| Error::GenericError(e.to_string()))?;
        let tree_path = TreePath::from_relative(rel_path).map_err(|e| match e {
            Error::Encoding { source, .. } => Error::Encoding {
                path: entry.path().to_path_buf(),
                source,
            },
            other => other,
        })?;

        let content = std::fs::read(entry.path()).map_err(|source| Error::Encoding {
            path: entry.path().to_path_buf(),
            source,
        })?;
        tree.insert(tree_path, Bytes::from(content));
    }

    log::debug!("Loaded {} file(s) from {}", tree.len(), root.display());
    Ok(tree)
}
