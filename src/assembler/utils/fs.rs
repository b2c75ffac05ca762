//! File system utilities for writing assembled trees.
//!
//! Output is written into a staging directory next to the destination and
//! swapped into place only after every file was written.

use crate::assembler::error::{ErrorExt, Result};
use crate::assembler::tree::OutputTree;
use std::{
    io::{self},
    path::{Path, PathBuf},
};
use tokio::fs;

/// Creates all of the directories of the specified path, erasing it first if specified.
pub async fn create_dir_all(path: &Path, erase: bool) -> Result<()> {
    if erase {
        remove_dir_all(path).await?;
    }

    // create_dir_all is already idempotent - succeeds even if dir exists
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e).fs_context("removing directory", path),
    }
}

/// Writes a file, creating any parent directories as needed.
pub async fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .fs_context("creating directory", parent)?;
    }
    fs::write(path, content).await.fs_context("writing", path)
}

/// Writes `tree` to `dest`, replacing whatever was there.
///
/// Files go to a uniquely named sibling staging directory first; the old
/// destination is removed and the staging directory renamed into place only
/// once all writes succeeded. On failure the staging directory is removed and
/// `dest` is left as it was.
pub async fn write_tree(tree: &OutputTree, dest: &Path) -> Result<()> {
    let staging = staging_path(dest);
    create_dir_all(&staging, true).await?;

    if let Err(e) = write_entries(tree, &staging).await {
        if let Err(cleanup) = remove_dir_all(&staging).await {
            log::warn!("Failed to remove staging directory: {cleanup}");
        }
        return Err(e);
    }

    remove_dir_all(dest).await?;
    fs::rename(&staging, dest)
        .await
        .fs_context("moving staged output into place", dest)?;

    log::info!("Wrote {} file(s) to {}", tree.len(), dest.display());
    Ok(())
}

async fn write_entries(tree: &OutputTree, root: &Path) -> Result<()> {
    for (path, content) in tree.iter() {
        write_file(&root.join(path.as_str()), content).await?;
    }
    Ok(())
}

fn staging_path(dest: &Path) -> PathBuf {
    let name = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let staging_name = format!(".{}.staging-{}", name, uuid::Uuid::new_v4());
    match dest.parent() {
        Some(parent) => parent.join(staging_name),
        None => PathBuf::from(staging_name),
    }
}
