//! Normalized, root-relative tree paths.

use crate::assembler::error::{Error, Result};
use std::fmt;
use std::io;
use std::path::{Component, Path};

/// A forward-slash separated path relative to a tree root.
///
/// Construction normalizes separators, drops `.` and empty segments, and
/// rejects anything that could leave the root (`..`, absolute paths). Ordering
/// is plain string ordering, which keeps every tree iteration deterministic.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TreePath(String);

impl TreePath {
    /// Parses and normalizes a relative path.
    pub fn new(raw: &str) -> Result<Self> {
        if raw.starts_with('/') || raw.starts_with('\\') || has_drive_prefix(raw) {
            return Err(Error::InvalidPath {
                path: raw.to_string(),
                reason: "path is absolute",
            });
        }

        let mut segments = Vec::new();
        for segment in raw.split(['/', '\\']) {
            match segment {
                "" | "." => continue,
                ".." => {
                    return Err(Error::InvalidPath {
                        path: raw.to_string(),
                        reason: "path escapes its root",
                    });
                }
                s => segments.push(s),
            }
        }

        if segments.is_empty() {
            return Err(Error::InvalidPath {
                path: raw.to_string(),
                reason: "path is empty",
            });
        }

        Ok(Self(segments.join("/")))
    }

    /// Builds a tree path from a filesystem path already relative to a root.
    ///
    /// Components are taken as they are on disk: only the platform separator
    /// splits them, so a Unix file named `a\b` stays one component. A name
    /// that is not valid UTF-8 cannot be represented and fails with
    /// [`Error::Encoding`].
    pub fn from_relative(path: &Path) -> Result<Self> {
        let mut segments = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(name) => {
                    let name = name.to_str().ok_or_else(|| Error::Encoding {
                        path: path.to_path_buf(),
                        source: io::Error::new(
                            io::ErrorKind::InvalidData,
                            "file name is not valid UTF-8",
                        ),
                    })?;
                    segments.push(name);
                }
                Component::CurDir => {}
                _ => {
                    return Err(Error::InvalidPath {
                        path: path.to_string_lossy().into_owned(),
                        reason: "path is not relative to its root",
                    });
                }
            }
        }
        if segments.is_empty() {
            return Err(Error::InvalidPath {
                path: path.to_string_lossy().into_owned(),
                reason: "path is empty",
            });
        }
        Ok(Self(segments.join("/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `prefix/self`.
    pub fn prefixed(&self, prefix: &TreePath) -> TreePath {
        TreePath(format!("{}/{}", prefix.0, self.0))
    }

    /// True when `prefix` is a leading sequence of whole components.
    pub fn starts_with(&self, prefix: &TreePath) -> bool {
        self.0 == prefix.0
            || (self.0.starts_with(&prefix.0) && self.0.as_bytes().get(prefix.0.len()) == Some(&b'/'))
    }

    /// Path below `prefix`, or `None` when outside it (or equal to it).
    pub fn strip_prefix(&self, prefix: &TreePath) -> Option<TreePath> {
        let rest = self.0.strip_prefix(&prefix.0)?.strip_prefix('/')?;
        Some(TreePath(rest.to_string()))
    }

    /// Last path component.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// True for a single-component path (a file at the tree root).
    pub fn is_top_level(&self) -> bool {
        !self.0.contains('/')
    }
}

fn has_drive_prefix(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TreePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
