//! In-memory file trees.
//!
//! A [`SourceTree`] is an ordered map from [`TreePath`] to file contents. Every
//! input the assembler reads is loaded into one, every fragment is one, and
//! the merged result wraps one in an [`OutputTree`].

mod load;
mod output;
mod path;

pub use load::load_dir;
pub use output::OutputTree;
pub use path::TreePath;

use bytes::Bytes;
use std::collections::BTreeMap;

/// Read-only set of `(relative path -> content)` entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceTree {
    entries: BTreeMap<TreePath, Bytes>,
}

impl SourceTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, returning the content it replaced.
    pub fn insert(&mut self, path: TreePath, content: impl Into<Bytes>) -> Option<Bytes> {
        self.entries.insert(path, content.into())
    }

    pub fn get(&self, path: &TreePath) -> Option<&Bytes> {
        self.entries.get(path)
    }

    /// Looks up an entry by its string form.
    pub fn get_str(&self, path: &str) -> Option<&Bytes> {
        TreePath::new(path).ok().and_then(|p| self.entries.get(&p))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&TreePath, &Bytes)> {
        self.entries.iter()
    }

    /// Paths in order.
    pub fn paths(&self) -> impl Iterator<Item = &TreePath> {
        self.entries.keys()
    }
}

impl FromIterator<(TreePath, Bytes)> for SourceTree {
    fn from_iter<I: IntoIterator<Item = (TreePath, Bytes)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SourceTree {
    type Item = (TreePath, Bytes);
    type IntoIter = std::collections::btree_map::IntoIter<TreePath, Bytes>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Builds a tree from `(path, content)` string pairs.
///
/// Panics on an invalid path; meant for tests and literal fixtures.
#[cfg(test)]
pub(crate) fn tree_of(entries: &[(&str, &str)]) -> SourceTree {
    entries
        .iter()
        .map(|(path, content)| {
            (
                TreePath::new(path).expect("valid fixture path"),
                Bytes::copy_from_slice(content.as_bytes()),
            )
        })
        .collect()
}
