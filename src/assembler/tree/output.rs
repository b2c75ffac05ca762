//! The merged result of one composition run.

use super::{SourceTree, TreePath};
use crate::assembler::fragment::Fragment;
use bytes::Bytes;
use std::collections::BTreeMap;

/// A [`SourceTree`] built by merging fragments with overwrite semantics.
///
/// Each entry remembers the label of the fragment that last wrote it.
#[derive(Clone, Debug, Default)]
pub struct OutputTree {
    tree: SourceTree,
    provenance: BTreeMap<TreePath, String>,
    overwrites: usize,
}

impl OutputTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing tree unchanged, attributing every entry to `label`.
    pub fn passthrough(label: &str, tree: SourceTree) -> Self {
        let provenance = tree
            .paths()
            .map(|path| (path.clone(), label.to_string()))
            .collect();
        Self {
            tree,
            provenance,
            overwrites: 0,
        }
    }

    /// Applies a fragment on top of the current contents.
    ///
    /// On a path collision the fragment's entry replaces the existing one.
    pub fn merge(&mut self, fragment: Fragment) {
        let (label, entries) = fragment.into_parts();
        let mut merged = 0usize;
        for (path, content) in entries {
            if let Some(previous) = self.provenance.get(&path) {
                log::debug!("{path}: '{label}' overwrites '{previous}'");
                self.overwrites += 1;
            }
            self.provenance.insert(path.clone(), label.clone());
            self.tree.insert(path, content);
            merged += 1;
        }
        log::debug!("Merged fragment '{label}' ({merged} file(s))");
    }

    pub fn get(&self, path: &TreePath) -> Option<&Bytes> {
        self.tree.get(path)
    }

    pub fn get_str(&self, path: &str) -> Option<&Bytes> {
        self.tree.get_str(path)
    }

    /// Label of the fragment that produced `path`.
    pub fn source_of(&self, path: &str) -> Option<&str> {
        let path = TreePath::new(path).ok()?;
        self.provenance.get(&path).map(String::as_str)
    }

    /// Number of entries replaced by a later fragment.
    pub fn overwrites(&self) -> usize {
        self.overwrites
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TreePath, &Bytes)> {
        self.tree.iter()
    }

    pub fn as_tree(&self) -> &SourceTree {
        &self.tree
    }

    pub fn into_tree(self) -> SourceTree {
        self.tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::tree::tree_of;

    #[test]
    fn later_fragment_wins_and_is_recorded() {
        let mut out = OutputTree::new();
        out.merge(Fragment::new("base", tree_of(&[("icon.png", "A")])));
        out.merge(Fragment::new(
            "platform",
            tree_of(&[("icon.png", "B"), ("tray.png", "C")]),
        ));

        assert_eq!(out.get_str("icon.png").unwrap().as_ref(), b"B");
        assert_eq!(out.get_str("tray.png").unwrap().as_ref(), b"C");
        assert_eq!(out.source_of("icon.png"), Some("platform"));
        assert_eq!(out.overwrites(), 1);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn passthrough_keeps_tree_unchanged() {
        let tree = tree_of(&[("index.html", "<html>")]);
        let out = OutputTree::passthrough("build output", tree.clone());
        assert_eq!(out.as_tree(), &tree);
        assert_eq!(out.source_of("index.html"), Some("build output"));
    }
}
