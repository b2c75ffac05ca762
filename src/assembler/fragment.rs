//! Fragments: labeled, transient subtrees contributed to the output.
//!
//! A fragment is produced in one of three ways:
//! - filtering an existing tree ([`Selector::All`], [`Selector::Files`],
//!   [`Selector::Exclude`]),
//! - synthesizing a single file from memory ([`Fragment::synthesized`]),
//! - selecting a subtree and relocating it ([`Selector::Subtree`]).
//!
//! Every variant can additionally be placed under a destination prefix.

use crate::assembler::error::{Error, Result};
use crate::assembler::tree::{SourceTree, TreePath};
use bytes::Bytes;
use glob::{MatchOptions, Pattern};
use std::fmt;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Chooses which entries of a source tree a fragment takes.
#[derive(Clone, Debug)]
pub enum Selector {
    /// Every entry, paths unchanged.
    All,
    /// Only the named files at the tree root, matched by exact name.
    Files(Vec<String>),
    /// Entries below a directory, with that directory stripped from the path.
    /// An absent directory selects nothing.
    Subtree(TreePath),
    /// Every entry whose path matches none of the patterns.
    Exclude(Vec<Pattern>),
}

impl Selector {
    /// Builds an [`Selector::Exclude`] from glob strings.
    pub fn exclude(patterns: &[&str]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Pattern::new(p)
                    .map_err(|e| Error::GenericError(format!("invalid exclude pattern '{p}': {e}")))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Selector::Exclude(patterns))
    }

    /// Builds a [`Selector::Files`] from names.
    pub fn files(names: &[&str]) -> Self {
        Selector::Files(names.iter().map(|n| n.to_string()).collect())
    }

    /// Maps a source path to its path inside the fragment, or `None` when the
    /// entry is not selected.
    fn select(&self, path: &TreePath) -> Option<TreePath> {
        match self {
            Selector::All => Some(path.clone()),
            Selector::Files(names) => (path.is_top_level()
                && names.iter().any(|n| n == path.as_str()))
            .then(|| path.clone()),
            Selector::Subtree(dir) => path.strip_prefix(dir),
            Selector::Exclude(patterns) => (!patterns
                .iter()
                .any(|p| p.matches_with(path.as_str(), MATCH_OPTIONS)))
            .then(|| path.clone()),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => write!(f, "all files"),
            Selector::Files(names) => write!(f, "files [{}]", names.join(", ")),
            Selector::Subtree(dir) => write!(f, "subtree {dir}/"),
            Selector::Exclude(patterns) => {
                let patterns: Vec<&str> = patterns.iter().map(Pattern::as_str).collect();
                write!(f, "all files except [{}]", patterns.join(", "))
            }
        }
    }
}

/// A labeled subtree waiting to be merged.
#[derive(Clone, Debug)]
pub struct Fragment {
    label: String,
    tree: SourceTree,
}

impl Fragment {
    pub fn new(label: impl Into<String>, tree: SourceTree) -> Self {
        Self {
            label: label.into(),
            tree,
        }
    }

    /// A fragment holding one in-memory file.
    pub fn synthesized(label: impl Into<String>, path: TreePath, content: impl Into<Bytes>) -> Self {
        let mut tree = SourceTree::new();
        tree.insert(path, content);
        Self::new(label, tree)
    }

    /// Selects entries of `source` and optionally relocates them under `dest`.
    ///
    /// Content buffers are shared with `source`, not copied.
    pub fn select(
        label: impl Into<String>,
        source: &SourceTree,
        selector: &Selector,
        dest: Option<&TreePath>,
    ) -> Self {
        let tree = source
            .iter()
            .filter_map(|(path, content)| {
                let selected = selector.select(path)?;
                let placed = match dest {
                    Some(prefix) => selected.prefixed(prefix),
                    None => selected,
                };
                Some((placed, content.clone()))
            })
            .collect();
        Self::new(label, tree)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn tree(&self) -> &SourceTree {
        &self.tree
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn into_parts(self) -> (String, SourceTree) {
        (self.label, self.tree)
    }
}
