//! Resource selection.
//!
//! Resources come from two optional directories of the harness tree: the
//! platform-agnostic `resources/` and the platform-qualified
//! `resources-<platform>/`. Both land under the same output prefix; the
//! platform rule comes second so its files override same-named base files.

use crate::assembler::composer::{Input, Rule};
use crate::assembler::error::Result;
use crate::assembler::fragment::{Fragment, Selector};
use crate::assembler::settings::{Layout, PlatformId};
use crate::assembler::tree::{SourceTree, TreePath};

/// Rule taking every file under `subdir/` of the harness and placing it at
/// `dest`. Paths outside `subdir` (component-wise) are never taken.
pub fn resource_rule(label: &str, subdir: &str, dest: &TreePath) -> Result<Rule> {
    Ok(Rule::new(
        label,
        Input::HostTree,
        Selector::Subtree(TreePath::new(subdir)?),
        Some(dest.clone()),
    ))
}

/// The base and platform resource rules, in merge order.
pub fn resource_rules(layout: &Layout, platform: &PlatformId) -> Result<[Rule; 2]> {
    let dest = TreePath::new(&layout.resources_dest())?;
    let platform_dir = layout.platform_resources_dir(platform.as_str());
    Ok([
        resource_rule(&layout.resources_dir, &layout.resources_dir, &dest)?,
        resource_rule(&platform_dir, &platform_dir, &dest)?,
    ])
}

/// Selects the resources under `tree/<subdir>/`, relocated to `dest`.
///
/// A missing `subdir` yields an empty fragment rather than an error.
pub fn select_resources(tree: &SourceTree, subdir: &str, dest: &TreePath) -> Result<Fragment> {
    let fragment = resource_rule(subdir, subdir, dest)?.apply(tree);
    if fragment.is_empty() {
        log::debug!("No resources under {subdir}/");
    }
    Ok(fragment)
}
