//! The ordered composition plan.
//!
//! Composition is a list of [`Rule`]s applied in sequence. Each rule takes one
//! input tree, selects part of it, and places the selection under an optional
//! destination prefix. Later rules overwrite earlier ones on path collisions,
//! so the order of this list is the whole precedence contract.

use crate::assembler::error::Result;
use crate::assembler::fragment::{Fragment, Selector};
use crate::assembler::resources;
use crate::assembler::settings::{ExecutionMode, Layout, PlatformId};
use crate::assembler::tree::{SourceTree, TreePath};
use std::fmt;

/// Which input a rule reads from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// The single-file tree holding the rendered manifest.
    Manifest,
    /// The desktop harness tree.
    HostTree,
    /// The upstream web build output.
    ExternalTree,
    /// The test-mode override tree.
    TestOverrideTree,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Input::Manifest => "manifest",
            Input::HostTree => "harness",
            Input::ExternalTree => "build output",
            Input::TestOverrideTree => "test overrides",
        })
    }
}

/// One `(selector, destination)` step of the plan.
#[derive(Clone, Debug)]
pub struct Rule {
    pub label: String,
    pub input: Input,
    pub selector: Selector,
    pub dest: Option<TreePath>,
}

impl Rule {
    pub fn new(
        label: impl Into<String>,
        input: Input,
        selector: Selector,
        dest: Option<TreePath>,
    ) -> Self {
        Self {
            label: label.into(),
            input,
            selector,
            dest,
        }
    }

    /// Produces this rule's fragment from its input tree.
    pub fn apply(&self, source: &SourceTree) -> Fragment {
        Fragment::select(self.label.as_str(), source, &self.selector, self.dest.as_ref())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dest = self.dest.as_ref().map_or("/", TreePath::as_str);
        write!(
            f,
            "{}: {} of {} -> {}",
            self.label, self.selector, self.input, dest
        )
    }
}

/// Builds the rules for one run, in merge order.
///
/// 1. manifest at the root
/// 2. compiler config at the root
/// 3. harness tree under the config dir, minus compiler config and resources
/// 4. base resources
/// 5. platform resources
/// 6. build output under the app dir
/// 7. test mode only: lifecycle script override
pub fn plan(layout: &Layout, platform: &PlatformId, mode: ExecutionMode) -> Result<Vec<Rule>> {
    let config_dir = TreePath::new(&layout.config_dir)?;
    let resources_glob = format!("{}*/**", layout.resources_dir);

    let mut rules = vec![
        Rule::new("manifest", Input::Manifest, Selector::All, None),
        Rule::new(
            "compiler config",
            Input::HostTree,
            Selector::files(&[layout.compiler_config.as_str()]),
            None,
        ),
        Rule::new(
            "harness",
            Input::HostTree,
            Selector::exclude(&[layout.compiler_config.as_str(), resources_glob.as_str()])?,
            Some(config_dir.clone()),
        ),
    ];

    rules.extend(resources::resource_rules(layout, platform)?);

    rules.push(Rule::new(
        "build output",
        Input::ExternalTree,
        Selector::All,
        Some(TreePath::new(&layout.app_dir)?),
    ));

    if mode.test_mode {
        rules.push(Rule::new(
            "test lifecycle script",
            Input::TestOverrideTree,
            Selector::files(&[layout.lifecycle_script.as_str()]),
            Some(config_dir),
        ));
    }

    Ok(rules)
}
