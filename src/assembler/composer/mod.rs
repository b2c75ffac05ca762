//! Tree composition.
//!
//! [`compose`] is a pure function from already-loaded inputs to an
//! [`OutputTree`]: it builds the [`plan`], applies each rule to its input,
//! and merges the resulting fragments strictly in plan order. The
//! [`Assembler`] wraps it with concurrent input loading.
//!
//! # Module Organization
//!
//! - [`plan`] - The ordered rule list
//! - [`orchestrator`] - Main [`Assembler`] struct and run operations

mod orchestrator;
mod plan;

pub use orchestrator::{Assembler, Assembly};
pub use plan::{plan, Input, Rule};

use crate::assembler::error::{Result, Context};
use crate::assembler::fragment::Fragment;
use crate::assembler::manifest::Manifest;
use crate::assembler::settings::{ExecutionMode, Layout, PlatformId};
use crate::assembler::tree::{OutputTree, SourceTree, TreePath};

/// Label attributed to entries of a passed-through build output.
const PASSTHROUGH_LABEL: &str = "build output";

/// Everything one composition reads.
#[derive(Debug, Clone, Copy)]
pub struct ComposeInputs<'a> {
    pub manifest: &'a Manifest,
    pub host_tree: &'a SourceTree,
    pub platform: &'a PlatformId,
    pub external_tree: &'a SourceTree,
    /// Required when `mode.test_mode` is set.
    pub test_override_tree: Option<&'a SourceTree>,
    pub mode: ExecutionMode,
    pub layout: &'a Layout,
}

/// Returns the build output unchanged, as when the build is inactive.
pub fn passthrough(external_tree: SourceTree) -> OutputTree {
    OutputTree::passthrough(PASSTHROUGH_LABEL, external_tree)
}

/// Merges all inputs into one output tree.
///
/// With the build inactive this is [`passthrough`] of the external tree.
/// Otherwise every plan rule is applied in order, later rules overwriting
/// earlier ones on path collisions. Identical inputs always produce identical
/// output.
pub fn compose(inputs: &ComposeInputs<'_>) -> Result<OutputTree> {
    if !inputs.mode.build_active {
        return Ok(passthrough(inputs.external_tree.clone()));
    }

    let manifest = Fragment::synthesized(
        "manifest",
        TreePath::new(&inputs.layout.descriptor)?,
        inputs.manifest.to_json()?,
    );

    let rules = plan(inputs.layout, inputs.platform, inputs.mode)?;
    let mut output = OutputTree::new();
    for rule in &rules {
        let source = match rule.input {
            Input::Manifest => manifest.tree(),
            Input::HostTree => inputs.host_tree,
            Input::ExternalTree => inputs.external_tree,
            Input::TestOverrideTree => inputs
                .test_override_tree
                .context("test mode requires a test override tree")?,
        };
        let fragment = rule.apply(source);
        log::debug!("{rule} ({} file(s))", fragment.len());
        output.merge(fragment);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::manifest::{synthesize, ManifestDefaults};
    use crate::assembler::tree::tree_of;
    use serde_json::json;

    struct Fixture {
        manifest: Manifest,
        host: SourceTree,
        external: SourceTree,
        overrides: SourceTree,
        platform: PlatformId,
        layout: Layout,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                manifest: synthesize(&json!({ "name": "app" }), &ManifestDefaults::default()),
                host: tree_of(&[
                    (".compilerc", "compilerc"),
                    (".electron-forge", "forge"),
                    ("main.js", "production main"),
                    ("resources/icon.png", "A"),
                    ("resources-linux/icon.png", "B"),
                    ("resources-linux/tray.png", "C"),
                    ("resources-darwin/icon.icns", "D"),
                ]),
                external: tree_of(&[("index.html", "<html>"), ("assets/app.js", "app")]),
                overrides: tree_of(&[("main.js", "test main"), ("other.js", "ignored")]),
                platform: PlatformId::new("linux").unwrap(),
                layout: Layout::default(),
            }
        }

        fn inputs(&self, mode: ExecutionMode) -> ComposeInputs<'_> {
            ComposeInputs {
                manifest: &self.manifest,
                host_tree: &self.host,
                platform: &self.platform,
                external_tree: &self.external,
                test_override_tree: Some(&self.overrides),
                mode,
                layout: &self.layout,
            }
        }
    }

    const ACTIVE: ExecutionMode = ExecutionMode {
        build_active: true,
        test_mode: false,
    };

    fn text(out: &OutputTree, path: &str) -> String {
        String::from_utf8(out.get_str(path).unwrap().to_vec()).unwrap()
    }

    #[test]
    fn composes_the_documented_layout() {
        let fixture = Fixture::new();
        let out = compose(&fixture.inputs(ACTIVE)).unwrap();

        let paths: Vec<&str> = out.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                ".compilerc",
                "ember-electron/.electron-forge",
                "ember-electron/main.js",
                "ember-electron/resources/icon.png",
                "ember-electron/resources/tray.png",
                "ember/assets/app.js",
                "ember/index.html",
                "package.json",
            ]
        );
        assert_eq!(text(&out, "ember-electron/resources/icon.png"), "B");
        assert_eq!(text(&out, "ember-electron/main.js"), "production main");
        assert_eq!(out.source_of("ember-electron/resources/icon.png"), Some("resources-linux"));
    }

    #[test]
    fn manifest_is_rendered_at_the_root() {
        let fixture = Fixture::new();
        let out = compose(&fixture.inputs(ACTIVE)).unwrap();
        let manifest: serde_json::Value =
            serde_json::from_slice(out.get_str("package.json").unwrap()).unwrap();
        assert_eq!(manifest["main"], "ember-electron/main.js");
        assert_eq!(manifest["config"]["forge"], "ember-electron/.electron-forge");
    }

    #[test]
    fn test_mode_replaces_only_the_lifecycle_script() {
        let fixture = Fixture::new();
        let mode = ExecutionMode {
            build_active: true,
            test_mode: true,
        };
        let out = compose(&fixture.inputs(mode)).unwrap();
        assert_eq!(text(&out, "ember-electron/main.js"), "test main");
        assert!(out.get_str("ember-electron/other.js").is_none());
        assert_eq!(out.source_of("ember-electron/main.js"), Some("test lifecycle script"));
    }

    #[test]
    fn test_mode_without_override_tree_fails() {
        let fixture = Fixture::new();
        let mut inputs = fixture.inputs(ExecutionMode {
            build_active: true,
            test_mode: true,
        });
        inputs.test_override_tree = None;
        assert!(compose(&inputs).is_err());
    }

    #[test]
    fn inactive_build_passes_external_tree_through() {
        let fixture = Fixture::new();
        let out = compose(&fixture.inputs(ExecutionMode::default())).unwrap();
        assert_eq!(out.as_tree(), &fixture.external);
    }

    #[test]
    fn composition_is_deterministic() {
        let fixture = Fixture::new();
        let first = compose(&fixture.inputs(ACTIVE)).unwrap();
        let second = compose(&fixture.inputs(ACTIVE)).unwrap();
        assert_eq!(first.as_tree(), second.as_tree());
    }

    #[test]
    fn host_resources_never_reach_the_harness_copy() {
        let fixture = Fixture::new();
        let out = compose(&fixture.inputs(ACTIVE)).unwrap();
        for (path, _) in out.iter() {
            assert!(
                !path.as_str().starts_with("ember-electron/resources-"),
                "{path} leaked from a platform resource directory"
            );
            if path.as_str().starts_with("ember-electron/resources/") {
                let label = out.source_of(path.as_str()).unwrap();
                assert!(label.starts_with("resources"), "{path} came from {label}");
            }
        }
    }
}
