//! Main assembler orchestration.
//!
//! This module provides the [`Assembler`] that loads every input of a run,
//! synthesizes the manifest, and composes the output tree.

use super::{compose, passthrough, plan, ComposeInputs, Rule};
use crate::assembler::checksum::tree_digest;
use crate::assembler::error::Result;
use crate::assembler::manifest::{check_advisories, synthesize, AdvisorySink};
use crate::assembler::settings::Settings;
use crate::assembler::tree::{load_dir, OutputTree, SourceTree};
use crate::metadata::load_host_descriptor;
use std::path::PathBuf;

/// Result of one assembly run.
#[derive(Debug, Clone)]
pub struct Assembly {
    tree: OutputTree,
    digest: String,
    advisories: usize,
}

impl Assembly {
    /// The composed output tree.
    pub fn tree(&self) -> &OutputTree {
        &self.tree
    }

    /// Hex SHA-256 digest of the output tree.
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Number of advisories emitted while inspecting the host descriptor.
    pub fn advisories(&self) -> usize {
        self.advisories
    }

    pub fn into_tree(self) -> OutputTree {
        self.tree
    }
}

/// Main assembler orchestrator.
///
/// Loads the harness tree, the build output, and (in test mode) the override
/// tree concurrently on the blocking pool, then merges them in plan order.
/// Load completion order never affects the result.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_electron::assembler::{
///     Assembler, ExecutionMode, LogAdvisorySink, SettingsBuilder,
/// };
///
/// # async fn example() -> kodegen_bundler_electron::assembler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_root("my-app")
///     .build_output("my-app/dist")
///     .mode(ExecutionMode { build_active: true, test_mode: false })
///     .build()?;
///
/// let assembly = Assembler::new(settings).assemble(&LogAdvisorySink).await?;
/// println!("{} files, sha256 {}", assembly.tree().len(), assembly.digest());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Assembler {
    settings: Settings,
}

impl Assembler {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The rules a run with these settings applies, in order.
    pub fn plan(&self) -> Result<Vec<Rule>> {
        plan(
            self.settings.layout(),
            self.settings.platform(),
            self.settings.mode(),
        )
    }

    /// Runs one assembly.
    ///
    /// # Errors
    ///
    /// - `MissingInput` when the build output, the harness tree, the host
    ///   descriptor, or (in test mode) the override tree does not exist
    /// - `Encoding` when a source file cannot be read
    /// - `Serialization` when the manifest cannot be rendered
    pub async fn assemble(&self, sink: &dyn AdvisorySink) -> Result<Assembly> {
        let settings = &self.settings;
        let mode = settings.mode();

        if !mode.build_active {
            log::info!("Electron build inactive; passing build output through");
            let external = load_blocking(settings.build_output().to_path_buf()).await?;
            return Ok(finish(passthrough(external), 0));
        }

        log::info!(
            "Assembling {} for platform {}{}",
            settings.project_root().display(),
            settings.platform(),
            if mode.test_mode { " (test mode)" } else { "" }
        );

        let descriptor_path = settings.descriptor_path();
        let override_root = settings.test_override_root();
        let (descriptor, host_tree, external_tree, test_override_tree) = tokio::try_join!(
            load_host_descriptor(&descriptor_path),
            load_blocking(settings.host_tree_root()),
            load_blocking(settings.build_output().to_path_buf()),
            async {
                if mode.test_mode {
                    load_blocking(override_root).await.map(Some)
                } else {
                    Ok(None)
                }
            },
        )?;

        log::debug!(
            "Host descriptor: {} {}",
            descriptor.name().unwrap_or("<unnamed>"),
            descriptor.version().unwrap_or("<unversioned>")
        );

        let advisories = check_advisories(descriptor.as_value(), sink);
        let manifest = synthesize(descriptor.as_value(), settings.manifest_defaults());

        let tree = compose(&ComposeInputs {
            manifest: &manifest,
            host_tree: &host_tree,
            platform: settings.platform(),
            external_tree: &external_tree,
            test_override_tree: test_override_tree.as_ref(),
            mode,
            layout: settings.layout(),
        })?;

        log::info!(
            "Composed {} file(s), {} overwritten",
            tree.len(),
            tree.overwrites()
        );
        Ok(finish(tree, advisories))
    }
}

fn finish(tree: OutputTree, advisories: usize) -> Assembly {
    let digest = tree_digest(tree.as_tree());
    Assembly {
        tree,
        digest,
        advisories,
    }
}

/// Loads a directory tree on the blocking pool.
async fn load_blocking(root: PathBuf) -> Result<SourceTree> {
    tokio::task::spawn_blocking(move || load_dir(&root)).await?
}
