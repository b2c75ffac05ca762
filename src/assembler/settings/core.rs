//! Core Settings struct and implementations.

use super::{Layout, PlatformId};
use crate::assembler::manifest::ManifestDefaults;
use std::path::{Path, PathBuf};

/// Execution-mode switches for one run.
///
/// These are resolved once by the caller (the CLI reads them from flags or
/// the environment) and never consulted from process state by the assembler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecutionMode {
    /// When false, the build output passes through unmodified.
    pub build_active: bool,
    /// When true, the lifecycle script is replaced by its test variant.
    pub test_mode: bool,
}

/// Configuration snapshot for one assembly run.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder).
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_electron::assembler::{ExecutionMode, SettingsBuilder};
///
/// # fn example() -> kodegen_bundler_electron::assembler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_root("my-app")
///     .build_output("my-app/dist")
///     .mode(ExecutionMode { build_active: true, test_mode: false })
///     .platform_override(Some("darwin"))?
///     .build()?;
/// assert_eq!(settings.platform().as_str(), "darwin");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Root of the host project (holds `package.json` and the harness).
    project_root: PathBuf,

    /// Directory produced by the upstream web build.
    build_output: PathBuf,

    /// Build-active and test-mode switches.
    mode: ExecutionMode,

    /// Platform selecting `resources-<platform>`.
    platform: PlatformId,

    /// Input and output names.
    layout: Layout,

    /// Fallbacks for the synthesized manifest.
    manifest_defaults: ManifestDefaults,
}

impl Settings {
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn build_output(&self) -> &Path {
        &self.build_output
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    pub fn platform(&self) -> &PlatformId {
        &self.platform
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn manifest_defaults(&self) -> &ManifestDefaults {
        &self.manifest_defaults
    }

    /// Path of the host descriptor (`package.json`).
    pub fn descriptor_path(&self) -> PathBuf {
        self.project_root.join(&self.layout.descriptor)
    }

    /// Root of the desktop harness tree.
    pub fn host_tree_root(&self) -> PathBuf {
        self.project_root.join(&self.layout.config_dir)
    }

    /// Root of the test-mode override tree.
    pub fn test_override_root(&self) -> PathBuf {
        self.project_root.join(&self.layout.test_override_dir)
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        project_root: PathBuf,
        build_output: PathBuf,
        mode: ExecutionMode,
        platform: PlatformId,
        layout: Layout,
        manifest_defaults: ManifestDefaults,
    ) -> Self {
        Self {
            project_root,
            build_output,
            mode,
            platform,
            layout,
            manifest_defaults,
        }
    }
}
