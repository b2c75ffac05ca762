//! Builder for constructing Settings.

use super::{ExecutionMode, Layout, PlatformId, Settings};
use crate::assembler::manifest::ManifestDefaults;
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// # See Also
///
/// - [`Settings`] - The built settings struct
#[derive(Default)]
pub struct SettingsBuilder {
    project_root: Option<PathBuf>,
    build_output: Option<PathBuf>,
    mode: ExecutionMode,
    platform: Option<PlatformId>,
    layout: Layout,
    manifest_defaults: ManifestDefaults,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the host project root.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn project_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the directory holding the upstream web build output.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn build_output<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.build_output = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the execution mode.
    ///
    /// Default: build inactive, test mode off
    pub fn mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the target platform.
    ///
    /// Default: the host platform
    pub fn platform(mut self, platform: PlatformId) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Resolves the target platform from an optional override.
    ///
    /// # Errors
    ///
    /// Returns an error when the override is not a valid identifier.
    pub fn platform_override(mut self, id: Option<&str>) -> crate::assembler::Result<Self> {
        self.platform = Some(PlatformId::resolve(id)?);
        Ok(self)
    }

    /// Sets the layout names.
    ///
    /// Default: [`Layout::default`]
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the manifest fallbacks.
    ///
    /// Default: [`ManifestDefaults::default`]
    pub fn manifest_defaults(mut self, defaults: ManifestDefaults) -> Self {
        self.manifest_defaults = defaults;
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing:
    /// - `project_root`
    /// - `build_output`
    pub fn build(self) -> crate::assembler::Result<Settings> {
        use crate::assembler::error::Context;

        Ok(Settings::new(
            self.project_root.context("project_root is required")?,
            self.build_output.context("build_output is required")?,
            self.mode,
            self.platform.unwrap_or_else(PlatformId::host),
            self.layout,
            self.manifest_defaults,
        ))
    }
}
