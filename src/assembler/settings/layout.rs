//! Fixed names of the input and output layout.

/// Names of the directories and files the assembler reads and writes.
///
/// Input side, relative to the project root:
///
/// ```text
/// package.json                 host descriptor
/// ember-electron/              desktop harness (config_dir)
///   .compilerc                 compiler configuration (compiler_config)
///   main.js                    lifecycle script (lifecycle_script)
///   resources/                 base resources (resources_dir)
///   resources-<platform>/      platform resources (platform_resources_prefix)
/// tests/ember-electron/        test-mode overrides (test_override_dir)
/// ```
///
/// Output side:
///
/// ```text
/// package.json
/// .compilerc
/// ember/                       web build output (app_dir)
/// ember-electron/
///   resources/
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub descriptor: String,
    pub config_dir: String,
    pub compiler_config: String,
    pub lifecycle_script: String,
    pub resources_dir: String,
    pub platform_resources_prefix: String,
    pub test_override_dir: String,
    pub app_dir: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            descriptor: "package.json".to_string(),
            config_dir: "ember-electron".to_string(),
            compiler_config: ".compilerc".to_string(),
            lifecycle_script: "main.js".to_string(),
            resources_dir: "resources".to_string(),
            platform_resources_prefix: "resources-".to_string(),
            test_override_dir: "tests/ember-electron".to_string(),
            app_dir: "ember".to_string(),
        }
    }
}

impl Layout {
    /// Directory name of the resources for `platform`.
    pub fn platform_resources_dir(&self, platform: &str) -> String {
        format!("{}{}", self.platform_resources_prefix, platform)
    }

    /// Output prefix receiving every resource fragment.
    pub fn resources_dest(&self) -> String {
        format!("{}/{}", self.config_dir, self.resources_dir)
    }
}
