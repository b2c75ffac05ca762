//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap. The three execution
//! switches can also come from the environment variables the Ember build
//! exports; they are read here and nowhere else.

use crate::assembler::{ExecutionMode, ManifestDefaults, Settings, SettingsBuilder};
use crate::error::Result;
use clap::Parser;
use clap::builder::FalseyValueParser;
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Electron application tree assembler
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_bundler_electron",
    version,
    about = "Assembles an Electron application tree from a web build and a desktop harness",
    long_about = "Assembles an Electron application tree from a web build output and the
project's ember-electron/ harness (resources, manifest, lifecycle script).

Output layout:
  package.json      synthesized from the project's package.json
  .compilerc        copied from ember-electron/, when present
  ember/            the web build output
  ember-electron/   harness files, resources/ merged with resources-<platform>/

Usage:
  kodegen_bundler_electron --build-output dist --output electron-out --electron
  EMBER_CLI_ELECTRON=1 EMBER_ENV=test kodegen_bundler_electron -i dist -o out
  kodegen_bundler_electron -i dist --electron --platform darwin --print-plan

Without --electron (or EMBER_CLI_ELECTRON) the build output is copied unchanged.
EMBER_CLI_ELECTRON counts as off when unset, empty, or one of 0, false, no, off;
any other value turns the Electron build on."
)]
pub struct Args {
    /// Host project root (holds package.json and ember-electron/)
    #[arg(short = 'p', long, value_name = "DIR", default_value = ".")]
    pub project_root: PathBuf,

    /// Directory produced by the web build
    #[arg(short = 'i', long, value_name = "DIR")]
    pub build_output: PathBuf,

    /// Destination directory for the assembled tree (replaced if it exists)
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Assemble the Electron layout instead of passing the build through
    #[arg(long, env = "EMBER_CLI_ELECTRON", value_parser = FalseyValueParser::new())]
    pub electron: bool,

    /// Build environment; "test" swaps in tests/ember-electron/main.js
    #[arg(short = 'e', long, env = "EMBER_ENV", default_value = "development")]
    pub environment: String,

    /// Target platform for resources-<platform>/ (default: this host)
    #[arg(long, env = "EMBER_CLI_ELECTRON_BUILD_PLATFORM", value_name = "PLATFORM")]
    pub platform: Option<String>,

    /// Fallback for package.json "main"
    #[arg(long, value_name = "PATH")]
    pub entry_point: Option<String>,

    /// Fallback for package.json "config.forge"
    #[arg(long, value_name = "PATH")]
    pub forge_config: Option<String>,

    /// Print the ordered composition rules and exit
    #[arg(long)]
    pub print_plan: bool,

    /// Compose and list the result without writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Print a JSON summary instead of human-readable output
    #[arg(long)]
    pub json: bool,

    /// Show per-file detail
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.output.is_none() && !self.dry_run && !self.print_plan {
            return Err("--output is required unless --dry-run or --print-plan is given".to_string());
        }

        if self.verbose && self.quiet {
            return Err("--verbose and --quiet cannot be combined".to_string());
        }

        if self.environment.trim().is_empty() {
            return Err("Environment cannot be empty".to_string());
        }

        Ok(())
    }

    /// Execution switches resolved from flags and environment.
    pub fn mode(&self) -> ExecutionMode {
        ExecutionMode {
            build_active: self.electron,
            test_mode: self.environment == "test",
        }
    }

    /// Builds the assembler settings, resolving paths against the current directory.
    pub fn to_settings(&self) -> Result<Settings> {
        let mut defaults = ManifestDefaults::default();
        if let Some(entry_point) = &self.entry_point {
            defaults.entry_point = entry_point.clone();
        }
        if let Some(forge_config) = &self.forge_config {
            defaults.config_path = forge_config.clone();
        }

        let settings = SettingsBuilder::new()
            .project_root(absolute(&self.project_root)?)
            .build_output(absolute(&self.build_output)?)
            .mode(self.mode())
            .platform_override(self.platform.as_deref())?
            .manifest_defaults(defaults)
            .build()?;
        Ok(settings)
    }

    /// Absolute destination directory, if one was given.
    pub fn output_dir(&self) -> Result<Option<PathBuf>> {
        self.output.as_deref().map(absolute).transpose()
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    Ok(path.absolutize()?.into_owned())
}

/// Rejects a destination that is, or contains, one of the run's input roots.
///
/// Writing replaces the destination wholesale, so such a destination would
/// delete the inputs it was built from. Both paths must be absolute.
pub fn validate_destination(dest: &Path, settings: &Settings) -> std::result::Result<(), String> {
    let inputs = [
        settings.project_root().to_path_buf(),
        settings.build_output().to_path_buf(),
        settings.host_tree_root(),
        settings.test_override_root(),
    ];

    match inputs.iter().find(|input| input.starts_with(dest)) {
        Some(input) => Err(format!(
            "--output {} would replace input {}",
            dest.display(),
            input.display()
        )),
        None => Ok(()),
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let output = super::OutputManager::new(args.verbose, args.quiet || args.json);
        Self { output }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }
}
