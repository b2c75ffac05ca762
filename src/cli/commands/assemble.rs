//! The assemble command: compose, write, verify.

use crate::assembler::checksum::directory_digest;
use crate::assembler::utils::fs::write_tree;
use crate::assembler::{Assembler, Assembly};
use crate::cli::{Args, RuntimeConfig};
use crate::error::{CliError, Result};
use serde::Serialize;
use std::path::Path;

/// Machine-readable run summary printed with `--json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary<'a> {
    pub platform: &'a str,
    pub build_active: bool,
    pub test_mode: bool,
    pub files: usize,
    pub overwrites: usize,
    pub advisories: usize,
    pub digest: &'a str,
    pub output: Option<String>,
    pub written: bool,
}

/// Runs one assembly and writes the result unless `--dry-run` was given.
pub async fn run_assemble(
    args: &Args,
    config: &RuntimeConfig,
    assembler: &Assembler,
) -> Result<i32> {
    let assembly = assembler.assemble(config.output()).await?;
    let dest = args.output_dir()?;

    report_tree(config, &assembly, args.dry_run)?;

    let written = match dest.as_deref() {
        Some(dest) if !args.dry_run => {
            write_tree(assembly.tree(), dest).await?;
            verify_output(dest, assembly.digest()).await?;
            config.success(&format!(
                "Assembled {} file(s) into {}",
                assembly.tree().len(),
                dest.display()
            ))?;
            true
        }
        _ => false,
    };

    if args.json {
        let settings = assembler.settings();
        let summary = Summary {
            platform: settings.platform().as_str(),
            build_active: settings.mode().build_active,
            test_mode: settings.mode().test_mode,
            files: assembly.tree().len(),
            overwrites: assembly.tree().overwrites(),
            advisories: assembly.advisories(),
            digest: assembly.digest(),
            output: dest.map(|d| d.display().to_string()),
            written,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(0)
}

fn report_tree(config: &RuntimeConfig, assembly: &Assembly, dry_run: bool) -> Result<()> {
    let tree = assembly.tree();
    if dry_run {
        config.section(&format!("Output tree ({} files)", tree.len()))?;
    }
    for (path, content) in tree.iter() {
        let source = tree.source_of(path.as_str()).unwrap_or("?");
        let line = format!("{path}  ({} bytes, from {source})", content.len());
        if dry_run {
            config.indent(&line)?;
        } else {
            config.verbose_println(&line)?;
        }
    }
    config.verbose_println(&format!("sha256 {}", assembly.digest()))?;
    Ok(())
}

/// Re-hashes the written directory and compares it with the composed tree.
async fn verify_output(dest: &Path, expected: &str) -> Result<()> {
    let actual = directory_digest(dest).await?;
    if actual != expected {
        return Err(CliError::ExecutionFailed {
            command: "verify output".to_string(),
            reason: format!(
                "{} does not match the composed tree (expected {expected}, found {actual})",
                dest.display()
            ),
        }
        .into());
    }
    Ok(())
}
