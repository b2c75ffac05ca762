//! The print-plan command.

use crate::assembler::Assembler;
use crate::cli::RuntimeConfig;
use crate::error::Result;

/// Prints the ordered composition rules without reading any input.
pub fn print_plan(config: &RuntimeConfig, assembler: &Assembler, json: bool) -> Result<i32> {
    let settings = assembler.settings();

    if !settings.mode().build_active {
        if json {
            println!("[]");
        } else {
            config.output().info("Electron build inactive: build output passes through unchanged")?;
        }
        return Ok(0);
    }

    let rules: Vec<String> = assembler.plan()?.iter().map(ToString::to_string).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rules)?);
        return Ok(0);
    }

    config.section(&format!("Composition plan for {}", settings.platform()))?;
    for (i, rule) in rules.iter().enumerate() {
        config.indent(&format!("{}. {rule}", i + 1))?;
    }
    Ok(0)
}
