//! Command line interface for the Electron assembler.
//!
//! Parses arguments, resolves the execution switches into
//! [`Settings`](crate::assembler::Settings), and dispatches to a command.

mod args;
pub mod commands;
mod output;

pub use args::{validate_destination, Args, RuntimeConfig};
pub use output::OutputManager;

use crate::assembler::Assembler;
use crate::error::{CliError, Result};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    run_with(Args::parse_args()).await
}

/// Runs the CLI with already-parsed arguments.
pub async fn run_with(args: Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let config = RuntimeConfig::from(&args);
    let settings = args.to_settings()?;

    if !args.dry_run && !args.print_plan {
        if let Some(dest) = args.output_dir()? {
            validate_destination(&dest, &settings)
                .map_err(|reason| CliError::InvalidArguments { reason })?;
        }
    }

    let assembler = Assembler::new(settings);

    if args.print_plan {
        return commands::print_plan(&config, &assembler, args.json);
    }

    commands::run_assemble(&args, &config, &assembler).await
}
