//! ginforge CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Creation failed on the filesystem
//! - 2: Invalid arguments or unimplemented command
//! - 3: Workspace policy violation

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};

use ginforge_policy::PolicyError;
use ginforge_scaffold::ScaffoldError;

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const POLICY_VIOLATION: u8 = 3;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    let mut filter = EnvFilter::from_default_env().add_directive("warn".parse().unwrap());
    for krate in ["ginforge_cli", "ginforge_policy", "ginforge_scaffold"] {
        filter = filter.add_directive(format!("{krate}={level}").parse().unwrap());
    }

    // Initialize logging
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let result = match cli.command {
        Commands::New(args) => commands::new::execute(args),
        Commands::Help => {
            eprintln!("ginforge has no built-in help in this version");
            return ExitCode::from(ExitCodes::INVALID_ARGS);
        }
        Commands::Run => {
            eprintln!("ginforge does not support running projects in this version");
            return ExitCode::from(ExitCodes::INVALID_ARGS);
        }
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    if e.downcast_ref::<PolicyError>().is_some() {
        return ExitCodes::POLICY_VIOLATION;
    }
    match e.downcast_ref::<ScaffoldError>() {
        Some(ScaffoldError::EmptyName | ScaffoldError::InvalidName { .. }) => {
            ExitCodes::INVALID_ARGS
        }
        _ => ExitCodes::GENERAL_ERROR,
    }
}
