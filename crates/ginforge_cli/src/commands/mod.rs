//! CLI command definitions.

use clap::{Parser, Subcommand};

pub mod new;

/// ginforge - Gin project skeleton generator
#[derive(Parser)]
#[command(name = "ginforge")]
#[command(version, about = "ginforge - Gin project skeleton generator")]
#[command(long_about = r#"
ginforge generates a ready-to-fill Gin web service skeleton: configuration,
controller, model, service, router, bootstrap and entrypoint files, wired to
the project name you give it.

Projects must be created inside the GOPATH workspace. The base directory is
the current directory, or GINFORGE_WORKSPACE when set.

EXIT CODES:
  0 - Success
  1 - Creation failed on the filesystem
  2 - Invalid arguments or unimplemented command
  3 - Workspace policy violation
"#)]
#[command(propagate_version = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new Gin project skeleton
    New(new::NewArgs),

    /// Show help (not available in this version)
    Help,

    /// Run the generated project (not supported in this version)
    Run,
}
