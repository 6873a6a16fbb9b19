//! New command - Create a Gin project skeleton.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tracing::info;

use ginforge_policy::Workspace;
use ginforge_scaffold::{create_project, CreatedEntry, EntryStatus};

#[derive(Args)]
pub struct NewArgs {
    /// Name of the project to create
    name: String,

    /// Base directory for creation (defaults to the current directory)
    #[arg(long, env = "GINFORGE_WORKSPACE")]
    workspace: Option<PathBuf>,

    /// Print the creation report as JSON instead of per-entry lines
    #[arg(long)]
    json: bool,
}

pub fn execute(args: NewArgs) -> Result<()> {
    let base = match args.workspace {
        Some(path) if !path.as_os_str().is_empty() => path,
        _ => std::env::current_dir().context("Failed to determine the current directory")?,
    };

    // Policy gate: evaluated before anything is created.
    let workspace = Workspace::from_env();
    workspace.check(&base)?;

    info!("creating project {} under {}", args.name, base.display());

    let result = create_project(&base, &args.name)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for entry in &result.entries {
            print_entry(entry);
        }
    }

    if !result.success {
        let reason = result
            .failure
            .clone()
            .unwrap_or_else(|| "project creation failed".to_string());
        anyhow::bail!("{reason}");
    }

    if !args.json {
        println!();
        println!(
            "Project '{}' created at {}",
            args.name,
            base.join(&args.name).display()
        );
    }

    Ok(())
}

fn print_entry(entry: &CreatedEntry) {
    let path = entry.path.display().to_string();
    match entry.status {
        EntryStatus::Created => println!("\t{}\t{}", "Create".green(), path.bold()),
        EntryStatus::Failed => println!("\t{}\t{}", "Failed".red(), path.bold()),
    }
}
