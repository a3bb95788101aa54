//! cursor-applier: bulk-apply mouse cursor sets to the Windows cursor scheme
//!
//! Matches the `.ani`/`.cur` files in a folder against the known cursor
//! roles by file name, writes the result into the registry-backed scheme,
//! and broadcasts a live refresh so it takes effect without logging out.

use anyhow::Result;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

mod commands;
mod config;
mod scheme;

#[derive(Parser)]
#[command(name = "cursor-applier")]
#[command(about = "Bulk-apply mouse cursor sets to the Windows cursor scheme", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match cursor files in a folder and apply them to the active scheme
    Apply {
        /// Folder containing .ani/.cur cursor files
        folder: String,

        /// Show what would be applied without making changes
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Restore every cursor role to the system default
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the last applied cursor folder
    Status,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Apply { folder, dry_run } => {
            if dry_run {
                println!("{}", "(DRY-RUN MODE - no changes will be made)".blue());
            }
            commands::apply::execute(&folder, dry_run)?;
        }

        Commands::Reset { yes } => {
            commands::reset::execute(yes)?;
        }

        Commands::Status => {
            commands::status::execute()?;
        }
    }

    Ok(())
}
