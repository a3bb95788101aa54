//! Status command - show the last applied cursor folder

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::Settings;

/// Execute the status command
pub fn execute() -> Result<()> {
    let settings = Settings::load()?;

    match settings.last_applied_path {
        Some(path) => {
            println!("Last applied: {path}");
            if let Some(at) = settings.applied_at {
                println!("Applied at:   {}", at.dimmed());
            }
        }
        None => println!("No cursor set applied yet."),
    }

    Ok(())
}
