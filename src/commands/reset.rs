//! Reset command - restore every cursor role to the system default

use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::config::Settings;
use crate::scheme::ResetOutcome;

/// Execute the reset command
pub fn execute(yes: bool) -> Result<()> {
    if !yes {
        print!("Reset all cursor roles to the system default? (y/N) ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    let outcome = reset_live()?;

    for role in &outcome.failed_roles {
        eprintln!(
            "{} could not clear cursor value {}",
            "Warning:".yellow(),
            role
        );
    }
    if let Some(err) = &outcome.refresh_error {
        eprintln!("{} {}", "Warning:".yellow(), err);
    }

    let mut settings = Settings::load().unwrap_or_default();
    settings.last_applied_path = None;
    settings.applied_at = None;
    if let Err(e) = settings.save() {
        eprintln!("{} could not update settings: {e:#}", "Warning:".yellow());
    }

    println!("{}", "Restored system default cursors.".green());
    Ok(())
}

#[cfg(windows)]
fn reset_live() -> Result<ResetOutcome> {
    use crate::scheme::{self, CursorRegistry, SystemRefresh};

    let mut store = CursorRegistry::new();
    Ok(scheme::reset(&mut store, &SystemRefresh))
}

#[cfg(not(windows))]
fn reset_live() -> Result<ResetOutcome> {
    anyhow::bail!("resetting the cursor scheme requires Windows")
}
