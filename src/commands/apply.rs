//! Apply command - match a cursor folder and write it to the active scheme

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

use super::utils;
use crate::config::Settings;
use crate::scheme::{self, ApplyOutcome, CursorRole, MemoryStore, NoopRefresh, RoleCatalog};

/// Execute the apply command
pub fn execute(folder: &str, dry_run: bool) -> Result<()> {
    let folder = PathBuf::from(folder)
        .canonicalize()
        .with_context(|| format!("Folder does not exist: {folder}"))?;
    let folder = utils::strip_windows_prefix(&folder);

    let catalog = RoleCatalog::default();

    // Dry-run takes the identical path through the engine, just against an
    // in-memory store, so the reported counts match what a live run would do.
    let outcome = if dry_run {
        let mut store = MemoryStore::new();
        scheme::apply(&folder, &catalog, &mut store, &NoopRefresh)?
    } else {
        apply_live(&folder, &catalog)?
    };

    println!("{}", render_assignment(&outcome));

    for role in &outcome.failed_roles {
        eprintln!(
            "{} could not write cursor value {}",
            "Warning:".yellow(),
            role
        );
    }
    if let Some(err) = &outcome.refresh_error {
        eprintln!("{} {}", "Warning:".yellow(), err);
    }

    if dry_run {
        println!(
            "\nWould apply {} cursor role(s) from {}.",
            outcome.applied, outcome.folder_name
        );
        println!("{}", "(DRY-RUN) No changes made.".blue());
        return Ok(());
    }

    println!(
        "\nApplied {} cursor role(s) from {}.",
        outcome.applied.to_string().green(),
        outcome.folder_name
    );

    // Remember the folder for `status`. Display only; a failure here must
    // not fail an apply that already went through.
    let mut settings = Settings::load().unwrap_or_default();
    settings.last_applied_path = Some(folder.display().to_string());
    settings.applied_at = Some(chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string());
    if let Err(e) = settings.save() {
        eprintln!(
            "{} could not record applied folder: {e:#}",
            "Warning:".yellow()
        );
    }

    Ok(())
}

/// Render the full role → file table, unmatched roles shown as "-".
fn render_assignment(outcome: &ApplyOutcome) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![Cell::new("Role"), Cell::new("Cursor File")]);

    for role in CursorRole::ALL {
        let file = outcome
            .assignment
            .get(role)
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![Cell::new(role.registry_value()), Cell::new(file)]);
    }

    table.to_string()
}

#[cfg(windows)]
fn apply_live(folder: &Path, catalog: &RoleCatalog) -> Result<ApplyOutcome> {
    use crate::scheme::{CursorRegistry, SystemRefresh};

    let mut store = CursorRegistry::new();
    Ok(scheme::apply(folder, catalog, &mut store, &SystemRefresh)?)
}

#[cfg(not(windows))]
fn apply_live(_folder: &Path, _catalog: &RoleCatalog) -> Result<ApplyOutcome> {
    anyhow::bail!("applying a cursor scheme requires Windows; use --dry-run to preview the match")
}
