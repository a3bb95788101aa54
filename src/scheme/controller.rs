//! Apply and reset orchestration
//!
//! Both operations run to completion: scan → match → one write per canonical
//! role → one refresh. A scan failure aborts before anything is written; a
//! failed role write is absorbed, reflected in the outcome, and never stops
//! the remaining writes. There is no rollback: a partially applied scheme
//! is an accepted terminal state.

use std::path::Path;

use super::catalog::{CursorRole, RoleCatalog};
use super::matcher::{self, Assignment};
use super::refresh::{RefreshError, RefreshNotifier};
use super::scanner::{self, ScanError};
use super::store::SchemeStore;

/// Result of applying a cursor folder.
#[derive(Debug)]
pub struct ApplyOutcome {
    /// Roles that received a file and whose write succeeded.
    pub applied: usize,
    /// Last path component of the source folder, for display.
    pub folder_name: String,
    /// The role → file binding that was written.
    pub assignment: Assignment,
    /// Roles whose persistence write failed.
    pub failed_roles: Vec<CursorRole>,
    /// Set when the reload broadcast reported a failure.
    pub refresh_error: Option<RefreshError>,
}

/// Result of resetting the scheme to system defaults.
#[derive(Debug)]
pub struct ResetOutcome {
    /// Roles whose clear write failed.
    pub failed_roles: Vec<CursorRole>,
    /// Set when the reload broadcast reported a failure.
    pub refresh_error: Option<RefreshError>,
}

/// Match the cursor files in `folder` against `catalog` and write the result
/// into `store`, then trigger one refresh.
///
/// Every canonical role is written: matched roles get their file path,
/// unmatched roles are written empty so stale bindings from an earlier apply
/// are cleared. `applied` counts only non-empty values whose write succeeded.
pub fn apply(
    folder: &Path,
    catalog: &RoleCatalog,
    store: &mut dyn SchemeStore,
    notifier: &dyn RefreshNotifier,
) -> Result<ApplyOutcome, ScanError> {
    let files = scanner::scan(folder)?;
    let assignment = matcher::assign(catalog, &files);

    let mut applied = 0;
    let mut failed_roles = Vec::new();

    for role in CursorRole::ALL {
        let value = assignment
            .get(role)
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();

        match store.set(role, &value) {
            Ok(()) => {
                if !value.is_empty() {
                    applied += 1;
                }
            }
            Err(_) => failed_roles.push(role),
        }
    }

    let refresh_error = notifier.trigger().err();

    let folder_name = folder
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| folder.display().to_string());

    Ok(ApplyOutcome {
        applied,
        folder_name,
        assignment,
        failed_roles,
        refresh_error,
    })
}

/// Write empty values for all canonical roles, then trigger one refresh.
pub fn reset(store: &mut dyn SchemeStore, notifier: &dyn RefreshNotifier) -> ResetOutcome {
    let mut failed_roles = Vec::new();

    for role in CursorRole::ALL {
        if store.set(role, "").is_err() {
            failed_roles.push(role);
        }
    }

    ResetOutcome {
        failed_roles,
        refresh_error: notifier.trigger().err(),
    }
}
