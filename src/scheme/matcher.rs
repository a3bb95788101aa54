//! Two-phase role assignment
//!
//! Phase 1 binds files whose basename equals an alias exactly. Phase 2 falls
//! back to substring containment for the roles still open, testing longer
//! aliases before shorter ones so a generic keyword like `Text` cannot steal
//! a file meant for `TextSelect`. A file is never assigned to two roles.

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::catalog::{CursorRole, RoleCatalog};
use super::scanner::CandidateFile;

/// Role → file binding produced by a single matching run.
///
/// Roles without a match are simply absent. Iteration follows registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    slots: BTreeMap<CursorRole, PathBuf>,
}

impl Assignment {
    /// The file bound to `role`, if any.
    pub fn get(&self, role: CursorRole) -> Option<&Path> {
        self.slots.get(&role).map(PathBuf::as_path)
    }

    /// Number of roles that received a file.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CursorRole, &Path)> {
        self.slots.iter().map(|(role, path)| (*role, path.as_path()))
    }

    fn insert(&mut self, role: CursorRole, path: PathBuf) {
        self.slots.insert(role, path);
    }
}

/// Assign candidate files to cursor roles.
///
/// Deterministic for a fixed catalog and file order: roles are visited in
/// catalog order, files in the order given (the scanner's lexicographic
/// order), and the first hit wins in both phases.
pub fn assign(catalog: &RoleCatalog, files: &[CandidateFile]) -> Assignment {
    let mut assignment = Assignment::default();
    let mut used = vec![false; files.len()];

    // Phase 1: exact basename match
    for (role, aliases) in catalog.entries() {
        for (idx, file) in files.iter().enumerate() {
            if used[idx] {
                continue;
            }
            if aliases.iter().any(|a| a.to_lowercase() == file.basename) {
                assignment.insert(*role, file.path.clone());
                used[idx] = true;
                break;
            }
        }
    }

    // Phase 2: substring match for the roles still open, longest alias first.
    // Character length, not byte length: multi-byte aliases must rank the
    // same as their visible length.
    for (role, aliases) in catalog.entries() {
        if assignment.get(*role).is_some() {
            continue;
        }

        let by_length = aliases_by_descending_length(aliases);

        for (idx, file) in files.iter().enumerate() {
            if used[idx] {
                continue;
            }
            if by_length
                .iter()
                .any(|a| file.basename.contains(&a.to_lowercase()))
            {
                assignment.insert(*role, file.path.clone());
                used[idx] = true;
                break;
            }
        }
    }

    assignment
}

/// Phase-2 probe order: longest alias first. Character length, not byte
/// length, so multi-byte aliases rank the same as their visible length.
/// The sort is stable; equal-length aliases keep catalog order.
fn aliases_by_descending_length(aliases: &[String]) -> Vec<&String> {
    let mut by_length: Vec<&String> = aliases.iter().collect();
    by_length.sort_by_key(|a| Reverse(a.chars().count()));
    by_length
}
