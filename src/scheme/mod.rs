//! Cursor scheme engine: role catalog, file matching, persistence, refresh

pub mod catalog;
pub mod controller;
pub mod matcher;
pub mod refresh;
pub mod scanner;
pub mod store;

// Re-exports for library consumers
pub use catalog::{CursorRole, RoleCatalog};
pub use controller::{apply, reset, ApplyOutcome, ResetOutcome};
pub use matcher::Assignment;
pub use refresh::{NoopRefresh, RefreshNotifier};
pub use scanner::{scan, CandidateFile, ScanError};
pub use store::{MemoryStore, SchemeStore};

#[cfg(windows)]
pub use refresh::SystemRefresh;
#[cfg(windows)]
pub use store::CursorRegistry;
