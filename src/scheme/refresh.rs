//! Live reload of the active cursor scheme
//!
//! After the registry is updated, Windows has to be told to re-read the
//! scheme or the change waits for the next logon. The broadcast is
//! best-effort: a failure is surfaced as a diagnostic, never as an error
//! that fails the apply or reset that triggered it.

use thiserror::Error;

/// The reload broadcast could not be delivered.
#[derive(Debug, Error)]
#[error("cursor scheme reload broadcast failed: {0}")]
pub struct RefreshError(pub String);

/// Asks the OS to reload the cursor scheme immediately.
pub trait RefreshNotifier {
    fn trigger(&self) -> Result<(), RefreshError>;
}

/// Notifier that does nothing. Used by `--dry-run`.
#[derive(Debug, Default)]
pub struct NoopRefresh;

impl RefreshNotifier for NoopRefresh {
    fn trigger(&self) -> Result<(), RefreshError> {
        Ok(())
    }
}

/// Notifier backed by `SystemParametersInfoW(SPI_SETCURSORS, ...)`.
#[cfg(windows)]
#[derive(Debug, Default)]
pub struct SystemRefresh;

#[cfg(windows)]
impl RefreshNotifier for SystemRefresh {
    fn trigger(&self) -> Result<(), RefreshError> {
        use windows::Win32::UI::WindowsAndMessaging::{
            SystemParametersInfoW, SPIF_SENDCHANGE, SPIF_UPDATEINIFILE, SPI_SETCURSORS,
        };

        // SPIF_UPDATEINIFILE persists the change to the user profile,
        // SPIF_SENDCHANGE broadcasts it to running applications. Always both.
        unsafe { SystemParametersInfoW(SPI_SETCURSORS, 0, None, SPIF_UPDATEINIFILE | SPIF_SENDCHANGE) }
            .map_err(|e| RefreshError(e.to_string()))
    }
}
