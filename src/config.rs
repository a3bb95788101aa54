//! Persisted CLI settings
//!
//! A small JSON document remembering the last applied cursor folder, kept
//! purely for display by the `status` command. The scheme engine never reads
//! it; matching decisions are independent of its contents.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the settings file path (~/.config/cursor-applier/settings.json on
/// Linux, %APPDATA%/cursor-applier/settings.json on Windows)
pub fn settings_file() -> Result<PathBuf> {
    let config = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config.join("cursor-applier").join("settings.json"))
}

/// Display-only record of the last apply.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Folder of the last successfully applied cursor set.
    #[serde(default)]
    pub last_applied_path: Option<String>,

    /// When that apply happened.
    #[serde(default)]
    pub applied_at: Option<String>,
}

impl Settings {
    /// Load the settings document; a missing file is an empty document.
    pub fn load() -> Result<Self> {
        Self::load_from(&settings_file()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse: {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&settings_file()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create: {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write: {}", path.display()))?;
        Ok(())
    }
}
