//! Persisted UI state: the last-selected range preset, kept as a small JSON
//! file under the project state directory so it survives restarts.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::range::RangePreset;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiState {
    pub range: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            range: RangePreset::default().key().to_string(),
        }
    }
}

impl UiState {
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "lapview", "lapview")
            .context("cannot locate state directory")?;
        Ok(dirs
            .state_dir()
            .unwrap_or_else(|| dirs.data_dir())
            .join("ui-state.json"))
    }

    /// Missing or unreadable state yields `None`; the caller supplies its
    /// own default (the configured range on a fresh install).
    pub fn load(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating state directory {parent:?}"))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("writing ui state to {path:?}"))?;
        Ok(())
    }

    pub fn preset(&self) -> RangePreset {
        RangePreset::from_key(&self.range)
    }
}
