//! Application settings

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_base_url() -> String {
    "http://localhost/admin".to_string()
}

/// Where widget config lives and how admin URLs are built
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Version of the settings format
    #[serde(default = "default_version")]
    pub version: u32,
    /// Widget config store file (None = `widget-config.json` in the data dir)
    #[serde(default)]
    pub store_path: Option<PathBuf>,
    /// Base URL of the admin application
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_version() -> u32 {
    1
}

impl AppSettings {
    /// Load settings from disk, falling back to defaults when none are saved
    pub fn load() -> Result<Self> {
        let path = Self::settings_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from_path(&path)
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::settings_path()?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Store file to use, resolving the default location if unset
    pub fn resolved_store_path(&self) -> Result<PathBuf> {
        match &self.store_path {
            Some(path) => Ok(path.clone()),
            None => Ok(project_dirs()?.data_dir().join("widget-config.json")),
        }
    }

    fn settings_path() -> Result<PathBuf> {
        Ok(project_dirs()?.config_dir().join("settings.json"))
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            store_path: None,
            base_url: default_base_url(),
        }
    }
}

fn project_dirs() -> Result<directories::ProjectDirs> {
    directories::ProjectDirs::from("org", "dashmon", "dashmon")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}
