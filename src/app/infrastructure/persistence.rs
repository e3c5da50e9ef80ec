use std::fs;
use std::path::{Path, PathBuf};

use super::error::Result;
use crate::app::domain::settings::OverlaySettings;

/// Opaque key-value persistence for the overlay store.
pub trait SettingsStore {
    /// Persist the whole store.
    fn export(&mut self, settings: &OverlaySettings) -> Result<()>;

    /// Overwrite `settings` with whatever was persisted. Leaves it untouched
    /// when nothing has been saved yet.
    fn import(&mut self, settings: &mut OverlaySettings) -> Result<()>;
}

/// Pretty-printed JSON file under the user's config directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default location.
    pub fn default_location() -> Self {
        Self::new(Self::default_path())
    }

    /// Get config file path (cross-platform)
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("streamer-overlay");
        path.push("settings.json");
        path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileStore {
    fn export(&mut self, settings: &OverlaySettings) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        tracing::debug!("Saved settings to {}", self.path.display());

        Ok(())
    }

    fn import(&mut self, settings: &mut OverlaySettings) -> Result<()> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No settings at {}, using defaults", self.path.display());
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<OverlaySettings>(&contents) {
            Ok(mut loaded) => {
                loaded.normalize();
                *settings = loaded;
                tracing::info!("Loaded settings from {}", self.path.display());
            }
            Err(e) => {
                tracing::warn!("Failed to parse settings from {}: {}. Using defaults.", self.path.display(), e);
            }
        }
        Ok(())
    }
}

/// Keeps the last exported store in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Option<OverlaySettings>,
    exports: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `settings`, as if saved by an earlier run.
    pub fn with_saved(settings: OverlaySettings) -> Self {
        Self { saved: Some(settings), exports: 0 }
    }

    pub fn saved(&self) -> Option<&OverlaySettings> {
        self.saved.as_ref()
    }

    pub fn exports(&self) -> usize {
        self.exports
    }
}

impl SettingsStore for MemoryStore {
    fn export(&mut self, settings: &OverlaySettings) -> Result<()> {
        self.saved = Some(settings.clone());
        self.exports += 1;
        Ok(())
    }

    fn import(&mut self, settings: &mut OverlaySettings) -> Result<()> {
        if let Some(saved) = &self.saved {
            *settings = saved.clone();
        }
        Ok(())
    }
}
