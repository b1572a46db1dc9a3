//! Preset library on disk
//!
//! Presets are human-editable TOML documents, one file per preset, named
//! by preset id:
//!
//! ```text
//! ~/.config/keyslate/presets/
//! ├── vanilla-gnome.toml
//! ├── tiling-power-user.toml
//! └── macos-refugee.toml
//! ```
//!
//! Loading goes through full preset validation, so a library never hands
//! out a structurally invalid [`PresetDefinition`].

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::PersistenceError;
use crate::preset::PresetDefinition;

/// Directory-backed collection of preset files.
pub struct PresetLibrary {
    presets_dir: PathBuf,
}

impl PresetLibrary {
    /// Open a library at the given directory, creating it if needed.
    pub fn new(presets_dir: impl AsRef<Path>) -> Result<Self, PersistenceError> {
        let presets_dir = presets_dir.as_ref().to_path_buf();

        if !presets_dir.exists() {
            fs::create_dir_all(&presets_dir).map_err(|e| {
                PersistenceError::IoError(std::io::Error::new(
                    e.kind(),
                    format!("failed to create presets directory: {}", e),
                ))
            })?;
        }

        Ok(PresetLibrary { presets_dir })
    }

    /// Open the library at the default user location,
    /// `$XDG_CONFIG_HOME/keyslate/presets`.
    pub fn with_default_location() -> Result<Self, PersistenceError> {
        let base = dirs::config_dir().ok_or_else(|| {
            PersistenceError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no user config directory",
            ))
        })?;
        Self::new(base.join("keyslate").join("presets"))
    }

    pub fn presets_dir(&self) -> &Path {
        &self.presets_dir
    }

    fn preset_path(&self, id: &str) -> PathBuf {
        self.presets_dir.join(format!("{}.toml", id))
    }

    /// Sorted ids of every preset file in the library.
    pub fn list(&self) -> Result<Vec<String>, PersistenceError> {
        let mut ids = Vec::new();

        if !self.presets_dir.exists() {
            return Ok(ids);
        }

        for entry in fs::read_dir(&self.presets_dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "toml") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    ids.push(stem.to_string());
                }
            }
        }

        ids.sort();
        Ok(ids)
    }

    /// Load and validate one preset by id.
    pub fn load(&self, id: &str) -> Result<PresetDefinition, PersistenceError> {
        let path = self.preset_path(id);

        if !path.exists() {
            return Err(PersistenceError::PresetNotFound(id.to_string()));
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                PersistenceError::PermissionDenied(path.to_string_lossy().to_string())
            } else {
                PersistenceError::IoError(e)
            }
        })?;

        let preset = PresetDefinition::from_toml_str(&content)?;
        debug!(preset = %preset.id, path = %path.display(), "loaded preset");
        Ok(preset)
    }

    /// Load every preset in the library, skipping files that fail to
    /// parse or validate (a broken file must not hide the rest).
    pub fn load_all(&self) -> Result<Vec<PresetDefinition>, PersistenceError> {
        let mut presets = Vec::new();
        for id in self.list()? {
            match self.load(&id) {
                Ok(preset) => presets.push(preset),
                Err(err) => {
                    tracing::warn!(preset = %id, %err, "skipping unreadable preset");
                }
            }
        }
        Ok(presets)
    }

    /// Write a preset to the library, named by its id.
    pub fn save(&self, preset: &PresetDefinition) -> Result<(), PersistenceError> {
        let path = self.preset_path(&preset.id);

        let document = preset.to_document();
        let content = toml::to_string_pretty(&document).map_err(|e| {
            PersistenceError::SerializationError(format!("failed to serialize preset: {}", e))
        })?;

        fs::write(&path, content)?;
        debug!(preset = %preset.id, path = %path.display(), "saved preset");
        Ok(())
    }

    /// Remove a preset file by id.
    pub fn delete(&self, id: &str) -> Result<(), PersistenceError> {
        let path = self.preset_path(id);

        if !path.exists() {
            return Err(PersistenceError::PresetNotFound(id.to_string()));
        }

        fs::remove_file(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                PersistenceError::PermissionDenied(path.to_string_lossy().to_string())
            } else {
                PersistenceError::IoError(e)
            }
        })
    }
}
