//! Preset definitions and validation
//!
//! A preset is a versioned, named profile of shortcut assignments plus a
//! protected set the clean-slate pass must leave untouched. Presets live
//! on disk as TOML documents:
//!
//! ```toml
//! [preset]
//! id = "vanilla-gnome"
//! label = "Vanilla GNOME"
//! version = "1"
//! protected = ["org.gnome.settings-daemon.plugins.media-keys.volume-up"]
//!
//! [shortcuts]
//! "org.gnome.desktop.wm.keybindings.close" = ["<Alt>F4"]
//! "org.gnome.desktop.wm.keybindings.minimize" = []
//! ```
//!
//! An empty accelerator list assigns the disabled sentinel. Structural
//! problems are rejected at load time, before any store mutation.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::accel::{Accelerator, Binding};
use crate::error::PresetError;
use crate::store::{BindingEntry, EntryId};

/// One declared assignment: an entry and the accelerators it should hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetAssignment {
    pub id: EntryId,
    /// Empty = assign the disabled sentinel.
    pub bindings: Vec<Accelerator>,
}

/// A validated preset profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetDefinition {
    pub id: String,
    pub label: String,
    pub version: String,
    /// Assignments in apply order (sorted by storage key; the document
    /// form is a sorted map, which makes the order deterministic).
    pub assignments: Vec<PresetAssignment>,
    /// Entries never written in any phase, even though in scope.
    pub protected: BTreeSet<EntryId>,
}

/// Raw TOML document form of a preset file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetDocument {
    pub preset: PresetMeta,
    #[serde(default)]
    pub shortcuts: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetMeta {
    pub id: String,
    pub label: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub protected: Vec<String>,
}

fn default_version() -> String {
    "1".to_string()
}

impl PresetDefinition {
    /// Parse and validate a TOML preset document.
    pub fn from_toml_str(content: &str) -> Result<Self, PresetError> {
        let document: PresetDocument =
            toml::from_str(content).map_err(|e| PresetError::Document(e.to_string()))?;
        Self::from_document(document)
    }

    /// Convert a parsed document into a validated definition.
    ///
    /// Fails on an empty preset id, a malformed storage key, a malformed
    /// accelerator, or a key that is both assigned and protected
    /// (ambiguous precedence).
    pub fn from_document(document: PresetDocument) -> Result<Self, PresetError> {
        if document.preset.id.trim().is_empty() {
            return Err(PresetError::EmptyId);
        }

        let mut protected = BTreeSet::new();
        for raw in &document.preset.protected {
            protected.insert(raw.parse::<EntryId>()?);
        }

        let mut assignments = Vec::with_capacity(document.shortcuts.len());
        for (storage_key, raw_accels) in &document.shortcuts {
            let id: EntryId = storage_key.parse()?;
            if protected.contains(&id) {
                return Err(PresetError::ProtectedOverlap(id.to_string()));
            }

            let mut bindings = Vec::new();
            for raw in raw_accels {
                match Binding::parse(raw).map_err(|source| PresetError::InvalidAccelerator {
                    key: id.to_string(),
                    source,
                })? {
                    Binding::Bound(accel) => bindings.push(accel),
                    Binding::Disabled => {}
                }
            }
            assignments.push(PresetAssignment { id, bindings });
        }

        Ok(PresetDefinition {
            id: document.preset.id,
            label: document.preset.label,
            version: document.preset.version,
            assignments,
            protected,
        })
    }

    /// Capture live binding entries as a preset, so the current
    /// configuration can be saved to the library and re-applied later.
    ///
    /// Every entry becomes an assignment, in storage-key order. Disabled
    /// entries are captured as explicit empty assignments, so re-applying
    /// the preset pins them off. The protected set starts empty.
    pub fn from_entries(
        id: impl Into<String>,
        label: impl Into<String>,
        entries: &[BindingEntry],
    ) -> Self {
        let mut assignments: Vec<PresetAssignment> = entries
            .iter()
            .map(|entry| PresetAssignment {
                id: entry.id.clone(),
                bindings: entry.accelerators.clone(),
            })
            .collect();
        assignments.sort_by(|a, b| a.id.cmp(&b.id));

        PresetDefinition {
            id: id.into(),
            label: label.into(),
            version: default_version(),
            assignments,
            protected: BTreeSet::new(),
        }
    }

    /// Convert back to the on-disk document form.
    pub fn to_document(&self) -> PresetDocument {
        let shortcuts = self
            .assignments
            .iter()
            .map(|a| {
                let raw = a.bindings.iter().map(|b| b.to_string()).collect();
                (a.id.to_string(), raw)
            })
            .collect();

        PresetDocument {
            preset: PresetMeta {
                id: self.id.clone(),
                label: self.label.clone(),
                version: self.version.clone(),
                protected: self.protected.iter().map(|id| id.to_string()).collect(),
            },
            shortcuts,
        }
    }

    /// Non-throwing pre-flight validation for tooling and tests.
    ///
    /// Catches structural problems that can arise when a definition is
    /// built programmatically rather than loaded through
    /// [`from_document`](Self::from_document): duplicate assignment
    /// targets, assignment/protected overlap, empty id.
    pub fn validate(&self) -> Vec<PresetError> {
        let mut errors = Vec::new();

        if self.id.trim().is_empty() {
            errors.push(PresetError::EmptyId);
        }

        let mut seen = BTreeSet::new();
        for assignment in &self.assignments {
            if !seen.insert(&assignment.id) {
                errors.push(PresetError::DuplicateAssignment(assignment.id.to_string()));
            }
            if self.protected.contains(&assignment.id) {
                errors.push(PresetError::ProtectedOverlap(assignment.id.to_string()));
            }
        }

        errors
    }
}
