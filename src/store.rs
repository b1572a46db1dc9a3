//! Binding store adapter
//!
//! The configuration backend is external mutable shared state, addressed
//! by schema id + key name. All access goes through the [`BindingStore`]
//! trait so callers inject the backend instead of reaching for a
//! singleton; [`MemoryStore`] is the deterministic in-memory backend used
//! by tests and tooling.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

use tracing::warn;

use crate::accel::{Accelerator, Binding};
use crate::error::{PresetError, StoreError};
use crate::schema::{self, CUSTOM_BINDING_SCHEMA};

/// Identifies one configurable binding slot: a (schema, key) pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId {
    pub schema_id: String,
    pub key_name: String,
}

impl EntryId {
    pub fn new(schema_id: impl Into<String>, key_name: impl Into<String>) -> Self {
        EntryId {
            schema_id: schema_id.into(),
            key_name: key_name.into(),
        }
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.schema_id, self.key_name)
    }
}

impl FromStr for EntryId {
    type Err = PresetError;

    /// Parse the storage-key form `schema.key` used by preset files.
    /// Schema ids contain dots, key names do not, so the rightmost dot
    /// is the separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once('.') {
            Some((schema, key)) if !schema.is_empty() && !key.is_empty() => {
                Ok(EntryId::new(schema, key))
            }
            _ => Err(PresetError::InvalidStorageKey(s.to_string())),
        }
    }
}

/// One binding slot with its current accelerators.
///
/// An empty accelerator list is the disabled state. Entries are read
/// fresh on every reconciliation pass; the backend can be mutated by
/// other processes at any time, so they are never cached across passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingEntry {
    pub id: EntryId,
    pub accelerators: Vec<Accelerator>,
}

impl BindingEntry {
    pub fn new(id: EntryId, accelerators: Vec<Accelerator>) -> Self {
        BindingEntry { id, accelerators }
    }

    /// Normalize raw store values into an entry. Sentinel strings are
    /// skipped; malformed values left behind by other writers are logged
    /// and skipped rather than failing the whole read.
    pub fn from_raw(id: EntryId, raw: &[String]) -> Self {
        let mut accelerators = Vec::new();
        for value in raw {
            match Binding::parse(value) {
                Ok(Binding::Bound(accel)) => accelerators.push(accel),
                Ok(Binding::Disabled) => {}
                Err(err) => {
                    warn!(entry = %id, value = %value, %err, "skipping malformed accelerator");
                }
            }
        }
        BindingEntry { id, accelerators }
    }

    pub fn is_disabled(&self) -> bool {
        self.accelerators.is_empty()
    }
}

/// Abstraction over the live configuration backend.
///
/// Reads and writes are blocking I/O; the engine is callable from any
/// thread, and callers on a UI loop are expected to run it off that loop.
/// `write` is atomic per entry; there are no cross-entry transactions.
pub trait BindingStore: Send + Sync {
    /// Schema identifiers known to carry keybinding-typed keys.
    fn list_schemas(&self) -> Result<Vec<String>, StoreError>;

    /// Every binding entry across all listed schemas. Side-effect free.
    fn read_all(&self) -> Result<Vec<BindingEntry>, StoreError>;

    /// Write an entry's accelerators; an empty slice writes the disabled
    /// sentinel.
    fn write(&self, id: &EntryId, accelerators: &[Accelerator]) -> Result<(), StoreError>;

    /// User-defined launcher bindings under the custom path prefix. The
    /// set of paths is discovered at call time, never assumed.
    fn list_custom_keybindings(&self) -> Result<Vec<BindingEntry>, StoreError>;
}

#[derive(Debug, Default)]
struct MemoryInner {
    entries: BTreeMap<EntryId, Vec<Accelerator>>,
    read_only: BTreeSet<EntryId>,
    unavailable: bool,
}

/// In-memory binding store with deterministic contents.
///
/// Entries under [`CUSTOM_BINDING_SCHEMA`] are reported through
/// `list_custom_keybindings`, everything else through `read_all`,
/// mirroring how the live backend splits fixed schemas from dynamic
/// custom paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry from raw accelerator strings. Panics on malformed
    /// input; seeding is test/tooling setup, not a runtime path.
    pub fn seed(&self, id: EntryId, raw: &[&str]) {
        let accelerators = raw
            .iter()
            .filter_map(|value| match Binding::parse(value) {
                Ok(Binding::Bound(accel)) => Some(accel),
                Ok(Binding::Disabled) => None,
                Err(err) => panic!("seed: malformed accelerator {value:?}: {err}"),
            })
            .collect();
        self.inner.lock().unwrap().entries.insert(id, accelerators);
    }

    /// Seed a custom launcher binding at the given sub-path.
    pub fn seed_custom(&self, path: &str, raw: &[&str]) {
        self.seed(EntryId::new(CUSTOM_BINDING_SCHEMA, path), raw);
    }

    /// Mark an entry read-only; writes to it fail with `WriteRejected`.
    pub fn set_read_only(&self, id: EntryId) {
        self.inner.lock().unwrap().read_only.insert(id);
    }

    /// Simulate total backend outage; every operation fails.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.lock().unwrap().unavailable = unavailable;
    }

    /// Current accelerators for an entry, for assertions.
    pub fn get(&self, id: &EntryId) -> Option<Vec<Accelerator>> {
        self.inner.lock().unwrap().entries.get(id).cloned()
    }

    /// Full snapshot of the store, for state-equality assertions.
    pub fn snapshot(&self) -> BTreeMap<EntryId, Vec<Accelerator>> {
        self.inner.lock().unwrap().entries.clone()
    }

    fn check_available(inner: &MemoryInner) -> Result<(), StoreError> {
        if inner.unavailable {
            return Err(StoreError::Unavailable("memory store offline".to_string()));
        }
        Ok(())
    }
}

impl BindingStore for MemoryStore {
    fn list_schemas(&self) -> Result<Vec<String>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Self::check_available(&inner)?;
        let mut schemas: Vec<String> = inner
            .entries
            .keys()
            .filter(|id| id.schema_id != CUSTOM_BINDING_SCHEMA)
            .map(|id| id.schema_id.clone())
            .collect();
        schemas.dedup();
        // Keep only namespaces from the fixed registry plus anything seeded
        // beyond it; the fixed set comes first in registry order.
        schemas.sort_by_key(|s| {
            schema::KNOWN_SCHEMAS
                .iter()
                .position(|d| d.id == s)
                .unwrap_or(usize::MAX)
        });
        Ok(schemas)
    }

    fn read_all(&self) -> Result<Vec<BindingEntry>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Self::check_available(&inner)?;
        Ok(inner
            .entries
            .iter()
            .filter(|(id, _)| id.schema_id != CUSTOM_BINDING_SCHEMA)
            .map(|(id, accels)| BindingEntry::new(id.clone(), accels.clone()))
            .collect())
    }

    fn write(&self, id: &EntryId, accelerators: &[Accelerator]) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        Self::check_available(&inner)?;
        if inner.read_only.contains(id) {
            return Err(StoreError::WriteRejected(
                id.to_string(),
                "key is read-only".to_string(),
            ));
        }
        match inner.entries.get_mut(id) {
            Some(slot) => {
                *slot = accelerators.to_vec();
                Ok(())
            }
            None => Err(StoreError::KeyNotFound(id.to_string())),
        }
    }

    fn list_custom_keybindings(&self) -> Result<Vec<BindingEntry>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Self::check_available(&inner)?;
        Ok(inner
            .entries
            .iter()
            .filter(|(id, _)| id.schema_id == CUSTOM_BINDING_SCHEMA)
            .map(|(id, accels)| BindingEntry::new(id.clone(), accels.clone()))
            .collect())
    }
}
