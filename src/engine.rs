//! Clean-slate reconciliation engine
//!
//! Applying a preset is a two-phase state transition over the live
//! store: first every in-scope entry is unconditionally disabled, then
//! exactly the preset's assignments are written. Protected entries are
//! never written in either phase. The disable phase covers the entire
//! in-scope set before any assignment is applied; that ordering is what
//! guarantees no residual binding from a previous configuration state
//! survives.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use tracing::{debug, info, warn};

use crate::accel::Accelerator;
use crate::conflict::{Conflict, ConflictDetector};
use crate::error::EngineError;
use crate::preset::PresetDefinition;
use crate::store::{BindingEntry, BindingStore, EntryId};

/// Which phase a write failure occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Disable,
    Apply,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Disable => write!(f, "disable"),
            Phase::Apply => write!(f, "apply"),
        }
    }
}

/// A per-entry write failure recorded during reconciliation.
///
/// Individual rejections (read-only or deprecated keys) do not abort the
/// pass; they are accumulated here so the caller can present them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFailure {
    pub id: EntryId,
    pub phase: Phase,
    pub error: String,
}

/// Outcome of applying a preset.
///
/// `disabled`, `already_disabled`, `reassigned` and the `protected` keys
/// partition the in-scope key set together with the failed ids: every
/// enumerated entry lands in exactly one of them. An entry cleared in
/// the disable phase and then written in the apply phase counts as
/// reassigned only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciliationResult {
    /// Entries that held a binding and were cleared, with no assignment.
    pub disabled: BTreeSet<EntryId>,
    /// Entries that were already disabled before the pass.
    pub already_disabled: BTreeSet<EntryId>,
    /// Entries written by an assignment in the apply phase.
    pub reassigned: BTreeSet<EntryId>,
    /// Protected entries with their untouched live values, snapshotted
    /// before any write.
    pub protected: BTreeMap<EntryId, Vec<Accelerator>>,
    /// Writes that the backend rejected, per phase.
    pub failed: Vec<WriteFailure>,
}

impl ReconciliationResult {
    /// Whether every attempted write succeeded.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    /// Every entry id the pass accounted for, across all outcomes.
    pub fn covered_ids(&self) -> BTreeSet<EntryId> {
        let mut ids: BTreeSet<EntryId> = self.disabled.clone();
        ids.extend(self.already_disabled.iter().cloned());
        ids.extend(self.reassigned.iter().cloned());
        ids.extend(self.protected.keys().cloned());
        ids.extend(self.failed.iter().map(|f| f.id.clone()));
        ids
    }
}

/// Reconciliation engine over an injected binding store.
///
/// Synchronous by design; safe to call from any thread, with no affinity
/// to a UI main loop. Concurrent invocations against the same store are
/// out of contract and must be serialized by the caller.
pub struct ReconcileEngine<'a> {
    store: &'a dyn BindingStore,
}

impl<'a> ReconcileEngine<'a> {
    pub fn new(store: &'a dyn BindingStore) -> Self {
        ReconcileEngine { store }
    }

    /// All binding entries the store can enumerate: fixed schemas plus
    /// dynamically discovered custom keybindings.
    pub fn entries(&self) -> Result<Vec<BindingEntry>, EngineError> {
        let mut entries = self.store.read_all()?;
        entries.extend(self.store.list_custom_keybindings()?);
        Ok(entries)
    }

    /// Capture the live configuration as a preset.
    ///
    /// The returned definition assigns every enumerable entry its current
    /// value (disabled entries included, as explicit empty assignments),
    /// so applying it later restores today's state exactly.
    pub fn snapshot_preset(
        &self,
        id: impl Into<String>,
        label: impl Into<String>,
    ) -> Result<PresetDefinition, EngineError> {
        let entries = self.entries()?;
        let preset = PresetDefinition::from_entries(id, label, &entries);
        debug!(preset = %preset.id, assignments = preset.assignments.len(), "captured live state");
        Ok(preset)
    }

    /// Read path for the UI: current conflict groups across all entries.
    pub fn find_conflicts(&self) -> Result<Vec<Conflict>, EngineError> {
        let entries = self.entries()?;
        let conflicts = ConflictDetector::detect(&entries);
        debug!(groups = conflicts.len(), "conflict scan complete");
        Ok(conflicts)
    }

    /// Apply a preset with the clean-slate algorithm.
    ///
    /// The preset is re-validated first and the store read once; an
    /// unreachable backend or invalid preset aborts before any mutation.
    /// Per-entry write rejections are recorded and the phase continues;
    /// only a store-wide outage mid-pass aborts.
    pub fn apply(&self, preset: &PresetDefinition) -> Result<ReconciliationResult, EngineError> {
        if let Some(error) = preset.validate().into_iter().next() {
            return Err(error.into());
        }

        let live: BTreeMap<EntryId, Vec<Accelerator>> = self
            .entries()?
            .into_iter()
            .map(|entry| (entry.id, entry.accelerators))
            .collect();

        let mut result = ReconciliationResult::default();
        for id in &preset.protected {
            if let Some(value) = live.get(id) {
                result.protected.insert(id.clone(), value.clone());
            }
        }

        let in_scope: Vec<&EntryId> = live
            .keys()
            .filter(|id| !preset.protected.contains(*id))
            .collect();
        info!(
            preset = %preset.id,
            in_scope = in_scope.len(),
            protected = result.protected.len(),
            "starting clean-slate reconciliation"
        );

        // Disable phase: the entire in-scope set, unconditionally, before
        // any assignment is written.
        for id in &in_scope {
            let was_disabled = live[*id].is_empty();
            match self.store.write(id, &[]) {
                Ok(()) => {
                    if was_disabled {
                        result.already_disabled.insert((*id).clone());
                    } else {
                        result.disabled.insert((*id).clone());
                    }
                }
                Err(error) if error.is_fatal() => return Err(error.into()),
                Err(error) => {
                    warn!(entry = %id, %error, "disable write rejected");
                    result.failed.push(WriteFailure {
                        id: (*id).clone(),
                        phase: Phase::Disable,
                        error: error.to_string(),
                    });
                }
            }
        }

        // Apply phase, in the preset's assignment order.
        for assignment in &preset.assignments {
            match self.store.write(&assignment.id, &assignment.bindings) {
                Ok(()) => {
                    result.disabled.remove(&assignment.id);
                    result.already_disabled.remove(&assignment.id);
                    result.reassigned.insert(assignment.id.clone());
                }
                Err(error) if error.is_fatal() => return Err(error.into()),
                Err(error) => {
                    warn!(entry = %assignment.id, %error, "assignment write rejected");
                    result.failed.push(WriteFailure {
                        id: assignment.id.clone(),
                        phase: Phase::Apply,
                        error: error.to_string(),
                    });
                }
            }
        }

        info!(
            preset = %preset.id,
            disabled = result.disabled.len(),
            already_disabled = result.already_disabled.len(),
            reassigned = result.reassigned.len(),
            failed = result.failed.len(),
            "reconciliation complete"
        );
        Ok(result)
    }
}
