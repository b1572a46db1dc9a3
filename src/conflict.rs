//! Conflict detection between binding entries
//!
//! Two entries conflict when they resolve to the same canonical
//! accelerator. The detector reports one [`Conflict`] per accelerator
//! with the full sorted member list (rather than all pairwise
//! combinations, which is quadratic in group size); callers that want
//! pairs expand a group with [`Conflict::pairs`].

use std::collections::BTreeMap;

use crate::accel::Accelerator;
use crate::store::{BindingEntry, EntryId};

/// A group of entries that currently share one canonical accelerator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub accelerator: Accelerator,
    /// All entries bound to the accelerator, sorted. Always >= 2.
    pub members: Vec<EntryId>,
}

impl Conflict {
    /// Expand the group into all unordered member pairs.
    pub fn pairs(&self) -> Vec<(&EntryId, &EntryId)> {
        let mut pairs = Vec::new();
        for (i, a) in self.members.iter().enumerate() {
            for b in &self.members[i + 1..] {
                pairs.push((a, b));
            }
        }
        pairs
    }
}

/// Detects conflicts in a set of binding entries.
pub struct ConflictDetector;

impl ConflictDetector {
    /// Find all conflict groups.
    ///
    /// An entry with multiple accelerators contributes each one
    /// independently; disabled entries never conflict. Output is sorted
    /// by canonical accelerator string, members by entry id, so results
    /// are deterministic.
    pub fn detect(entries: &[BindingEntry]) -> Vec<Conflict> {
        let mut by_accel: BTreeMap<String, (Accelerator, Vec<EntryId>)> = BTreeMap::new();

        for entry in entries {
            for accel in &entry.accelerators {
                by_accel
                    .entry(accel.to_string())
                    .or_insert_with(|| (accel.clone(), Vec::new()))
                    .1
                    .push(entry.id.clone());
            }
        }

        by_accel
            .into_values()
            .filter(|(_, members)| members.len() > 1)
            .map(|(accelerator, mut members)| {
                members.sort();
                members.dedup();
                Conflict {
                    accelerator,
                    members,
                }
            })
            .filter(|conflict| conflict.members.len() > 1)
            .collect()
    }
}
