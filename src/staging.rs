//! Staging buffer: the editable working copy of the device keymap.
//!
//! The buffer owns a clone of its baseline snapshot and a parallel list of
//! staged entries. The `changed` flag is never bookkept independently: every
//! mutation recomputes it by structural comparison against the baseline
//! action, so re-entering the original value clears the flag no matter how
//! many edits happened in between.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::keycode::KeyAction;
use crate::layout::KeyShape;
use crate::snapshot::{KeyLocation, Snapshot};
use crate::{RemapKitError, RkResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StagingEntry {
    pub loc: KeyLocation,
    pub action: KeyAction,
    /// True iff `action` differs structurally from the baseline action.
    pub changed: bool,
    pub shape: KeyShape,
}

/// Invariant: `entries[i].loc == baseline.entries()[i].loc` for every index.
/// `stage` establishes this and no mutation touches a location.
#[derive(Debug, Clone, PartialEq)]
pub struct StagingBuffer {
    baseline: Snapshot,
    entries: Vec<StagingEntry>,
}

impl StagingBuffer {
    pub fn stage(snapshot: &Snapshot) -> Self {
        let entries = snapshot
            .entries()
            .iter()
            .map(|entry| StagingEntry {
                loc: entry.loc,
                action: entry.action,
                changed: false,
                shape: entry.shape,
            })
            .collect();
        Self {
            baseline: snapshot.clone(),
            entries,
        }
    }

    pub fn baseline(&self) -> &Snapshot {
        &self.baseline
    }

    pub fn entries(&self) -> &[StagingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry_at(&self, loc: KeyLocation) -> Option<&StagingEntry> {
        self.entries.iter().find(|entry| entry.loc == loc)
    }

    pub fn changed_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.changed).count()
    }

    /// Locations are unique by construction; zero or multiple matches mean
    /// the invariant broke upstream and is reported as such.
    fn unique_index(&self, loc: KeyLocation) -> RkResult<usize> {
        let mut found = None;
        let mut matches = 0usize;
        for (idx, entry) in self.entries.iter().enumerate() {
            if entry.loc == loc {
                matches += 1;
                found = Some(idx);
            }
        }
        match (matches, found) {
            (1, Some(idx)) => Ok(idx),
            _ => {
                warn!(%loc, matches, "staging buffer lookup violated location uniqueness");
                Err(RemapKitError::NotFound {
                    row: loc.row,
                    col: loc.col,
                    layer: loc.layer,
                    matches,
                })
            }
        }
    }

    /// Stages `action` at `loc`. `changed` is recomputed against the baseline
    /// action, not the previously staged value.
    pub fn set_action(&mut self, loc: KeyLocation, action: KeyAction) -> RkResult<()> {
        if let Some(layer) = action.max_layer_ref() {
            if layer >= self.baseline.layer_count() {
                return Err(RemapKitError::Validation(format!(
                    "action {action} references layer {layer}, but the keymap has {} layer(s)",
                    self.baseline.layer_count()
                )));
            }
        }
        let idx = self.unique_index(loc)?;
        let baseline_action = self.baseline.entries()[idx].action;
        let entry = &mut self.entries[idx];
        entry.action = action;
        entry.changed = action != baseline_action;
        debug!(%loc, %action, changed = entry.changed, "staged action");
        Ok(())
    }

    /// Resets the entry at `loc` to its baseline action. Not an error if it
    /// was already unchanged.
    pub fn restore(&mut self, loc: KeyLocation) -> RkResult<()> {
        let idx = self.unique_index(loc)?;
        let baseline_action = self.baseline.entries()[idx].action;
        let entry = &mut self.entries[idx];
        entry.action = baseline_action;
        entry.changed = false;
        Ok(())
    }

    /// Discards every staged edit.
    pub fn clear_all(&mut self) {
        for (entry, baseline) in self.entries.iter_mut().zip(self.baseline.entries()) {
            entry.action = baseline.action;
            entry.changed = false;
        }
    }

    /// Adopts a refetched snapshot as the new baseline and restages. After a
    /// successful commit this clears `changed` on every written entry, since
    /// the new baseline equals the written value.
    pub fn resync(&mut self, snapshot: &Snapshot) {
        *self = Self::stage(snapshot);
    }
}
