//! Fetched keymap baseline.
//!
//! A [`Snapshot`] is the immutable result of joining the physical layout
//! against the device keymap: one entry per (layout key x layer), ordered by
//! layout-key iteration order and then ascending layer. It is only ever
//! replaced wholesale by a refetch; edits happen in the staging buffer.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::client::{DeviceClient, RawKeymapEntry};
use crate::keycode::KeyAction;
use crate::layout::{KeyShape, LayoutDescription};
use crate::{wire, RemapKitError, RkResult};

/// One programmable cell. Equality is structural on all three fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyLocation {
    pub row: u8,
    pub col: u8,
    pub layer: u8,
}

impl fmt::Display for KeyLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer {} row {} col {}", self.layer, self.row, self.col)
    }
}

/// The unit of both read and write.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeymapEntry {
    pub loc: KeyLocation,
    pub action: KeyAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub loc: KeyLocation,
    pub action: KeyAction,
    /// Geometry joined in from the layout; presentation only, never action
    /// semantics.
    pub shape: KeyShape,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    entries: Vec<SnapshotEntry>,
    layer_count: u8,
}

impl Snapshot {
    /// Locations must be unique; the join step guarantees this and everything
    /// downstream relies on it.
    pub fn new(entries: Vec<SnapshotEntry>, layer_count: u8) -> RkResult<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.loc) {
                return Err(RemapKitError::Join(format!(
                    "duplicate keymap entry at {}",
                    entry.loc
                )));
            }
        }
        Ok(Self {
            entries,
            layer_count,
        })
    }

    pub fn entries(&self) -> &[SnapshotEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn layer_count(&self) -> u8 {
        self.layer_count
    }

    pub fn action_at(&self, loc: KeyLocation) -> Option<KeyAction> {
        self.entries
            .iter()
            .find(|entry| entry.loc == loc)
            .map(|entry| entry.action)
    }
}

/// What to do with a layout key that has no keymap entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinPolicy {
    /// Fail the fetch.
    #[default]
    Strict,
    /// Omit the key and record a warning.
    SkipUnmatched,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchWarning {
    /// A layout key matched no keymap entries (SkipUnmatched only).
    UnmatchedKey { row: u8, col: u8 },
    /// The device reported an action variant this build does not know. The
    /// entry is excluded from the editable set, never coerced to `Inherit`.
    UnrecognizedAction { loc: KeyLocation, detail: String },
}

impl fmt::Display for FetchWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchWarning::UnmatchedKey { row, col } => {
                write!(f, "layout key \"{row},{col}\" has no keymap entries")
            }
            FetchWarning::UnrecognizedAction { loc, detail } => {
                write!(f, "unrecognized action at {loc}: {detail}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub snapshot: Snapshot,
    pub warnings: Vec<FetchWarning>,
}

/// Fetches layout and keymap from the device and joins them.
pub fn fetch_snapshot<C: DeviceClient + ?Sized>(
    client: &mut C,
    policy: JoinPolicy,
) -> RkResult<FetchOutcome> {
    let layout = client.layout_description()?;
    let raw = client.keymap_entries()?;
    join(&layout, &raw, policy)
}

fn join(
    layout: &LayoutDescription,
    raw: &[RawKeymapEntry],
    policy: JoinPolicy,
) -> RkResult<FetchOutcome> {
    let layer_count = raw.iter().map(|entry| entry.layer).max().map_or(0, |max| max + 1);
    let mut entries = Vec::new();
    let mut warnings = Vec::new();

    for key in &layout.keys {
        let (row, col) = key.matrix_position()?;
        let mut matches: Vec<&RawKeymapEntry> = raw
            .iter()
            .filter(|entry| entry.row == row && entry.col == col)
            .collect();
        if matches.is_empty() {
            match policy {
                JoinPolicy::Strict => {
                    return Err(RemapKitError::Join(format!(
                        "layout key \"{row},{col}\" has no keymap entries"
                    )));
                }
                JoinPolicy::SkipUnmatched => {
                    warn!(row, col, "layout key has no keymap entries; skipping");
                    warnings.push(FetchWarning::UnmatchedKey { row, col });
                    continue;
                }
            }
        }
        matches.sort_by_key(|entry| entry.layer);

        for raw_entry in matches {
            let loc = KeyLocation {
                row: raw_entry.row,
                col: raw_entry.col,
                layer: raw_entry.layer,
            };
            match wire::decode_action(&raw_entry.action) {
                Ok(action) => entries.push(SnapshotEntry {
                    loc,
                    action,
                    shape: key.shape,
                }),
                Err(RemapKitError::UnknownVariant { kind, tag }) => {
                    warn!(%loc, kind, %tag, "unrecognized action variant; entry excluded");
                    warnings.push(FetchWarning::UnrecognizedAction {
                        loc,
                        detail: format!("{kind} variant {tag:?}"),
                    });
                }
                Err(other) => return Err(other),
            }
        }
    }

    let snapshot = Snapshot::new(entries, layer_count)?;
    debug!(
        entries = snapshot.len(),
        layers = layer_count,
        warnings = warnings.len(),
        "joined layout and keymap"
    );
    Ok(FetchOutcome { snapshot, warnings })
}
