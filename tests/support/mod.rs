#![allow(dead_code)] // shared across test binaries; not every binary uses every helper

//! Shared fixtures: a scriptable in-memory device client and snapshot
//! builders.

use remapkit::client::{DeviceClient, RawKeymapEntry};
use remapkit::config::KeymapConfig;
use remapkit::keycode::{Key, KeyAction, KeyCode};
use remapkit::layout::{KeyShape, LayoutDescription, PhysicalKey};
use remapkit::snapshot::{KeyLocation, KeymapEntry, Snapshot, SnapshotEntry};
use remapkit::{wire, RemapKitError, RkResult};

pub fn loc(row: u8, col: u8, layer: u8) -> KeyLocation {
    KeyLocation { row, col, layer }
}

pub fn normal(key: Key) -> KeyAction {
    KeyAction::Normal(KeyCode::Key(key))
}

pub fn shape_at(row: u8, col: u8) -> KeyShape {
    KeyShape {
        x: col as f32,
        y: row as f32,
        width: 1.0,
        height: 1.0,
        rotation: 0.0,
    }
}

/// Builds a snapshot directly, bypassing the fetch path. Layer count is
/// derived the same way the join does.
pub fn snapshot_of(entries: &[(u8, u8, u8, KeyAction)]) -> Snapshot {
    let layer_count = entries.iter().map(|(_, _, layer, _)| *layer).max().map_or(0, |max| max + 1);
    let entries = entries
        .iter()
        .map(|&(row, col, layer, action)| SnapshotEntry {
            loc: loc(row, col, layer),
            action,
            shape: shape_at(row, col),
        })
        .collect();
    Snapshot::new(entries, layer_count).unwrap()
}

#[derive(Debug)]
pub struct MockDeviceClient {
    pub layout: LayoutDescription,
    pub keymap: Vec<RawKeymapEntry>,
    pub config: KeymapConfig,
    pub fail_writes: bool,
    pub fail_fetch: bool,
    pub write_batches: Vec<Vec<KeymapEntry>>,
    pub disconnected: bool,
}

impl MockDeviceClient {
    /// One physical key per distinct (row, col), in first-seen order; keymap
    /// entries in the given order with wire-encoded actions.
    pub fn with_entries(entries: &[(u8, u8, u8, KeyAction)]) -> Self {
        let mut keys: Vec<PhysicalKey> = Vec::new();
        for &(row, col, _, _) in entries {
            let label = format!("{row},{col}");
            if !keys.iter().any(|key| key.label.as_deref() == Some(label.as_str())) {
                keys.push(PhysicalKey {
                    label: Some(label),
                    shape: shape_at(row, col),
                });
            }
        }
        let keymap = entries
            .iter()
            .map(|&(row, col, layer, action)| RawKeymapEntry {
                row,
                col,
                layer,
                action: wire::encode_action(&action).unwrap(),
            })
            .collect();
        Self {
            layout: LayoutDescription { keys },
            keymap,
            config: KeymapConfig::default(),
            fail_writes: false,
            fail_fetch: false,
            write_batches: Vec::new(),
            disconnected: false,
        }
    }
}

impl DeviceClient for MockDeviceClient {
    fn layout_description(&mut self) -> RkResult<LayoutDescription> {
        if self.fail_fetch {
            return Err(RemapKitError::Transport("mock fetch failure".into()));
        }
        Ok(self.layout.clone())
    }

    fn keymap_entries(&mut self) -> RkResult<Vec<RawKeymapEntry>> {
        if self.fail_fetch {
            return Err(RemapKitError::Transport("mock fetch failure".into()));
        }
        Ok(self.keymap.clone())
    }

    fn write_keymap_entries(&mut self, entries: &[KeymapEntry]) -> RkResult<()> {
        if self.fail_writes {
            return Err(RemapKitError::Transport("mock write failure".into()));
        }
        for entry in entries {
            let target = self
                .keymap
                .iter_mut()
                .find(|raw| {
                    raw.row == entry.loc.row
                        && raw.col == entry.loc.col
                        && raw.layer == entry.loc.layer
                })
                .ok_or_else(|| {
                    RemapKitError::Transport(format!("mock has no key at {}", entry.loc))
                })?;
            target.action = wire::encode_action(&entry.action)?;
        }
        self.write_batches.push(entries.to_vec());
        Ok(())
    }

    fn keymap_config(&mut self) -> RkResult<KeymapConfig> {
        Ok(self.config)
    }

    fn write_keymap_config(&mut self, config: &KeymapConfig) -> RkResult<()> {
        self.config = *config;
        Ok(())
    }

    fn disconnect(&mut self) -> RkResult<()> {
        self.disconnected = true;
        Ok(())
    }
}
