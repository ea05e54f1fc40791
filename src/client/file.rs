//! File-backed device client.
//!
//! Operates on a recorded device dump: a JSON file holding the KLE layout,
//! the keymap entries and the tuning config. Used by the CLI and as a device
//! simulator in tests. Writes are staged against a candidate dump and only
//! adopted once the file hits disk, so a failed write never leaves the
//! simulated device half-applied.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{DeviceClient, RawKeymapEntry};
use crate::config::KeymapConfig;
use crate::layout::LayoutDescription;
use crate::snapshot::KeymapEntry;
use crate::{wire, RemapKitError, RkResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DeviceDump {
    layout: serde_json::Value,
    keymap: Vec<RawKeymapEntry>,
    config: KeymapConfig,
}

#[derive(Debug)]
pub struct FileClient {
    path: PathBuf,
    dump: DeviceDump,
}

impl FileClient {
    pub fn open<P: AsRef<Path>>(path: P) -> RkResult<Self> {
        let content = fs::read_to_string(&path)?;
        let dump: DeviceDump = serde_json::from_str(&content)?;
        Ok(Self {
            path: path.as_ref().to_path_buf(),
            dump,
        })
    }

    fn adopt(&mut self, candidate: DeviceDump) -> RkResult<()> {
        let content = serde_json::to_string_pretty(&candidate)?;
        fs::write(&self.path, content)?;
        self.dump = candidate;
        Ok(())
    }
}

impl DeviceClient for FileClient {
    fn layout_description(&mut self) -> RkResult<LayoutDescription> {
        LayoutDescription::from_kle_value(self.dump.layout.clone())
    }

    fn keymap_entries(&mut self) -> RkResult<Vec<RawKeymapEntry>> {
        Ok(self.dump.keymap.clone())
    }

    fn write_keymap_entries(&mut self, entries: &[KeymapEntry]) -> RkResult<()> {
        let mut candidate = self.dump.clone();
        for entry in entries {
            let target = candidate
                .keymap
                .iter_mut()
                .find(|raw| {
                    raw.row == entry.loc.row
                        && raw.col == entry.loc.col
                        && raw.layer == entry.loc.layer
                })
                .ok_or_else(|| {
                    RemapKitError::Transport(format!("device has no key at {}", entry.loc))
                })?;
            target.action = wire::encode_action(&entry.action)?;
        }
        self.adopt(candidate)
    }

    fn keymap_config(&mut self) -> RkResult<KeymapConfig> {
        Ok(self.dump.config)
    }

    fn write_keymap_config(&mut self, config: &KeymapConfig) -> RkResult<()> {
        let mut candidate = self.dump.clone();
        candidate.config = *config;
        self.adopt(candidate)
    }

    fn disconnect(&mut self) -> RkResult<()> {
        Ok(())
    }
}
