//! Device client seam.
//!
//! The engine talks to the keyboard only through [`DeviceClient`]; the actual
//! transport (HID, serial, or a recorded dump) lives behind it. Reads hand
//! back wire-encoded actions so that unknown variants survive to the join
//! step instead of failing the whole fetch.

use serde::{Deserialize, Serialize};

use crate::config::KeymapConfig;
use crate::layout::LayoutDescription;
use crate::snapshot::KeymapEntry;
use crate::RkResult;

/// One keymap cell as reported by the device, action still wire-encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawKeymapEntry {
    pub row: u8,
    pub col: u8,
    pub layer: u8,
    pub action: serde_json::Value,
}

pub trait DeviceClient {
    fn layout_description(&mut self) -> RkResult<LayoutDescription>;

    fn keymap_entries(&mut self) -> RkResult<Vec<RawKeymapEntry>>;

    /// Writes the batch atomically: either every entry is applied or the call
    /// fails wholesale. Partial application is a transport defect and is
    /// reported as total failure.
    fn write_keymap_entries(&mut self, entries: &[KeymapEntry]) -> RkResult<()>;

    fn keymap_config(&mut self) -> RkResult<KeymapConfig>;

    fn write_keymap_config(&mut self, config: &KeymapConfig) -> RkResult<()>;

    fn disconnect(&mut self) -> RkResult<()>;
}

pub mod file;

pub use file::FileClient;
