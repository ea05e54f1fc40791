use std::fs;

use remapkit::client::{DeviceClient, RawKeymapEntry};
use remapkit::session::EditSession;
use remapkit::snapshot::KeyLocation;
use remapkit::{wire, RkResult};

pub mod apply;
pub mod config;
pub mod diff;
pub mod keys;
pub mod show;

/// Loads an edits file (JSON list of `{row, col, layer, action}`) and stages
/// every entry into the session.
pub fn stage_edits<C: DeviceClient>(
    session: &mut EditSession<C>,
    path: &str,
) -> RkResult<usize> {
    let content = fs::read_to_string(path)?;
    let edits: Vec<RawKeymapEntry> = serde_json::from_str(&content)?;
    for edit in &edits {
        let action = wire::decode_action(&edit.action)?;
        let loc = KeyLocation {
            row: edit.row,
            col: edit.col,
            layer: edit.layer,
        };
        session.set_action(loc, action)?;
    }
    Ok(edits.len())
}
