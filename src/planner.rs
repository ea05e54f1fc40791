//! Diff and write-back planning.
//!
//! `pending_writes` projects the changed entries out of a staging buffer in
//! buffer order; that order is also the write order and is deliberately
//! stable, never re-sorted, so logs stay deterministic.

use std::io::Write;

use tracing::info;

use crate::client::DeviceClient;
use crate::keycode::KeyAction;
use crate::snapshot::{KeyLocation, KeymapEntry};
use crate::staging::StagingBuffer;
use crate::RkResult;

/// One planned write: the baseline action and its staged replacement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingWrite {
    pub loc: KeyLocation,
    pub current: KeyAction,
    pub next: KeyAction,
}

pub fn pending_writes(buffer: &StagingBuffer) -> Vec<PendingWrite> {
    buffer
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.changed)
        .map(|(idx, entry)| PendingWrite {
            loc: entry.loc,
            current: buffer.baseline().entries()[idx].action,
            next: entry.action,
        })
        .collect()
}

/// Submits the pending set as one atomic batch. On failure nothing is touched
/// locally; the staged edits stay intact for a retry or export.
pub fn commit<C: DeviceClient + ?Sized>(client: &mut C, writes: &[PendingWrite]) -> RkResult<()> {
    if writes.is_empty() {
        return Ok(());
    }
    let batch: Vec<KeymapEntry> = writes
        .iter()
        .map(|write| KeymapEntry {
            loc: write.loc,
            action: write.next,
        })
        .collect();
    info!(count = batch.len(), "writing keymap batch");
    client.write_keymap_entries(&batch)
}

/// Exports the pending set as CSV, one row per write, in write order.
pub fn export_csv<W: Write>(writes: &[PendingWrite], out: W) -> RkResult<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["layer", "row", "col", "current", "next"])?;
    for write in writes {
        writer.write_record([
            write.loc.layer.to_string(),
            write.loc.row.to_string(),
            write.loc.col.to_string(),
            write.current.to_string(),
            write.next.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
