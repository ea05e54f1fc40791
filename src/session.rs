//! Edit session: the owning context for one connected device.
//!
//! Created on connect, torn down on disconnect; there is no ambient global
//! holding the live connection. The session owns the client, the fetched
//! snapshot, the staging buffer and the selection. All operations take
//! `&mut self`, so a second commit cannot start while one is in progress.

use tracing::{info, warn};

use crate::client::DeviceClient;
use crate::config::KeymapConfig;
use crate::keycode::KeyAction;
use crate::planner::{self, PendingWrite};
use crate::selection::Selection;
use crate::snapshot::{fetch_snapshot, FetchOutcome, FetchWarning, JoinPolicy, KeyLocation, Snapshot};
use crate::staging::{StagingBuffer, StagingEntry};
use crate::RkResult;

#[derive(Debug)]
pub struct EditSession<C: DeviceClient> {
    client: C,
    policy: JoinPolicy,
    snapshot: Snapshot,
    buffer: StagingBuffer,
    selection: Selection,
    warnings: Vec<FetchWarning>,
}

impl<C: DeviceClient> EditSession<C> {
    /// Fetches the initial snapshot and stages it.
    pub fn connect(mut client: C, policy: JoinPolicy) -> RkResult<Self> {
        let FetchOutcome { snapshot, warnings } = fetch_snapshot(&mut client, policy)?;
        let buffer = StagingBuffer::stage(&snapshot);
        info!(
            entries = snapshot.len(),
            layers = snapshot.layer_count(),
            "edit session established"
        );
        Ok(Self {
            client,
            policy,
            snapshot,
            buffer,
            selection: Selection::default(),
            warnings,
        })
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn buffer(&self) -> &StagingBuffer {
        &self.buffer
    }

    pub fn warnings(&self) -> &[FetchWarning] {
        &self.warnings
    }

    pub fn layer_count(&self) -> u8 {
        self.snapshot.layer_count()
    }

    /// Transport access for host concerns outside the engine, e.g. log
    /// polling. Must not be used to mutate the keymap behind the session.
    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    pub fn select(&mut self, loc: KeyLocation) {
        self.selection.select(loc);
    }

    pub fn deselect(&mut self) {
        self.selection.deselect();
    }

    pub fn selection(&self) -> Option<KeyLocation> {
        self.selection.current()
    }

    pub fn selected_entry(&self) -> Option<&StagingEntry> {
        self.selection.resolve(&self.buffer)
    }

    pub fn set_action(&mut self, loc: KeyLocation, action: KeyAction) -> RkResult<()> {
        self.buffer.set_action(loc, action)
    }

    pub fn restore(&mut self, loc: KeyLocation) -> RkResult<()> {
        self.buffer.restore(loc)
    }

    pub fn discard_all(&mut self) {
        self.buffer.clear_all();
    }

    pub fn pending_writes(&self) -> Vec<PendingWrite> {
        planner::pending_writes(&self.buffer)
    }

    /// Writes the pending set as one batch, then refetches and restages so
    /// the new baseline absorbs the written values. Returns how many entries
    /// were written. On write failure the buffer is left untouched.
    pub fn commit(&mut self) -> RkResult<usize> {
        let writes = self.pending_writes();
        if writes.is_empty() {
            return Ok(0);
        }
        planner::commit(&mut self.client, &writes)?;
        if let Err(err) = self.refresh() {
            // The batch is on the device but the local baseline could not be
            // reconciled; flags stay stale until the caller refreshes again.
            warn!(error = %err, "keymap written but baseline refetch failed");
            return Err(err);
        }
        info!(count = writes.len(), "commit complete");
        Ok(writes.len())
    }

    /// Refetches the snapshot and restages the buffer, dropping local edits.
    pub fn refresh(&mut self) -> RkResult<()> {
        let outcome = fetch_snapshot(&mut self.client, self.policy)?;
        self.snapshot = outcome.snapshot;
        self.warnings = outcome.warnings;
        self.buffer.resync(&self.snapshot);
        Ok(())
    }

    pub fn keymap_config(&mut self) -> RkResult<KeymapConfig> {
        self.client.keymap_config()
    }

    pub fn update_keymap_config(&mut self, config: &KeymapConfig) -> RkResult<()> {
        self.client.write_keymap_config(config)
    }

    pub fn disconnect(mut self) -> RkResult<()> {
        self.client.disconnect()
    }
}
