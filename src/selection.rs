//! Selection state: at most one key location under edit.

use crate::snapshot::KeyLocation;
use crate::staging::{StagingBuffer, StagingEntry};

/// Selecting does not validate the location against loaded data; selection
/// may legitimately precede the fetch. Resolution happens lazily via
/// [`Selection::resolve`], and an unmatched location simply resolves to
/// nothing selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    current: Option<KeyLocation>,
}

impl Selection {
    pub fn select(&mut self, loc: KeyLocation) {
        self.current = Some(loc);
    }

    pub fn deselect(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<KeyLocation> {
        self.current
    }

    pub fn resolve<'a>(&self, buffer: &'a StagingBuffer) -> Option<&'a StagingEntry> {
        self.current.and_then(|loc| buffer.entry_at(loc))
    }
}
