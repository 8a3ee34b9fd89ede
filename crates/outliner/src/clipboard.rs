//! # Clipboard Slot
//!
//! The outline clipboard holds at most one subtree snapshot and how it got there:
//!
//! - [`ClipMode::Cut`]: paste removes the source from the tree, then inserts a copy.
//! - [`ClipMode::Copy`]: paste leaves the source alone.
//!
//! The snapshot is taken when the subtree is cut or copied. Cutting does **not**
//! remove anything from the tree; the source stays visible and editable until the
//! paste, and the paste inserts the snapshot as it was at cut time.

use serde::{Deserialize, Serialize};

use crate::model::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipMode {
    Cut,
    Copy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipEntry {
    pub node: Node,
    pub mode: ClipMode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clipboard {
    entry: Option<ClipEntry>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }

    pub fn entry(&self) -> Option<&ClipEntry> {
        self.entry.as_ref()
    }

    pub fn node(&self) -> Option<&Node> {
        self.entry.as_ref().map(|e| &e.node)
    }

    pub fn mode(&self) -> Option<ClipMode> {
        self.entry.as_ref().map(|e| e.mode)
    }

    /// Replaces whatever the slot held.
    pub fn store(&mut self, node: Node, mode: ClipMode) {
        self.entry = Some(ClipEntry { node, mode });
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}
