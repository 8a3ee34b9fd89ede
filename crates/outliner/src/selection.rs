use serde::Serialize;
use tracing::debug;

use crate::clipboard::Clipboard;
use crate::id::NodeId;
use crate::model::Tree;
use crate::store;

/// The selected node id and the clipboard slot, updated alongside each mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    selected: Option<NodeId>,
    clipboard: Clipboard,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    pub fn select(&mut self, id: NodeId) {
        self.selected = Some(id);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn is_selected(&self, id: &NodeId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn clipboard_mut(&mut self) -> &mut Clipboard {
        &mut self.clipboard
    }

    /// Drops the selection when its node is no longer in `tree`.
    ///
    /// Ids are never recycled, so a selection that survives this check always points
    /// at the node the user picked.
    pub fn reconcile(&mut self, tree: &Tree) {
        if let Some(id) = &self.selected {
            if !store::contains(tree, id) {
                debug!(%id, "selection went stale");
                self.selected = None;
            }
        }
    }
}
