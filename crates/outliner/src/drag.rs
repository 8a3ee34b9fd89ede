//! # Drag Reordering
//!
//! A drag gesture is the only multi-step interaction in the editor. [`DragGesture`]
//! tracks it as a small state machine and turns a completed gesture into exactly one
//! root-level [`reorder`](crate::commands::reorder) mutation.
//!
//! ```text
//!            start(a)              over(Some(c))
//!   Idle ───────────────▶ Dragging ─────────────▶ Over
//!    ▲                     │  ▲                    │
//!    │                     │  └──── over(None) ────┤
//!    │   drop / cancel     │                       │
//!    └─────────────────────┴───────────────────────┘
//! ```
//!
//! The intermediate state never touches the tree. Cancelling, dropping on the dragged
//! node itself, or dropping where there is no root-level target discards the gesture
//! without producing a mutation. Dragging across levels is not supported; only the
//! root sequence is reordered.

use tracing::{debug, instrument};

use crate::commands::{reorder, CmdMessage, CmdResult};
use crate::id::NodeId;
use crate::model::{ParentRef, Tree};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        active: NodeId,
    },
    Over {
        active: NodeId,
        candidate: NodeId,
    },
}

impl DragState {
    pub fn active(&self) -> Option<&NodeId> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { active } | DragState::Over { active, .. } => Some(active),
        }
    }

    pub fn candidate(&self) -> Option<&NodeId> {
        match self {
            DragState::Over { candidate, .. } => Some(candidate),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DragGesture {
    state: DragState,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state != DragState::Idle
    }

    /// Begins a gesture on `active`. A gesture already in flight is abandoned.
    #[instrument(level = "trace", skip(self))]
    pub fn start(&mut self, active: NodeId) {
        self.state = DragState::Dragging { active };
    }

    /// Records the node under the pointer, or `None` when it leaves every target.
    /// Ignored while idle.
    #[instrument(level = "trace", skip(self))]
    pub fn over(&mut self, candidate: Option<NodeId>) {
        let Some(active) = self.state.active().cloned() else {
            return;
        };
        self.state = match candidate {
            Some(candidate) => DragState::Over { active, candidate },
            None => DragState::Dragging { active },
        };
    }

    /// Discards the gesture. The tree is never touched.
    pub fn cancel(&mut self) {
        if self.is_active() {
            debug!("drag cancelled");
        }
        self.state = DragState::Idle;
    }

    /// Ends the gesture on `target` (or on the last hovered candidate when `None`).
    ///
    /// Returns the reordered tree when both the dragged node and the target are roots
    /// and differ; otherwise the tree is returned unchanged. The gesture is always
    /// back to idle afterwards.
    #[instrument(level = "debug", skip(self, tree))]
    pub fn drop_on(&mut self, tree: &Tree, target: Option<&NodeId>) -> CmdResult {
        let state = std::mem::take(&mut self.state);
        let Some(active) = state.active() else {
            return CmdResult::unchanged(tree);
        };
        let Some(target) = target.or(state.candidate()) else {
            debug!(%active, "dropped outside any target");
            return CmdResult::unchanged(tree);
        };
        if target == active {
            return CmdResult::unchanged(tree);
        }

        let roots = tree.roots();
        let source = roots.iter().position(|n| &n.id == active);
        let dest = roots.iter().position(|n| &n.id == target);
        match (source, dest) {
            (Some(from), Some(to)) => reorder::run(tree, &ParentRef::Root, from, to),
            _ => CmdResult::unchanged(tree).with_message(CmdMessage::info(
                "Only top-level sections can be reordered by dragging",
            )),
        }
    }
}
