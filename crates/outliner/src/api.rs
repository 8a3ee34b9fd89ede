//! # Session Facade
//!
//! [`OutlineApi`] is the single entry point a host drives. It owns the authoritative
//! [`Tree`], the [`Selection`] (selected id + clipboard), the in-flight
//! [`DragGesture`] and the [`IdSource`], and it is the only place where a command's
//! result replaces the current snapshot.
//!
//! ## Role and Responsibilities
//!
//! For every user action the facade:
//! - **Dispatches** to exactly one command in [`crate::commands`] (or the drag drop)
//! - **Installs** the returned tree wholesale
//! - **Keeps selection consistent**: created nodes become selected when
//!   `select_created` is on, and a selection whose node disappeared is dropped
//! - **Returns a [`Snapshot`]**: the full forest, the selected id and the clipboard
//!
//! ## What the API Does NOT Do
//!
//! - **Tree logic**: that belongs in `commands/*.rs`
//! - **Persistence, undo, merge**: the host stores snapshots however it likes
//!
//! ## Generic Over IdSource
//!
//! `OutlineApi<G: IdSource>` defaults to [`IdGenerator`]. Tests and hosts that need
//! reproducible ids plug in [`crate::id::SequentialIds`].

use serde::Serialize;
use tracing::instrument;

use crate::clipboard::Clipboard;
use crate::commands::{self, CmdMessage, CmdResult};
use crate::config::OutlineConfig;
use crate::drag::{DragGesture, DragState};
use crate::error::{OutlineError, Result};
use crate::id::{IdGenerator, IdSource, NodeId};
use crate::model::{is_blank_title, Node, ParentRef, Tree};
use crate::selection::Selection;
use crate::store;

/// What the host receives after every operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub tree: Tree,
    pub selected: Option<NodeId>,
    pub clipboard: Clipboard,
    /// Messages from the command that produced this snapshot.
    pub messages: Vec<CmdMessage>,
}

pub struct OutlineApi<G: IdSource = IdGenerator> {
    tree: Tree,
    selection: Selection,
    drag: DragGesture,
    ids: G,
    config: OutlineConfig,
}

impl OutlineApi<IdGenerator> {
    /// A session over `tree` using the production id generator.
    pub fn new(tree: Tree, config: OutlineConfig) -> Self {
        let ids = match &config.id_prefix {
            Some(prefix) => IdGenerator::with_prefix(prefix.clone()),
            None => IdGenerator::new(),
        };
        Self::with_ids(tree, ids, config)
    }
}

impl<G: IdSource> OutlineApi<G> {
    pub fn with_ids(tree: Tree, ids: G, config: OutlineConfig) -> Self {
        Self {
            tree,
            selection: Selection::new(),
            drag: DragGesture::new(),
            ids,
            config,
        }
    }

    /// A session over host-supplied roots, rejecting duplicate ids.
    pub fn from_roots(roots: Vec<Node>, ids: G, config: OutlineConfig) -> Result<Self> {
        Ok(Self::with_ids(Tree::from_roots(roots)?, ids, config))
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn config(&self) -> &OutlineConfig {
        &self.config
    }

    pub fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    /// Strict lookup for hosts that want `NotFound` surfaced as an error.
    pub fn node(&self, id: &NodeId) -> Result<&Node> {
        store::find(&self.tree, id).ok_or_else(|| OutlineError::NodeNotFound(id.clone()))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tree: self.tree.clone(),
            selected: self.selection.selected().cloned(),
            clipboard: self.selection.clipboard().clone(),
            messages: Vec::new(),
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn add_child(&mut self, parent: &ParentRef, title: &str) -> Snapshot {
        let result = commands::add::run(&self.tree, &mut self.ids, parent, title);
        self.install(result, true)
    }

    /// Renames `id`. A blank title keeps the previous one.
    pub fn rename(&mut self, id: &NodeId, title: &str) -> Snapshot {
        self.update(&Node::new(id.clone(), title))
    }

    /// Strict rename: unknown ids and blank titles are errors instead of warnings.
    pub fn try_rename(&mut self, id: &NodeId, title: &str) -> Result<Snapshot> {
        if !store::contains(&self.tree, id) {
            return Err(OutlineError::NodeNotFound(id.clone()));
        }
        if is_blank_title(title) {
            return Err(OutlineError::EmptyTitle);
        }
        Ok(self.rename(id, title))
    }

    pub fn update(&mut self, node: &Node) -> Snapshot {
        let result = commands::update::run(&self.tree, node);
        self.install(result, false)
    }

    pub fn delete(&mut self, id: &NodeId) -> Snapshot {
        let result = commands::delete::run(&self.tree, id);
        self.install(result, false)
    }

    pub fn duplicate(&mut self, id: &NodeId) -> Snapshot {
        let result = commands::duplicate::run(
            &self.tree,
            &mut self.ids,
            id,
            &self.config.copy_suffix,
        );
        self.install(result, true)
    }

    pub fn cut(&mut self, id: &NodeId) -> Snapshot {
        let result = commands::cut::run(self.selection.clipboard_mut(), &self.tree, id);
        self.install(result, false)
    }

    pub fn copy(&mut self, id: &NodeId) -> Snapshot {
        let result = commands::cut::copy(self.selection.clipboard_mut(), &self.tree, id);
        self.install(result, false)
    }

    pub fn paste(&mut self, target: &ParentRef) -> Snapshot {
        let result = commands::paste::run(
            self.selection.clipboard_mut(),
            &self.tree,
            &mut self.ids,
            target,
        );
        self.install(result, true)
    }

    pub fn reorder(&mut self, parent: &ParentRef, from: usize, to: usize) -> Snapshot {
        let result = commands::reorder::run(&self.tree, parent, from, to);
        self.install(result, false)
    }

    /// Selects `id` if it exists; unknown ids leave the selection as it was.
    pub fn select(&mut self, id: &NodeId) -> Snapshot {
        if store::contains(&self.tree, id) {
            self.selection.select(id.clone());
        }
        self.snapshot()
    }

    pub fn clear_selection(&mut self) -> Snapshot {
        self.selection.clear();
        self.snapshot()
    }

    pub fn begin_drag(&mut self, id: &NodeId) {
        self.drag.start(id.clone());
    }

    pub fn drag_over(&mut self, candidate: Option<&NodeId>) {
        self.drag.over(candidate.cloned());
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Completes the drag gesture; see [`DragGesture::drop_on`].
    pub fn drop_on(&mut self, target: Option<&NodeId>) -> Snapshot {
        let result = self.drag.drop_on(&self.tree, target);
        self.install(result, false)
    }

    fn install(&mut self, result: CmdResult, selects_created: bool) -> Snapshot {
        let CmdResult {
            tree,
            affected,
            messages,
        } = result;
        self.tree = tree;
        if selects_created && self.config.select_created {
            if let Some(created) = affected.into_iter().next() {
                self.selection.select(created);
            }
        }
        self.selection.reconcile(&self.tree);

        let mut snapshot = self.snapshot();
        snapshot.messages = messages;
        snapshot
    }
}
