//! # Mutation Engine
//!
//! Each outline operation lives in its own submodule and is a **pure function**: it
//! takes the current [`Tree`] snapshot by reference and returns a [`CmdResult`] that
//! owns the next snapshot. The input tree is never touched, so a reader holding the
//! old snapshot sees either the fully-old or the fully-new forest.
//!
//! ## Total Operations
//!
//! Commands do not fail. When an operation references an id that is not in the tree
//! (or a rename would blank a title), the result carries the input tree unchanged and
//! a warning [`CmdMessage`] describing why nothing happened. Callers that care can
//! inspect [`CmdResult::is_applied`]; the facade also offers strict variants such as
//! `OutlineApi::try_rename`.
//!
//! ## Structured Returns
//!
//! [`CmdResult`] carries:
//! - `tree`: the snapshot to install as the new authoritative tree
//! - `affected`: ids created, changed, moved or removed (root of subtree only)
//! - `messages`: leveled messages for the host to surface or ignore
//!
//! ## Command Modules
//!
//! - [`add`]: append a new leaf under a parent or at the root
//! - [`update`]: rename a node in place
//! - [`delete`]: remove a node and its subtree
//! - [`duplicate`]: clone a subtree with fresh ids next to the original
//! - [`cut`]: put a subtree snapshot on the clipboard (cut or copy)
//! - [`paste`]: materialize the clipboard under a target
//! - [`reorder`]: move one sibling to a new index
//! - [`helpers`]: shared pieces (fresh-id cloning, no-op results)

use serde::Serialize;

use crate::id::NodeId;
use crate::model::Tree;

pub mod add;
pub mod cut;
pub mod delete;
pub mod duplicate;
pub mod helpers;
pub mod paste;
pub mod reorder;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CmdResult {
    pub tree: Tree,
    pub affected: Vec<NodeId>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn new(tree: Tree) -> Self {
        Self {
            tree,
            affected: Vec::new(),
            messages: Vec::new(),
        }
    }

    /// A result that leaves `tree` as it was.
    pub fn unchanged(tree: &Tree) -> Self {
        Self::new(tree.clone())
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected(mut self, id: NodeId) -> Self {
        self.affected.push(id);
        self
    }

    /// False when the command was absorbed as a no-op.
    pub fn is_applied(&self) -> bool {
        !self.affected.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning)
    }
}
