//! # Domain Model: Nodes and Forests
//!
//! An outline is a [`Tree`]: an ordered forest of root [`Node`]s. Each node owns its
//! children outright; there is no parent pointer. Parent relationships are positional
//! and discovered by traversal (see [`crate::store`]).
//!
//! ```text
//! Tree
//! ├── Intro            (root 0)
//! │   ├── Motivation
//! │   └── Scope
//! └── Design           (root 1)
//!     └── Storage
//! ```
//!
//! ## Invariants
//!
//! - Every [`NodeId`] is unique across the whole forest.
//! - No node is its own descendant. Ownership makes this structural.
//! - Sibling order is display order.
//!
//! A `Tree` can only be built from host data through [`Tree::from_roots`] (or serde,
//! which goes through the same check), so a forest with duplicate ids never enters
//! the engine.
//!
//! ## Titles
//!
//! Titles are free text. The only validation anywhere is that a rename must not
//! produce a blank title; see [`is_blank_title`].

use serde::{Deserialize, Serialize};

use crate::error::{OutlineError, Result};
use crate::id::NodeId;
use crate::store;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub title: String,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Where a node lives, or where a new node should go.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParentRef {
    /// The forest's root sequence.
    Root,
    Node(NodeId),
}

impl From<NodeId> for ParentRef {
    fn from(id: NodeId) -> Self {
        ParentRef::Node(id)
    }
}

impl From<Option<NodeId>> for ParentRef {
    fn from(id: Option<NodeId>) -> Self {
        id.map(ParentRef::Node).unwrap_or(ParentRef::Root)
    }
}

impl std::fmt::Display for ParentRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParentRef::Root => write!(f, "<root>"),
            ParentRef::Node(id) => write!(f, "{}", id),
        }
    }
}

/// Position of a node among its siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub parent: ParentRef,
    pub index: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Node>", into = "Vec<Node>")]
pub struct Tree {
    roots: Vec<Node>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a forest from host-supplied roots, rejecting duplicate ids.
    pub fn from_roots(roots: Vec<Node>) -> Result<Self> {
        let tree = Self { roots };
        store::validate(&tree)?;
        Ok(tree)
    }

    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    pub fn into_roots(self) -> Vec<Node> {
        self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub(crate) fn roots_mut(&mut self) -> &mut Vec<Node> {
        &mut self.roots
    }
}

impl TryFrom<Vec<Node>> for Tree {
    type Error = OutlineError;

    fn try_from(roots: Vec<Node>) -> Result<Self> {
        Tree::from_roots(roots)
    }
}

impl From<Tree> for Vec<Node> {
    fn from(tree: Tree) -> Self {
        tree.roots
    }
}

/// True for titles that are empty or whitespace only.
pub fn is_blank_title(title: &str) -> bool {
    title.trim().is_empty()
}
