//! # Node Store: Lookup and Invariants
//!
//! The store is the set of read (and crate-internal write) primitives every command is
//! built from. All traversals are depth-first and pre-order, so "the first match" is
//! the match closest to the top-left of the rendered outline.
//!
//! ## Lookups
//!
//! - [`find`]: the node with a given id, if any.
//! - [`locate`]: where that node sits (parent + sibling index).
//! - [`siblings`]: the ordered children of a parent, or the root sequence.
//!
//! ## Invariant Checks
//!
//! [`validate`] walks the forest and reports the first duplicated id. Commands never
//! produce duplicates on their own; the check guards the entry points where a host
//! hands us a forest.
//!
//! ## Mutation Primitives
//!
//! `find_mut`, `siblings_mut` and `remove` are `pub(crate)`: only commands, which
//! always operate on their own clone of the snapshot, may reshape a tree.

use std::collections::HashSet;
use tracing::instrument;

use crate::error::{OutlineError, Result};
use crate::id::NodeId;
use crate::model::{Location, Node, ParentRef, Tree};

pub mod iter;

pub use iter::PreOrder;

#[instrument(level = "trace", skip(tree))]
pub fn find<'a>(tree: &'a Tree, id: &NodeId) -> Option<&'a Node> {
    find_in(tree.roots(), id)
}

fn find_in<'a>(nodes: &'a [Node], id: &NodeId) -> Option<&'a Node> {
    for node in nodes {
        if node.id == *id {
            return Some(node);
        }
        if let Some(found) = find_in(&node.children, id) {
            return Some(found);
        }
    }
    None
}

pub fn contains(tree: &Tree, id: &NodeId) -> bool {
    find(tree, id).is_some()
}

#[instrument(level = "trace", skip(tree))]
pub fn locate(tree: &Tree, id: &NodeId) -> Option<Location> {
    locate_in(tree.roots(), None, id)
}

fn locate_in(nodes: &[Node], parent: Option<&NodeId>, id: &NodeId) -> Option<Location> {
    for (index, node) in nodes.iter().enumerate() {
        if node.id == *id {
            return Some(Location {
                parent: parent.cloned().into(),
                index,
            });
        }
        if let Some(found) = locate_in(&node.children, Some(&node.id), id) {
            return Some(found);
        }
    }
    None
}

/// The ordered sibling list under `parent`. `None` when the parent is unknown.
pub fn siblings<'a>(tree: &'a Tree, parent: &ParentRef) -> Option<&'a [Node]> {
    match parent {
        ParentRef::Root => Some(tree.roots()),
        ParentRef::Node(id) => find(tree, id).map(|node| node.children.as_slice()),
    }
}

/// Every id in the forest, in pre-order.
pub fn ids(tree: &Tree) -> Vec<NodeId> {
    iter(tree).map(|(_, node)| node.id.clone()).collect()
}

/// Ids of `node` and all of its descendants, in pre-order.
pub fn subtree_ids(node: &Node) -> Vec<NodeId> {
    PreOrder::from_node(node)
        .map(|(_, n)| n.id.clone())
        .collect()
}

pub fn iter(tree: &Tree) -> PreOrder<'_> {
    PreOrder::new(tree.roots())
}

/// Total number of nodes in the forest.
pub fn len(tree: &Tree) -> usize {
    iter(tree).count()
}

/// Number of levels; 0 for an empty forest, 1 for roots only.
pub fn depth(tree: &Tree) -> usize {
    iter(tree).map(|(depth, _)| depth + 1).max().unwrap_or(0)
}

#[instrument(level = "debug", skip(tree))]
pub fn validate(tree: &Tree) -> Result<()> {
    let mut seen = HashSet::new();
    for (_, node) in iter(tree) {
        if !seen.insert(&node.id) {
            return Err(OutlineError::DuplicateId(node.id.clone()));
        }
    }
    Ok(())
}

pub(crate) fn find_mut<'a>(tree: &'a mut Tree, id: &NodeId) -> Option<&'a mut Node> {
    find_in_mut(tree.roots_mut(), id)
}

fn find_in_mut<'a>(nodes: &'a mut [Node], id: &NodeId) -> Option<&'a mut Node> {
    for node in nodes.iter_mut() {
        if node.id == *id {
            return Some(node);
        }
        if let Some(found) = find_in_mut(&mut node.children, id) {
            return Some(found);
        }
    }
    None
}

pub(crate) fn siblings_mut<'a>(
    tree: &'a mut Tree,
    parent: &ParentRef,
) -> Option<&'a mut Vec<Node>> {
    match parent {
        ParentRef::Root => Some(tree.roots_mut()),
        ParentRef::Node(id) => find_mut(tree, id).map(|node| &mut node.children),
    }
}

/// Detaches the first node matching `id` together with its subtree.
pub(crate) fn remove(tree: &mut Tree, id: &NodeId) -> Option<Node> {
    remove_in(tree.roots_mut(), id)
}

fn remove_in(nodes: &mut Vec<Node>, id: &NodeId) -> Option<Node> {
    for index in 0..nodes.len() {
        if nodes[index].id == *id {
            return Some(nodes.remove(index));
        }
        if let Some(removed) = remove_in(&mut nodes[index].children, id) {
            return Some(removed);
        }
    }
    None
}
