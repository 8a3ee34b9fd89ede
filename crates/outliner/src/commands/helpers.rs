use std::collections::HashSet;

use crate::commands::{CmdMessage, CmdResult};
use crate::id::{IdSource, NodeId};
use crate::model::{Node, ParentRef, Tree};
use crate::store;

/// Mints an id that no node in `tree` already carries.
///
/// Host-supplied forests may hold ids the source would produce, so colliding ids
/// are skipped.
pub fn fresh_id<G: IdSource>(tree: &Tree, ids: &mut G) -> NodeId {
    loop {
        let id = ids.next_id();
        if !store::contains(tree, &id) {
            return id;
        }
    }
}

/// Deep copy of `node` where every level gets a freshly minted id, unused both in
/// `tree` and in the copy built so far.
pub fn clone_with_fresh_ids<G: IdSource>(node: &Node, tree: &Tree, ids: &mut G) -> Node {
    let mut taken: HashSet<NodeId> = store::ids(tree).into_iter().collect();
    clone_into(node, ids, &mut taken)
}

fn clone_into<G: IdSource>(node: &Node, ids: &mut G, taken: &mut HashSet<NodeId>) -> Node {
    let id = loop {
        let id = ids.next_id();
        if taken.insert(id.clone()) {
            break id;
        }
    };
    Node {
        id,
        title: node.title.clone(),
        children: node
            .children
            .iter()
            .map(|child| clone_into(child, ids, taken))
            .collect(),
    }
}

pub fn node_not_found(tree: &Tree, id: &NodeId) -> CmdResult {
    CmdResult::unchanged(tree).with_message(CmdMessage::warning(format!("Node not found: {}", id)))
}

pub fn parent_not_found(tree: &Tree, parent: &ParentRef) -> CmdResult {
    CmdResult::unchanged(tree).with_message(CmdMessage::warning(format!(
        "Parent not found: {}",
        parent
    )))
}
