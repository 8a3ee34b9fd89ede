use tracing::{debug, instrument};

use crate::commands::{CmdMessage, CmdResult};
use crate::id::IdSource;
use crate::model::{Node, ParentRef, Tree};
use crate::store;

use super::helpers::{fresh_id, parent_not_found};

/// Appends a new leaf titled `title` as the last child of `parent`.
///
/// The new id is the single entry in `affected`. An unknown parent is a no-op and no
/// id is minted.
#[instrument(level = "debug", skip(tree, ids))]
pub fn run<G: IdSource>(tree: &Tree, ids: &mut G, parent: &ParentRef, title: &str) -> CmdResult {
    if let ParentRef::Node(parent_id) = parent {
        if !store::contains(tree, parent_id) {
            return parent_not_found(tree, parent);
        }
    }

    let node = Node::new(fresh_id(tree, ids), title);
    let mut next = tree.clone();
    let Some(siblings) = store::siblings_mut(&mut next, parent) else {
        return parent_not_found(tree, parent);
    };

    let id = node.id.clone();
    siblings.push(node);
    debug!(%id, %parent, "added node");

    CmdResult::new(next)
        .with_affected(id)
        .with_message(CmdMessage::success(format!("Section added: {}", title)))
}
