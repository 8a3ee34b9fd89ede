use tracing::{debug, instrument};

use crate::commands::{CmdMessage, CmdResult};
use crate::model::{is_blank_title, Node, Tree};
use crate::store;

use super::helpers::node_not_found;

/// Replaces the title of the node whose id matches `node.id`.
///
/// Position and existing children in the tree are kept as they are; only the title is
/// taken from `node`. A blank title keeps the prior one.
#[instrument(level = "debug", skip(tree, node), fields(id = %node.id))]
pub fn run(tree: &Tree, node: &Node) -> CmdResult {
    if !store::contains(tree, &node.id) {
        return node_not_found(tree, &node.id);
    }

    if is_blank_title(&node.title) {
        debug!("blank title, keeping previous");
        return CmdResult::unchanged(tree).with_message(CmdMessage::warning(
            "Title cannot be empty, keeping the previous title",
        ));
    }

    let mut next = tree.clone();
    let Some(target) = store::find_mut(&mut next, &node.id) else {
        return node_not_found(tree, &node.id);
    };
    if target.title == node.title {
        return CmdResult::unchanged(tree);
    }
    target.title = node.title.clone();

    CmdResult::new(next)
        .with_affected(node.id.clone())
        .with_message(CmdMessage::success(format!("Section renamed: {}", node.title)))
}
