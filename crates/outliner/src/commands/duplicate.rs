use tracing::{debug, instrument};

use crate::commands::{CmdMessage, CmdResult};
use crate::id::{IdSource, NodeId};
use crate::model::Tree;
use crate::store;

use super::helpers::{clone_with_fresh_ids, node_not_found};

pub const DEFAULT_COPY_SUFFIX: &str = " (Copy)";

/// Clones the subtree rooted at `id` and inserts the clone right after the original.
///
/// Every node in the clone gets a fresh id; the clone's root title gets `suffix`
/// appended. The clone's root id is the single entry in `affected`.
#[instrument(level = "debug", skip(tree, ids))]
pub fn run<G: IdSource>(tree: &Tree, ids: &mut G, id: &NodeId, suffix: &str) -> CmdResult {
    let (Some(source), Some(location)) = (store::find(tree, id), store::locate(tree, id)) else {
        return node_not_found(tree, id);
    };

    let mut clone = clone_with_fresh_ids(source, tree, ids);
    clone.title.push_str(suffix);
    let clone_id = clone.id.clone();
    let title = clone.title.clone();

    let mut next = tree.clone();
    let Some(siblings) = store::siblings_mut(&mut next, &location.parent) else {
        return node_not_found(tree, id);
    };
    siblings.insert(location.index + 1, clone);
    debug!(source = %id, clone = %clone_id, "duplicated subtree");

    CmdResult::new(next)
        .with_affected(clone_id)
        .with_message(CmdMessage::success(format!("Section duplicated: {}", title)))
}
