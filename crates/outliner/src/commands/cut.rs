use tracing::{debug, instrument};

use crate::clipboard::{ClipMode, Clipboard};
use crate::commands::{CmdMessage, CmdResult};
use crate::id::NodeId;
use crate::model::Tree;
use crate::store;

use super::helpers::node_not_found;

/// Puts a snapshot of the subtree at `id` on the clipboard, marked for removal on paste.
///
/// The tree is returned unchanged: the source is only removed when the clipboard is
/// pasted. An unknown id leaves the clipboard as it was.
#[instrument(level = "debug", skip(clipboard, tree))]
pub fn run(clipboard: &mut Clipboard, tree: &Tree, id: &NodeId) -> CmdResult {
    put(clipboard, tree, id, ClipMode::Cut)
}

/// Like [`run`], but paste leaves the source in place.
#[instrument(level = "debug", skip(clipboard, tree))]
pub fn copy(clipboard: &mut Clipboard, tree: &Tree, id: &NodeId) -> CmdResult {
    put(clipboard, tree, id, ClipMode::Copy)
}

fn put(clipboard: &mut Clipboard, tree: &Tree, id: &NodeId, mode: ClipMode) -> CmdResult {
    let Some(node) = store::find(tree, id) else {
        return node_not_found(tree, id);
    };

    let title = node.title.clone();
    clipboard.store(node.clone(), mode);
    debug!(%id, ?mode, "clipboard filled");

    let verb = match mode {
        ClipMode::Cut => "cut",
        ClipMode::Copy => "copied",
    };
    CmdResult::unchanged(tree)
        .with_affected(id.clone())
        .with_message(CmdMessage::info(format!("Section {}: {}", verb, title)))
}
