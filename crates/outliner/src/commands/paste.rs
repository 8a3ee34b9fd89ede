use tracing::{debug, instrument};

use crate::clipboard::{ClipMode, Clipboard};
use crate::commands::{CmdMessage, CmdResult};
use crate::id::IdSource;
use crate::model::{ParentRef, Tree};
use crate::store;

use super::helpers::{clone_with_fresh_ids, parent_not_found};

/// Materializes the clipboard as the last child of `target`.
///
/// 1. Empty clipboard: no-op.
/// 2. Cut entries: the node with the snapshot's id is removed from wherever it lives
///    now (it may have moved, been edited, or already be gone).
/// 3. A fresh-id copy of the snapshot is appended under `target` (or to the roots).
/// 4. The clipboard is cleared.
///
/// A target that does not exist, or that sits inside the subtree a cut would remove,
/// is a no-op and the clipboard keeps its entry.
#[instrument(level = "debug", skip(clipboard, tree, ids))]
pub fn run<G: IdSource>(
    clipboard: &mut Clipboard,
    tree: &Tree,
    ids: &mut G,
    target: &ParentRef,
) -> CmdResult {
    let Some(entry) = clipboard.entry() else {
        return CmdResult::unchanged(tree).with_message(CmdMessage::info("Clipboard is empty"));
    };

    if let ParentRef::Node(target_id) = target {
        if !store::contains(tree, target_id) {
            return parent_not_found(tree, target);
        }
        if entry.mode == ClipMode::Cut {
            let inside_source = store::find(tree, &entry.node.id)
                .map(|source| store::subtree_ids(source).contains(target_id))
                .unwrap_or(false);
            if inside_source {
                return CmdResult::unchanged(tree).with_message(CmdMessage::warning(format!(
                    "Cannot paste '{}' into itself or its own descendant",
                    entry.node.title
                )));
            }
        }
    }

    let mut next = tree.clone();
    if entry.mode == ClipMode::Cut && store::remove(&mut next, &entry.node.id).is_none() {
        debug!(id = %entry.node.id, "cut source already gone");
    }

    let copy = clone_with_fresh_ids(&entry.node, tree, ids);
    let copy_id = copy.id.clone();
    let title = copy.title.clone();
    let Some(siblings) = store::siblings_mut(&mut next, target) else {
        return parent_not_found(tree, target);
    };
    siblings.push(copy);
    debug!(id = %copy_id, %target, "pasted subtree");

    clipboard.clear();
    CmdResult::new(next)
        .with_affected(copy_id)
        .with_message(CmdMessage::success(format!("Section pasted: {}", title)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{cut, update};
    use crate::fixtures::{root_titles, TreeFixture};
    use crate::id::{NodeId, SequentialIds};
    use crate::model::Node;

    fn tree() -> Tree {
        TreeFixture::new()
            .root("a", "A")
            .child("a", "a1", "A1")
            .root("b", "B")
            .build()
    }

    #[test]
    fn cut_then_paste_relocates() {
        let tree = TreeFixture::new().root("a", "A").root("b", "B").build();
        let mut clipboard = Clipboard::new();
        let mut ids = SequentialIds::new("p");

        cut::run(&mut clipboard, &tree, &"a".into());
        let res = run(&mut clipboard, &tree, &mut ids, &ParentRef::Node("b".into()));

        assert_eq!(root_titles(&res.tree), vec!["B"]);
        let b = &res.tree.roots()[0];
        assert_eq!(b.children.len(), 1);
        assert_eq!(b.children[0].title, "A");
        assert_eq!(b.children[0].id, NodeId::from("p-1"));
        assert!(!store::contains(&res.tree, &"a".into()));
        assert!(clipboard.is_empty());
    }

    #[test]
    fn cut_subtree_gets_fresh_ids_throughout() {
        let tree = tree();
        let mut clipboard = Clipboard::new();
        let mut ids = SequentialIds::new("p");

        cut::run(&mut clipboard, &tree, &"a".into());
        let res = run(&mut clipboard, &tree, &mut ids, &ParentRef::Node("b".into()));

        let moved = &res.tree.roots()[0].children[0];
        assert_eq!(moved.children[0].title, "A1");
        assert_eq!(moved.children[0].id, NodeId::from("p-2"));
        assert!(!store::contains(&res.tree, &"a1".into()));
    }

    #[test]
    fn copy_paste_avoids_ids_the_host_already_used() {
        let tree = TreeFixture::new()
            .root("p-1", "A")
            .child("p-1", "p-2", "A1")
            .build();
        let mut clipboard = Clipboard::new();
        let mut ids = SequentialIds::new("p");

        cut::copy(&mut clipboard, &tree, &"p-1".into());
        let res = run(&mut clipboard, &tree, &mut ids, &ParentRef::Root);

        assert_eq!(res.affected, vec![NodeId::from("p-3")]);
        assert_eq!(res.tree.roots()[1].children[0].id, NodeId::from("p-4"));
        assert!(store::validate(&res.tree).is_ok());
    }

    #[test]
    fn copy_then_paste_keeps_source() {
        let tree = tree();
        let mut clipboard = Clipboard::new();
        let mut ids = SequentialIds::new("p");

        cut::copy(&mut clipboard, &tree, &"a1".into());
        let res = run(&mut clipboard, &tree, &mut ids, &ParentRef::Root);

        assert_eq!(root_titles(&res.tree), vec!["A", "B", "A1"]);
        assert!(store::contains(&res.tree, &"a1".into()));
        assert!(store::validate(&res.tree).is_ok());
        assert!(clipboard.is_empty());
    }

    #[test]
    fn empty_clipboard_is_a_no_op() {
        let tree = tree();
        let mut clipboard = Clipboard::new();
        let mut ids = SequentialIds::new("p");
        let res = run(&mut clipboard, &tree, &mut ids, &ParentRef::Node("a".into()));

        assert_eq!(res.tree, tree);
        assert!(!res.is_applied());
    }

    #[test]
    fn paste_to_root() {
        let tree = tree();
        let mut clipboard = Clipboard::new();
        let mut ids = SequentialIds::new("p");

        cut::run(&mut clipboard, &tree, &"a1".into());
        let res = run(&mut clipboard, &tree, &mut ids, &ParentRef::Root);

        assert_eq!(root_titles(&res.tree), vec!["A", "B", "A1"]);
        assert!(res.tree.roots()[0].is_leaf());
    }

    #[test]
    fn paste_uses_snapshot_from_cut_time() {
        let tree = tree();
        let mut clipboard = Clipboard::new();
        let mut ids = SequentialIds::new("p");

        cut::run(&mut clipboard, &tree, &"a1".into());
        let renamed = update::run(&tree, &Node::new("a1", "Edited after cut")).tree;
        let res = run(&mut clipboard, &renamed, &mut ids, &ParentRef::Node("b".into()));

        let b = store::find(&res.tree, &"b".into()).unwrap();
        assert_eq!(b.children[0].title, "A1");
        assert!(!store::contains(&res.tree, &"a1".into()));
    }

    #[test]
    fn cut_source_deleted_meanwhile_still_pastes() {
        let tree = tree();
        let mut clipboard = Clipboard::new();
        let mut ids = SequentialIds::new("p");

        cut::run(&mut clipboard, &tree, &"a1".into());
        let pruned = crate::commands::delete::run(&tree, &"a1".into()).tree;
        let res = run(&mut clipboard, &pruned, &mut ids, &ParentRef::Root);

        assert_eq!(root_titles(&res.tree), vec!["A", "B", "A1"]);
    }

    #[test]
    fn pasting_cut_into_own_descendant_is_refused() {
        let tree = tree();
        let mut clipboard = Clipboard::new();
        let mut ids = SequentialIds::new("p");

        cut::run(&mut clipboard, &tree, &"a".into());
        let res = run(&mut clipboard, &tree, &mut ids, &ParentRef::Node("a1".into()));

        assert_eq!(res.tree, tree);
        assert!(res.messages[0].content.contains("own descendant"));
        assert!(!clipboard.is_empty());
    }

    #[test]
    fn pasting_copy_into_own_descendant_is_allowed() {
        let tree = tree();
        let mut clipboard = Clipboard::new();
        let mut ids = SequentialIds::new("p");

        cut::copy(&mut clipboard, &tree, &"a".into());
        let res = run(&mut clipboard, &tree, &mut ids, &ParentRef::Node("a1".into()));

        let a1 = store::find(&res.tree, &"a1".into()).unwrap();
        assert_eq!(a1.children[0].title, "A");
        assert!(store::validate(&res.tree).is_ok());
    }

    #[test]
    fn unknown_target_keeps_clipboard() {
        let tree = tree();
        let mut clipboard = Clipboard::new();
        let mut ids = SequentialIds::new("p");

        cut::run(&mut clipboard, &tree, &"a".into());
        let res = run(&mut clipboard, &tree, &mut ids, &ParentRef::Node("ghost".into()));

        assert_eq!(res.tree, tree);
        assert!(!clipboard.is_empty());
    }
}
