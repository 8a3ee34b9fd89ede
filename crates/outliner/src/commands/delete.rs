use tracing::{debug, instrument};

use crate::commands::{CmdMessage, CmdResult};
use crate::id::NodeId;
use crate::model::Tree;
use crate::store;

use super::helpers::node_not_found;

/// Removes the first node matching `id` along with its whole subtree.
///
/// Deleting an absent id is a no-op, which makes the command idempotent.
#[instrument(level = "debug", skip(tree))]
pub fn run(tree: &Tree, id: &NodeId) -> CmdResult {
    let mut next = tree.clone();
    let Some(removed) = store::remove(&mut next, id) else {
        return node_not_found(tree, id);
    };

    let descendants = store::subtree_ids(&removed).len() - 1;
    debug!(%id, descendants, "deleted node");

    let mut result = CmdResult::new(next).with_affected(removed.id);
    result.add_message(CmdMessage::success(format!(
        "Section deleted: {}",
        removed.title
    )));
    if descendants > 0 {
        result.add_message(CmdMessage::info(format!(
            "{} nested section(s) removed with it",
            descendants
        )));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{root_titles, TreeFixture};

    fn tree() -> Tree {
        TreeFixture::new()
            .root("a", "A")
            .child("a", "a1", "A1")
            .child("a1", "a1x", "A1x")
            .root("b", "B")
            .build()
    }

    #[test]
    fn deletes_root_with_subtree() {
        let tree = tree();
        let res = run(&tree, &"a".into());

        assert_eq!(root_titles(&res.tree), vec!["B"]);
        assert_eq!(store::len(&res.tree), 1);
        assert!(res.messages[1].content.contains("2 nested"));
    }

    #[test]
    fn deletes_nested_node() {
        let tree = tree();
        let res = run(&tree, &"a1x".into());

        assert!(!store::contains(&res.tree, &"a1x".into()));
        assert!(store::contains(&res.tree, &"a1".into()));
        assert_eq!(res.messages.len(), 1);
    }

    #[test]
    fn delete_is_idempotent() {
        let tree = tree();
        let once = run(&tree, &"a1".into());
        let twice = run(&once.tree, &"a1".into());

        assert_eq!(once.tree, twice.tree);
        assert!(!twice.is_applied());
    }

    #[test]
    fn absent_id_is_a_no_op() {
        let tree = tree();
        let res = run(&tree, &"ghost".into());
        assert_eq!(res.tree, tree);
    }
}
