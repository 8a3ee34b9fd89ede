use tracing::{debug, instrument};

use crate::commands::{CmdMessage, CmdResult};
use crate::model::{ParentRef, Tree};
use crate::store;

use super::helpers::parent_not_found;

/// Array move inside one sibling list: remove at `from`, reinsert at `to`.
///
/// `to` is clamped to the last index. Everything that does not move keeps its
/// relative order. An out-of-range `from` or an unknown parent is a no-op.
#[instrument(level = "debug", skip(tree))]
pub fn run(tree: &Tree, parent: &ParentRef, from: usize, to: usize) -> CmdResult {
    let Some(len) = store::siblings(tree, parent).map(<[_]>::len) else {
        return parent_not_found(tree, parent);
    };
    if from >= len {
        return CmdResult::unchanged(tree).with_message(CmdMessage::warning(format!(
            "No section at position {} under {}",
            from, parent
        )));
    }
    let to = to.min(len - 1);
    if from == to {
        return CmdResult::unchanged(tree);
    }

    let mut next = tree.clone();
    let Some(siblings) = store::siblings_mut(&mut next, parent) else {
        return parent_not_found(tree, parent);
    };
    let moved = siblings.remove(from);
    let id = moved.id.clone();
    siblings.insert(to, moved);
    debug!(%id, from, to, "reordered");

    CmdResult::new(next).with_affected(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{root_titles, TreeFixture};

    fn abcd() -> Tree {
        TreeFixture::new()
            .root("a", "A")
            .root("b", "B")
            .root("c", "C")
            .root("d", "D")
            .build()
    }

    #[test]
    fn move_forward_and_back() {
        let tree = abcd();
        let forward = run(&tree, &ParentRef::Root, 0, 2);
        assert_eq!(root_titles(&forward.tree), vec!["B", "C", "A", "D"]);

        let back = run(&forward.tree, &ParentRef::Root, 2, 0);
        assert_eq!(back.tree, tree);
    }

    #[test]
    fn move_to_end() {
        let tree = abcd();
        let res = run(&tree, &ParentRef::Root, 1, 3);
        assert_eq!(root_titles(&res.tree), vec!["A", "C", "D", "B"]);
    }

    #[test]
    fn destination_is_clamped() {
        let tree = abcd();
        let res = run(&tree, &ParentRef::Root, 0, 99);
        assert_eq!(root_titles(&res.tree), vec!["B", "C", "D", "A"]);
    }

    #[test]
    fn same_index_is_a_no_op() {
        let tree = abcd();
        let res = run(&tree, &ParentRef::Root, 2, 2);
        assert_eq!(res.tree, tree);
        assert!(!res.is_applied());
    }

    #[test]
    fn out_of_range_source_is_a_no_op() {
        let tree = abcd();
        let res = run(&tree, &ParentRef::Root, 4, 0);
        assert_eq!(res.tree, tree);
        assert!(res.has_warnings());
    }

    #[test]
    fn reorders_children_of_a_node() {
        let tree = TreeFixture::new()
            .root("p", "P")
            .child("p", "x", "X")
            .child("p", "y", "Y")
            .child("p", "z", "Z")
            .build();
        let res = run(&tree, &ParentRef::Node("p".into()), 2, 0);

        let p = store::find(&res.tree, &"p".into()).unwrap();
        let titles: Vec<&str> = p.children.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Z", "X", "Y"]);
    }

    #[test]
    fn unknown_parent_is_a_no_op() {
        let tree = abcd();
        let res = run(&tree, &ParentRef::Node("ghost".into()), 0, 1);
        assert_eq!(res.tree, tree);
    }

    #[test]
    fn empty_child_list_is_a_no_op() {
        let tree = abcd();
        let res = run(&tree, &ParentRef::Node("a".into()), 0, 0);
        assert_eq!(res.tree, tree);
        assert!(res.has_warnings());
    }
}
