//! Builders for test forests.

use crate::id::NodeId;
use crate::model::{Node, Tree};
use crate::store;

#[derive(Debug, Default)]
pub struct TreeFixture {
    tree: Tree,
}

impl TreeFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roots `r-0 .. r-(count-1)` titled `Root 1 ..`.
    pub fn with_roots(count: usize) -> Self {
        (0..count).fold(Self::new(), |fixture, i| {
            fixture.root(&format!("r-{}", i), &format!("Root {}", i + 1))
        })
    }

    pub fn root(mut self, id: &str, title: &str) -> Self {
        self.tree.roots_mut().push(Node::new(id, title));
        self
    }

    pub fn child(mut self, parent: &str, id: &str, title: &str) -> Self {
        store::find_mut(&mut self.tree, &NodeId::from(parent))
            .expect("fixture parent must be added first")
            .children
            .push(Node::new(id, title));
        self
    }

    pub fn build(self) -> Tree {
        store::validate(&self.tree).expect("fixture ids must be unique");
        self.tree
    }
}

/// Root titles in display order.
pub fn root_titles(tree: &Tree) -> Vec<String> {
    tree.roots().iter().map(|n| n.title.clone()).collect()
}
