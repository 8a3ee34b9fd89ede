use crate::model::Node;

/// Explicit-stack pre-order walk yielding `(depth, node)`; roots are depth 0.
pub struct PreOrder<'a> {
    stack: Vec<(usize, &'a Node)>,
}

impl<'a> PreOrder<'a> {
    pub fn new(roots: &'a [Node]) -> Self {
        // Push in reverse so the leftmost root pops first
        let stack = roots.iter().rev().map(|node| (0, node)).collect();
        Self { stack }
    }

    pub fn from_node(node: &'a Node) -> Self {
        Self {
            stack: vec![(0, node)],
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        for child in node.children.iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, node))
    }
}
