use crate::edge::{Edge, EdgeId};
use crate::node::{Node, ROOT};
use crate::tree::GeneralizedSuffixTree;

/// Pre-order walk over the edges below the root, each tagged with its depth in edges (edges
/// leaving the root have depth 1). Siblings come in ascending order of their first character.
pub struct DepthTaggedEdges<'a> {
    tree: &'a GeneralizedSuffixTree,
    stack: Vec<(EdgeId, usize)>,
}

impl<'a> DepthTaggedEdges<'a> {
    fn new(tree: &'a GeneralizedSuffixTree) -> DepthTaggedEdges<'a> {
        let stack = tree.root().child_edges().rev().map(|(_, edge)| (edge, 1)).collect();
        DepthTaggedEdges { tree, stack }
    }
}

impl<'a> Iterator for DepthTaggedEdges<'a> {
    type Item = (&'a Edge, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let (id, depth) = self.stack.pop()?;
        let edge = tree.edge(id);
        let below = tree.node(edge.child()).child_edges().rev().map(|(_, child)| (child, depth + 1));
        self.stack.extend(below);

        Some((edge, depth))
    }
}

/// Pre-order walk over the edges below the root.
pub struct Edges<'a>(DepthTaggedEdges<'a>);

impl<'a> Iterator for Edges<'a> {
    type Item = &'a Edge;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(edge, _)| edge)
    }
}

/// The root, then every other node in the pre-order of the edges leading to them.
pub struct Nodes<'a> {
    tree: &'a GeneralizedSuffixTree,
    root_done: bool,
    edges: Edges<'a>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        if !self.root_done {
            self.root_done = true;
            return Some(tree.node(ROOT));
        }

        self.edges.next().map(|edge| tree.node(edge.child()))
    }
}

impl GeneralizedSuffixTree {
    pub fn edges(&self) -> Edges<'_> {
        Edges(DepthTaggedEdges::new(self))
    }

    pub fn depth_tagged_edges(&self) -> DepthTaggedEdges<'_> {
        DepthTaggedEdges::new(self)
    }

    pub fn nodes(&self) -> Nodes<'_> {
        Nodes {
            tree: self,
            root_done: false,
            edges: self.edges(),
        }
    }

    /// Edges whose child node has no children.
    pub fn leaves(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges().filter(move |edge| self.node(edge.child()).is_leaf())
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }
}
