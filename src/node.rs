use std::collections::BTreeMap;

use crate::edge::EdgeId;

pub type NodeId = usize;

/// The root is always the first node in the arena.
pub const ROOT: NodeId = 0;

/// A node of the tree. Its outgoing edges are keyed by the first character of their label; suffix
/// links and the parent edge are plain ids into the tree's arenas.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    children: BTreeMap<char, EdgeId>,
    suffix_link: Option<NodeId>,
    parent_edge: Option<EdgeId>,
}

impl Node {
    pub(crate) fn new_root() -> Node {
        Node {
            id: ROOT,
            children: BTreeMap::new(),
            suffix_link: None,
            parent_edge: None,
        }
    }

    pub(crate) fn new_child(id: NodeId, parent_edge: EdgeId) -> Node {
        Node {
            id,
            children: BTreeMap::new(),
            suffix_link: None,
            parent_edge: Some(parent_edge),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn is_root(&self) -> bool {
        self.id == ROOT
    }

    pub fn is_leaf(&self) -> bool {
        !self.is_root() && self.children.is_empty()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn suffix_link(&self) -> Option<NodeId> {
        self.suffix_link
    }

    /// The edge this node hangs from; `None` for the root.
    pub fn parent_edge(&self) -> Option<EdgeId> {
        self.parent_edge
    }

    pub fn child_edge(&self, c: char) -> Option<EdgeId> {
        self.children.get(&c).copied()
    }

    /// Outgoing edges in ascending order of their first character.
    pub fn child_edges(&self) -> impl DoubleEndedIterator<Item = (char, EdgeId)> + '_ {
        self.children.iter().map(|(&c, &edge)| (c, edge))
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub(crate) fn add_child_edge(&mut self, c: char, edge: EdgeId) {
        if let Some(existing) = self.children.insert(c, edge) {
            panic!(
                "N{} already has child edge E{} for {:?}, cannot add E{}",
                self.id, existing, c, edge
            );
        }
    }

    pub(crate) fn remove_child_edge(&mut self, c: char) -> EdgeId {
        match self.children.remove(&c) {
            Some(edge) => edge,
            None => panic!("N{} has no child edge for {:?} to remove", self.id, c),
        }
    }

    pub(crate) fn set_suffix_link(&mut self, target: NodeId) {
        self.suffix_link = Some(target);
    }
}
