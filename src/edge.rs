use log::{debug, trace};
use smallvec::{smallvec, SmallVec};

use crate::active::ActivePoint;
use crate::node::{Node, NodeId, ROOT};
use crate::tree::GeneralizedSuffixTree;
use crate::word_table::{WordId, WordTable};

pub type EdgeId = usize;

/// Where a range stops: at a fixed inclusive index, or at the end of its word (a leaf edge).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
    Closed(usize),
    Open,
}

/// One occurrence of an edge label inside a single word, `[begin, end]` with `end` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordRange {
    pub word: WordId,
    pub begin: usize,
    pub end: End,
}

impl WordRange {
    pub fn new(word: WordId, begin: usize, end: usize) -> WordRange {
        WordRange { word, begin, end: End::Closed(end) }
    }

    pub fn open(word: WordId, begin: usize) -> WordRange {
        WordRange { word, begin, end: End::Open }
    }

    pub fn is_open(&self) -> bool {
        self.end == End::Open
    }

    pub fn real_end(&self, words: &WordTable) -> usize {
        match self.end {
            End::Closed(end) => end,
            End::Open => words.word_len(self.word) - 1,
        }
    }
}

/// An edge of the tree. It owns its child node (created together with the edge) and records
/// where its label occurs in each word that has been seen to use it. All ranges spell the same
/// label; the first one is the reference range used to key and measure the edge.
#[derive(Debug, Clone)]
pub struct Edge {
    id: EdgeId,
    parent: NodeId,
    child: NodeId,
    ranges: SmallVec<[WordRange; 2]>,
}

impl Edge {
    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn parent(&self) -> NodeId {
        self.parent
    }

    pub fn child(&self) -> NodeId {
        self.child
    }

    pub fn ranges(&self) -> &[WordRange] {
        &self.ranges
    }

    pub fn reference(&self) -> &WordRange {
        &self.ranges[0]
    }

    pub fn range(&self, word: WordId) -> Option<&WordRange> {
        self.ranges.iter().find(|r| r.word == word)
    }

    pub fn has_word(&self, word: WordId) -> bool {
        self.range(word).is_some()
    }

    pub fn word_indices(&self) -> impl Iterator<Item = WordId> + '_ {
        self.ranges.iter().map(|r| r.word)
    }

    /// Number of characters in the label, minus one.
    pub fn span(&self, words: &WordTable) -> usize {
        let reference = self.reference();
        reference.real_end(words) - reference.begin
    }

    pub fn first_char(&self, words: &WordTable) -> char {
        let reference = self.reference();
        words.char_at(reference.word, reference.begin)
    }

    pub fn label<'w>(&self, words: &'w WordTable) -> &'w [char] {
        self.label_in(self.reference(), words)
    }

    pub fn label_string(&self, words: &WordTable) -> String {
        self.label(words).iter().collect()
    }

    /// The label as it occurs in `word`, if the edge carries a range for it.
    pub fn label_for<'w>(&self, word: WordId, words: &'w WordTable) -> Option<&'w [char]> {
        self.range(word).map(|r| self.label_in(r, words))
    }

    fn label_in<'w>(&self, range: &WordRange, words: &'w WordTable) -> &'w [char] {
        let end = range.real_end(words);
        match words.get(range.word) {
            Some(word) => &word[range.begin..=end],
            None => panic!("E{} refers to unknown word #{}", self.id, range.word),
        }
    }

    /// Adds a range for `word` unless the edge already has one. Returns whether it was added.
    pub(crate) fn record_range(&mut self, word: WordId, begin: usize, end: usize) -> bool {
        if self.has_word(word) {
            return false;
        }

        self.ranges.push(WordRange::new(word, begin, end));
        true
    }

    /// Cuts the first `delta + 1` characters off every range and returns them as the ranges of the
    /// edge that will sit above this one. `active` supplies the range for its own word when
    /// the edge has none yet.
    fn split_ranges(&mut self, delta: usize, active: &ActivePoint) -> SmallVec<[WordRange; 2]> {
        let mut prefix: SmallVec<[WordRange; 2]> = self.ranges.iter()
            .map(|r| WordRange::new(r.word, r.begin, r.begin + delta))
            .collect();
        if !self.has_word(active.word) {
            prefix.push(WordRange::new(active.word, active.begin, active.begin + delta));
        }

        for range in self.ranges.iter_mut() {
            range.begin += delta + 1;
            if let End::Closed(end) = range.end {
                assert!(range.begin <= end, "E{} split past its end for word #{}", self.id, range.word);
            }
        }

        prefix
    }
}

/// Outcome of Rule 1 for one suffix.
pub(crate) enum Extension {
    /// The extended suffix is already in the tree; the phase is over.
    Done,
    /// A leaf has to hang from this node.
    Insert(NodeId),
}

impl GeneralizedSuffixTree {
    /// Creates an edge from `parent` together with its child node. The edge is not yet keyed in
    /// the parent's child map.
    pub(crate) fn create_edge(&mut self, parent: NodeId, ranges: SmallVec<[WordRange; 2]>) -> EdgeId {
        let id = self.edges.len();
        let child = self.nodes.len();
        self.nodes.push(Node::new_child(child, id));
        self.edges.push(Edge { id, parent, child, ranges });

        id
    }

    pub(crate) fn attach_edge(&mut self, edge: EdgeId) {
        let c = self.edges[edge].first_char(&self.words);
        let parent = self.edges[edge].parent;
        self.nodes[parent].add_child_edge(c, edge);
    }

    /// The edge an implicit active point points into.
    pub(crate) fn active_edge(&self, active: &ActivePoint) -> EdgeId {
        let c = self.words.char_at(active.word, active.begin);
        match self.nodes[active.origin].child_edge(c) {
            Some(edge) => edge,
            None => panic!("Active point {} has no edge for {:?}", active, c),
        }
    }

    /// Rule 1: stop if the suffix extended by `c` is already present, otherwise report the node
    /// a new leaf goes under, splitting the active edge first if the point is implicit.
    pub(crate) fn apply_rule_one(&mut self, active: &ActivePoint, c: char) -> Extension {
        if active.is_explicit() {
            return match self.nodes[active.origin].child_edge(c) {
                Some(_) => Extension::Done,
                None => Extension::Insert(active.origin),
            };
        }

        let edge = self.active_edge(active);
        let reference = *self.edges[edge].reference();
        let next = self.words.char_at(reference.word, reference.begin + active.span() as usize + 1);
        if next == c {
            return Extension::Done;
        }

        Extension::Insert(self.split_edge(edge, active))
    }

    /// Rule 2: hang an open leaf for the active word from `parent` and link the previous
    /// extension's parent to this one.
    pub(crate) fn apply_rule_two(
        &mut self,
        active: &ActivePoint,
        parent: NodeId,
        previous_parent: &mut Option<NodeId>,
        end_index: usize,
    ) {
        let leaf = self.create_edge(parent, smallvec![WordRange::open(active.word, end_index)]);
        self.attach_edge(leaf);
        if self.options.verbose() {
            trace!(
                "Rule 2: new edge E{} ({:?}) connects N{} to N{}",
                leaf,
                self.edges[leaf].label_string(&self.words),
                parent,
                self.edges[leaf].child
            );
        }

        if let Some(previous) = *previous_parent {
            self.set_suffix_link(previous, parent);
        }
        *previous_parent = Some(parent);
    }

    /// Splits `edge` where the implicit `active` point ends. The matched prefix moves to a new
    /// edge from the active origin to a new node, which becomes the parent of the shortened
    /// `edge`. Returns the new node.
    pub(crate) fn split_edge(&mut self, edge: EdgeId, active: &ActivePoint) -> NodeId {
        let origin = active.origin;
        assert!(
            self.edges[edge].parent == origin,
            "Cannot split E{}: its parent is N{}, not the active origin N{}",
            edge, self.edges[edge].parent, origin
        );

        let old_first = self.edges[edge].first_char(&self.words);
        let prefix = self.edges[edge].split_ranges(active.span() as usize, active);
        let middle = self.create_edge(origin, prefix);
        let split_node = self.edges[middle].child;

        let removed = self.nodes[origin].remove_child_edge(old_first);
        assert!(removed == edge, "N{} keyed E{} under {:?}, expected E{}", origin, removed, old_first, edge);
        self.nodes[origin].add_child_edge(old_first, middle);

        let new_first = self.edges[edge].first_char(&self.words);
        self.edges[edge].parent = split_node;
        self.nodes[split_node].add_child_edge(new_first, edge);
        self.nodes[split_node].set_suffix_link(origin);

        if self.options.normal() {
            debug!(
                "Split E{} into E{} + E{} = {:?} + {:?}",
                edge,
                middle,
                edge,
                self.edges[middle].label_string(&self.words),
                self.edges[edge].label_string(&self.words)
            );
        }

        split_node
    }

    pub(crate) fn set_suffix_link(&mut self, node: NodeId, target: NodeId) {
        if node == ROOT {
            return;
        }

        if self.options.normal() {
            match self.nodes[node].suffix_link() {
                Some(old) if old == target => (),
                Some(old) => debug!("Suffix link N{} -> N{} moved to N{}", node, old, target),
                None => debug!("New suffix link N{} -> N{}", node, target),
            }
        }
        self.nodes[node].set_suffix_link(target);
    }
}
