use log::{debug, trace, warn};

use crate::active::ActivePoint;
use crate::edge::{Edge, EdgeId, Extension};
use crate::error::{GstError, Result};
use crate::node::{Node, NodeId, ROOT};
use crate::options::TreeOptions;
use crate::word_table::{WordId, WordTable};

/// A generalized suffix tree over a set of words, built online with Ukkonen's algorithm.
///
/// Every word must end in a terminator character that occurs nowhere else in the tree. Nodes and
/// edges live in arenas indexed by their ids; suffix links and the active point are ids into
/// those arenas.
///
/// # Examples
///
/// ```
/// use gsuffix_tree::GeneralizedSuffixTree;
///
/// let tree = GeneralizedSuffixTree::from_words(&["xabxa$", "babxba#"]).unwrap();
/// assert!(tree.contains("bxb"));
/// assert_eq!(tree.longest_common_substring(), "abx");
/// ```
#[derive(Debug, Clone)]
pub struct GeneralizedSuffixTree {
    pub(crate) words: WordTable,
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) options: TreeOptions,
}

impl Default for GeneralizedSuffixTree {
    fn default() -> Self {
        GeneralizedSuffixTree::with_options(TreeOptions::default())
    }
}

impl GeneralizedSuffixTree {
    pub fn new() -> GeneralizedSuffixTree {
        GeneralizedSuffixTree::default()
    }

    pub fn with_options(options: TreeOptions) -> GeneralizedSuffixTree {
        GeneralizedSuffixTree {
            words: WordTable::new(),
            nodes: vec![Node::new_root()],
            edges: Vec::new(),
            options,
        }
    }

    pub fn from_words<I, W>(words: I) -> Result<GeneralizedSuffixTree>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        GeneralizedSuffixTree::from_words_with(TreeOptions::default(), words)
    }

    /// Builds a tree from `words` in order. Empty words are ignored and rejected words are
    /// logged and skipped; it is an error if no word could be inserted.
    pub fn from_words_with<I, W>(options: TreeOptions, words: I) -> Result<GeneralizedSuffixTree>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut tree = GeneralizedSuffixTree::with_options(options);
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }

            if let Err(err) = tree.insert_word(word) {
                warn!("Failed to add word {:?} to the suffix tree: {}", word, err);
            }
        }

        if tree.words.is_empty() {
            return Err(GstError::NoWords);
        }

        Ok(tree)
    }

    /// Inserts every suffix of `word`. On error the tree is left untouched.
    pub fn insert_word<W: AsRef<str>>(&mut self, word: W) -> Result<WordId> {
        let text = word.as_ref();
        let word: Vec<char> = text.chars().collect();
        self.words.check_insertable(&word)?;
        let id = self.words.push(&word);
        if self.options.normal() {
            debug!("Adding word #{} ({:?}) to the suffix tree", id, text);
        }

        let mut active = ActivePoint::new(ROOT, id, 0, 0);
        let mut end_index = 0;
        if id > 0 && self.options.skip_shared_prefix {
            end_index = self.skip_shared_prefix(&mut active);
            if end_index > 0 && self.options.normal() {
                debug!("The first {} character(s) of word #{} are already in the suffix tree", end_index, id);
            }
        }

        for end_index in end_index..word.len() {
            self.extend_suffixes(&mut active, end_index);
        }

        if self.options.normal() {
            debug!(
                "Done adding word #{}: {} nodes, {} edges",
                id,
                self.node_count(),
                self.edge_count()
            );
        }

        Ok(id)
    }

    /// One phase: extends every pending suffix of the active word with the character at
    /// `end_index`, until Rule 1 finds the extension already present.
    fn extend_suffixes(&mut self, active: &mut ActivePoint, end_index: usize) {
        let c = self.words.char_at(active.word, end_index);
        if self.options.verbose() {
            trace!("Extending with end index {} ({:?}), active suffix {}", end_index, c, active);
        }

        let mut previous_parent = None;
        loop {
            let parent = match self.apply_rule_one(active, c) {
                Extension::Done => break,
                Extension::Insert(parent) => parent,
            };

            self.apply_rule_two(active, parent, &mut previous_parent, end_index);
            self.advance_to_next_suffix(active);
        }

        // A node created by a split in this phase ends up linked to the node the phase
        // stopped on, which is explicit in that case.
        if let Some(previous) = previous_parent {
            if active.is_explicit() {
                self.set_suffix_link(previous, active.origin);
            }
        }

        active.end += 1;
        self.canonicalize(active);
    }

    /// Follows the longest path from the root that spells a prefix of the active word, so the
    /// extension phases for those characters can be skipped. Edges that are matched in full pick up
    /// a range for the word. Returns the number of characters matched and leaves `active` canonical
    /// at the end of the match.
    fn skip_shared_prefix(&mut self, active: &mut ActivePoint) -> usize {
        let word = active.word;
        let len = self.words.word_len(word);
        let mut node = ROOT;
        let mut depth = 0;
        let mut matched = 0;

        while matched < len {
            let edge = match self.nodes[node].child_edge(self.words.char_at(word, matched)) {
                Some(edge) => edge,
                None => break,
            };

            let reference = *self.edges[edge].reference();
            let span = self.edges[edge].span(&self.words);
            let mut i = 0;
            while i <= span
                && matched < len
                && self.words.char_at(reference.word, reference.begin + i) == self.words.char_at(word, matched)
            {
                i += 1;
                matched += 1;
            }

            if i <= span {
                break;
            }

            self.edges[edge].record_range(word, depth, depth + span);
            if self.options.verbose() {
                trace!("  Word #{} covers existing edge E{}", word, edge);
            }
            depth += span + 1;
            node = self.edges[edge].child();
        }

        *active = ActivePoint::new(node, word, depth, matched);
        matched
    }

    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    pub fn root(&self) -> &Node {
        &self.nodes[ROOT]
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn words(&self) -> &WordTable {
        &self.words
    }

    pub fn word(&self, word: WordId) -> Option<String> {
        self.words.get(word).map(|w| w.iter().collect())
    }

    pub fn char_at(&self, word: WordId, pos: usize) -> Option<char> {
        self.words.get(word).and_then(|w| w.get(pos).copied())
    }

    /// The characters of `word` in `[begin, end]`, end inclusive.
    pub fn range_chars(&self, word: WordId, begin: usize, end: usize) -> Result<&[char]> {
        self.words.range(word, begin, end)
    }

    pub fn range_string(&self, word: WordId, begin: usize, end: usize) -> Result<String> {
        self.range_chars(word, begin, end).map(|chars| chars.iter().collect())
    }

    /// The edge's range for `word` with an open end resolved, as `(begin, end)`.
    pub fn edge_range(&self, edge: EdgeId, word: WordId) -> Option<(usize, usize)> {
        self.edges[edge].range(word).map(|r| (r.begin, r.real_end(&self.words)))
    }

    /// The characters spelled on the path from the root to `node`.
    pub fn path_label(&self, node: NodeId) -> String {
        let mut pieces = Vec::new();
        let mut current = node;
        while let Some(edge) = self.nodes[current].parent_edge() {
            pieces.push(self.edges[edge].label(&self.words));
            current = self.edges[edge].parent();
        }

        pieces.into_iter().rev().flatten().copied().collect()
    }

    /// Length of the path label of `node`.
    pub fn string_depth(&self, node: NodeId) -> usize {
        let mut depth = 0;
        let mut current = node;
        while let Some(edge) = self.nodes[current].parent_edge() {
            depth += self.edges[edge].span(&self.words) + 1;
            current = self.edges[edge].parent();
        }

        depth
    }
}

#[cfg(test)]
mod tests {
    use super::GeneralizedSuffixTree;
    use crate::error::GstError;
    use crate::node::ROOT;
    use crate::options::TreeOptions;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn single_word_has_one_leaf_per_suffix() {
        let tree = GeneralizedSuffixTree::from_words(&["xabxac#"]).unwrap();

        assert_eq!(tree.node_count(), 10);
        assert_eq!(tree.edge_count(), 9);
        assert_eq!(tree.leaf_count(), 7);
        assert_eq!(
            tree.root().child_edges().map(|(c, _)| c).collect::<Vec<_>>(),
            "#abcx".chars().collect::<Vec<_>>()
        );
    }

    #[test]
    fn split_nodes_link_to_their_suffix() {
        let tree = GeneralizedSuffixTree::from_words(&["xabxac#"]).unwrap();
        let xa = tree.edge(tree.root().child_edge('x').unwrap()).child();
        let a = tree.edge(tree.root().child_edge('a').unwrap()).child();

        assert_eq!(tree.path_label(xa), "xa");
        assert_eq!(tree.node(xa).suffix_link(), Some(a));
        assert_eq!(tree.node(a).suffix_link(), Some(ROOT));
        assert_eq!(tree.string_depth(xa), 2);
    }

    #[test]
    fn insert_rejects_without_mutation() {
        let mut tree = GeneralizedSuffixTree::from_words(&["xabxa$"]).unwrap();
        let nodes = tree.node_count();

        assert_eq!(tree.insert_word(""), Err(GstError::EmptyWord));
        assert_eq!(tree.insert_word("abab"), Err(GstError::MissingTerminator { terminator: 'b' }));
        assert_eq!(
            tree.insert_word("ba$"),
            Err(GstError::SharedTerminator { terminator: '$', word: 0 })
        );
        assert_eq!(tree.word_count(), 1);
        assert_eq!(tree.node_count(), nodes);

        assert_eq!(tree.insert_word("babxba#"), Ok(1));
        assert_eq!(tree.word_count(), 2);
    }

    #[test]
    fn batch_construction_skips_bad_words() {
        let tree = GeneralizedSuffixTree::from_words(&["", "abc$", "abca", "cab#"]).unwrap();
        assert_eq!(tree.word_count(), 2);
        assert_eq!(tree.word(1), Some("cab#".to_owned()));

        let tree = GeneralizedSuffixTree::from_words(&["", "abca", "$"]).unwrap();
        assert_eq!(tree.word_count(), 1);
        assert_eq!(tree.word(0), Some("$".to_owned()));

        let none: Vec<&str> = Vec::new();
        assert_eq!(GeneralizedSuffixTree::from_words(none).unwrap_err(), GstError::NoWords);
        assert_eq!(GeneralizedSuffixTree::from_words(&["", ""]).unwrap_err(), GstError::NoWords);
        assert_eq!(GeneralizedSuffixTree::from_words(&["aa"]).unwrap_err(), GstError::NoWords);
    }

    #[test]
    fn words_and_ranges_read_back() {
        let tree = GeneralizedSuffixTree::from_words(&["xabxa$", "babxba#"]).unwrap();

        assert_eq!(tree.char_at(1, 3), Some('x'));
        assert_eq!(tree.char_at(1, 7), None);
        assert_eq!(tree.char_at(2, 0), None);
        assert_eq!(tree.range_string(0, 1, 3), Ok("abx".to_owned()));
        assert_eq!(tree.range_chars(1, 6, 6), Ok(&['#'][..]));
        assert_eq!(tree.range_chars(0, 4, 6).unwrap_err(), GstError::IndexOutOfRange {
            word: 0,
            begin: 4,
            end: 6,
            len: 6,
        });
    }

    #[test]
    fn prefix_skip_builds_the_same_tree() {
        let words = ["abcab$", "abcd#", "cabd%", "bcabcd&"];
        let skipping = GeneralizedSuffixTree::from_words_with(TreeOptions::default(), &words).unwrap();
        let walking = GeneralizedSuffixTree::from_words_with(
            TreeOptions::default().skip_shared_prefix(false),
            &words,
        ).unwrap();

        assert_eq!(skipping.node_count(), walking.node_count());
        assert_eq!(skipping.edge_count(), walking.edge_count());
        for (a, b) in skipping.edges().zip(walking.edges()) {
            assert_eq!(a.ranges(), b.ranges());
            assert_eq!(skipping.path_label(a.child()), walking.path_label(b.child()));
        }
    }

    #[test]
    fn non_ascii_terminators_are_single_characters() {
        let mut tree = GeneralizedSuffixTree::new();
        assert_eq!(tree.insert_word("ab\u{E000}"), Ok(0));
        assert_eq!(tree.insert_word("bä\u{E001}"), Ok(1));
        assert_eq!(tree.leaf_count(), 6);
        assert_eq!(tree.char_at(1, 1), Some('ä'));
        assert_eq!(tree.range_string(1, 1, 2), Ok("ä\u{E001}".to_owned()));
        assert_eq!(
            tree.insert_word("\u{E000}c\u{E002}"),
            Err(GstError::SharedTerminator { terminator: '\u{E000}', word: 0 })
        );
    }

    #[test]
    fn hundreds_of_private_use_terminators() {
        let words: Vec<String> = (0..300u32)
            .map(|i| format!("w{}", std::char::from_u32(0xE000 + i).unwrap()))
            .collect();
        let tree = GeneralizedSuffixTree::from_words(&words).unwrap();

        assert_eq!(tree.word_count(), 300);
        assert_eq!(tree.leaf_count(), 600);
        assert_eq!(tree.root().child_count(), 301);
    }
}
