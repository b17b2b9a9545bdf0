use bit_vec::BitVec;

use crate::edge::Edge;
use crate::node::{NodeId, ROOT};
use crate::tree::GeneralizedSuffixTree;
use crate::word_table::WordId;

/// A position where a pattern occurs: the pattern's characters start at character `start` of
/// `word`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Occurrence {
    pub word: WordId,
    pub start: usize,
}

/// Where a matched pattern ends: `node` is the first node at or below the end of the match and
/// `depth` is its string depth.
struct Locus {
    node: NodeId,
    depth: usize,
}

impl GeneralizedSuffixTree {
    fn locate(&self, pattern: &[char]) -> Option<Locus> {
        let mut node = ROOT;
        let mut depth = 0;
        let mut matched = 0;
        while matched < pattern.len() {
            let edge = self.edge(self.node(node).child_edge(pattern[matched])?);
            let label = edge.label(&self.words);
            let n = label.len().min(pattern.len() - matched);
            if label[..n] != pattern[matched..matched + n] {
                return None;
            }

            matched += n;
            depth += label.len();
            node = edge.child();
        }

        Some(Locus { node, depth })
    }

    /// Whether `pattern` occurs in any word.
    pub fn contains<P: AsRef<str>>(&self, pattern: P) -> bool {
        let pattern: Vec<char> = pattern.as_ref().chars().collect();
        self.locate(&pattern).is_some()
    }

    /// Whether `pattern` is a suffix of some word, with or without its terminator.
    pub fn is_suffix<P: AsRef<str>>(&self, pattern: P) -> bool {
        let len = pattern.as_ref().chars().count();
        self.find(pattern).into_iter().any(|occ| {
            let end = occ.start + len;
            let word_len = self.words.word_len(occ.word);
            end == word_len || end + 1 == word_len
        })
    }

    /// Every occurrence of `pattern`, sorted by word and start.
    pub fn find<P: AsRef<str>>(&self, pattern: P) -> Vec<Occurrence> {
        let pattern: Vec<char> = pattern.as_ref().chars().collect();
        let locus = match self.locate(&pattern) {
            Some(locus) => locus,
            None => return Vec::new(),
        };

        let mut occurrences = Vec::new();
        if self.node(locus.node).is_leaf() {
            if let Some(edge) = self.node(locus.node).parent_edge() {
                let edge = self.edge(edge);
                let parent_depth = locus.depth - edge.span(&self.words) - 1;
                self.leaf_occurrences(edge, parent_depth, &mut occurrences);
            }
        } else {
            let mut stack = vec![(locus.node, locus.depth)];
            while let Some((node, depth)) = stack.pop() {
                for (_, edge) in self.node(node).child_edges() {
                    let edge = self.edge(edge);
                    if self.node(edge.child()).is_leaf() {
                        self.leaf_occurrences(edge, depth, &mut occurrences);
                    } else {
                        stack.push((edge.child(), depth + edge.span(&self.words) + 1));
                    }
                }
            }
        }

        occurrences.sort();
        occurrences
    }

    fn leaf_occurrences(&self, leaf: &Edge, parent_depth: usize, out: &mut Vec<Occurrence>) {
        for range in leaf.ranges().iter().filter(|r| r.is_open()) {
            out.push(Occurrence { word: range.word, start: range.begin - parent_depth });
        }
    }

    /// The longest string that occurs in every word, terminators excluded. For a single word
    /// that is the word without its terminator.
    pub fn longest_common_substring(&self) -> String {
        match self.words.len() {
            0 => String::new(),
            1 => {
                let word = self.words.get(0).unwrap_or(&[]);
                word[..word.len().saturating_sub(1)].iter().collect()
            }
            _ => {
                let mut path = Vec::new();
                let mut best = Vec::new();
                self.common_words_below(ROOT, &mut path, &mut best);
                best.into_iter().collect()
            }
        }
    }

    /// Returns the set of words with a leaf below `node`, updating `best` with `path` when
    /// that set is complete.
    fn common_words_below(&self, node: NodeId, path: &mut Vec<char>, best: &mut Vec<char>) -> BitVec {
        let mut seen = BitVec::from_elem(self.words.len(), false);
        for (_, edge) in self.node(node).child_edges() {
            let edge = self.edge(edge);
            if self.node(edge.child()).is_leaf() {
                for word in edge.word_indices() {
                    seen.set(word, true);
                }
            } else {
                let len = path.len();
                path.extend_from_slice(edge.label(&self.words));
                let below = self.common_words_below(edge.child(), path, best);
                seen.or(&below);
                path.truncate(len);
            }
        }

        if seen.all() && path.len() > best.len() {
            *best = path.clone();
        }

        seen
    }
}
