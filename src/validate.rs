//! Structural checks over a finished tree, run as a fixed table rather than discovered at run
//! time. Each check returns the ids of the nodes it found at fault.

use std::fmt;

use bit_vec::BitVec;

use crate::node::{NodeId, ROOT};
use crate::tree::GeneralizedSuffixTree;

pub type CheckFn = fn(&GeneralizedSuffixTree) -> Vec<NodeId>;

pub static CHECKS: &[(&str, CheckFn)] = &[
    ("leaf paths spell suffixes of their words", leaf_paths_spell_suffixes),
    ("every suffix of every word ends at a leaf", every_suffix_has_a_leaf),
    ("child keys match the first character of their edge", child_keys_match_labels),
    ("all ranges on an edge spell the same label", ranges_agree),
    ("internal nodes link to their own suffix", suffix_links_are_sound),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub name: &'static str,
    pub failed_nodes: Vec<NodeId>,
}

impl Check {
    pub fn passed(&self) -> bool {
        self.failed_nodes.is_empty()
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.passed() {
            write!(f, "ok     {}", self.name)
        } else {
            let ids: Vec<String> = self.failed_nodes.iter().map(|id| format!("N{}", id)).collect();
            write!(f, "FAILED {} ({})", self.name, ids.join(", "))
        }
    }
}

pub fn run_all(tree: &GeneralizedSuffixTree) -> Vec<Check> {
    CHECKS.iter()
        .map(|&(name, check)| Check { name, failed_nodes: check(tree) })
        .collect()
}

fn leaf_paths_spell_suffixes(tree: &GeneralizedSuffixTree) -> Vec<NodeId> {
    let mut failed = Vec::new();
    for leaf in tree.leaves() {
        let path: Vec<char> = tree.path_label(leaf.child()).chars().collect();
        let spelled = leaf.ranges().iter().filter(|r| r.is_open()).all(|r| {
            tree.words().get(r.word).map_or(false, |word| word.ends_with(&path))
        });
        if !spelled {
            failed.push(leaf.child());
        }
    }

    failed
}

fn every_suffix_has_a_leaf(tree: &GeneralizedSuffixTree) -> Vec<NodeId> {
    let mut reached: Vec<BitVec> = tree.words().iter()
        .map(|word| BitVec::from_elem(word.len(), false))
        .collect();
    for leaf in tree.leaves() {
        let depth = tree.string_depth(leaf.child());
        for range in leaf.ranges().iter().filter(|r| r.is_open()) {
            let len = tree.words().word_len(range.word);
            if depth <= len {
                reached[range.word].set(len - depth, true);
            }
        }
    }

    let mut failed = Vec::new();
    for (word, starts) in reached.iter().enumerate() {
        for start in starts.iter().enumerate().filter(|&(_, hit)| !hit).map(|(start, _)| start) {
            // Report the deepest node on the path of the missing suffix.
            let suffix = &tree.words().get(word).unwrap_or(&[])[start..];
            failed.push(deepest_node_on_path(tree, suffix));
        }
    }

    failed.sort();
    failed.dedup();
    failed
}

fn deepest_node_on_path(tree: &GeneralizedSuffixTree, pattern: &[char]) -> NodeId {
    let mut node = ROOT;
    let mut matched = 0;
    while matched < pattern.len() {
        let edge = match tree.node(node).child_edge(pattern[matched]) {
            Some(edge) => tree.edge(edge),
            None => break,
        };
        let label = edge.label(tree.words());
        if label.len() > pattern.len() - matched || label != &pattern[matched..matched + label.len()] {
            break;
        }

        matched += label.len();
        node = edge.child();
    }

    node
}

fn child_keys_match_labels(tree: &GeneralizedSuffixTree) -> Vec<NodeId> {
    let mut failed = Vec::new();
    for node in tree.nodes() {
        let consistent = node.child_edges().all(|(c, edge)| {
            let edge = tree.edge(edge);
            edge.first_char(tree.words()) == c
                && edge.parent() == node.id()
                && tree.node(edge.child()).parent_edge() == Some(edge.id())
        });
        if !consistent {
            failed.push(node.id());
        }
    }

    failed
}

fn ranges_agree(tree: &GeneralizedSuffixTree) -> Vec<NodeId> {
    let mut failed = Vec::new();
    for edge in tree.edges() {
        let label = edge.label(tree.words());
        let agree = edge.ranges().iter().all(|r| {
            let end = r.real_end(tree.words());
            tree.range_chars(r.word, r.begin, end).map_or(false, |chars| chars == label)
        });
        if !agree {
            failed.push(edge.child());
        }
    }

    failed
}

fn suffix_links_are_sound(tree: &GeneralizedSuffixTree) -> Vec<NodeId> {
    let mut failed = Vec::new();
    for node in tree.nodes().filter(|n| !n.is_root() && n.has_children()) {
        let sound = match node.suffix_link() {
            Some(link) => {
                let path = tree.path_label(node.id());
                tree.path_label(link).chars().eq(path.chars().skip(1))
            }
            None => false,
        };
        if !sound {
            failed.push(node.id());
        }
    }

    failed
}
