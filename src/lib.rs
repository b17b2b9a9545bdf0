//! A generalized suffix tree over a set of strings, built online with an extension of
//! Ukkonen's algorithm.
//!
//! Words are inserted one at a time and one `char` at a time. Edges are labeled with ranges
//! into the words instead of copies of the text, and one edge carries a range for every word
//! in which it was seen, so substrings shared between words share edges. Each word must end in
//! a terminator character that occurs nowhere else in the tree.
//!
//! ```
//! use gsuffix_tree::{GeneralizedSuffixTree, Occurrence};
//!
//! let mut tree = GeneralizedSuffixTree::new();
//! tree.insert_word("xabxa$").unwrap();
//! tree.insert_word("babxba#").unwrap();
//!
//! assert_eq!(tree.find("bx"), vec![Occurrence { word: 0, start: 2 }, Occurrence { word: 1, start: 2 }]);
//! assert!(gsuffix_tree::validate::run_all(&tree).iter().all(|check| check.passed()));
//! ```

mod active;
mod builder;
mod display;
mod edge;
mod error;
mod node;
mod options;
mod search;
mod traversal;
mod tree;
pub mod validate;
mod word_table;

pub use crate::active::ActivePoint;
pub use crate::builder::TreeBuilder;
pub use crate::edge::{Edge, EdgeId, End, WordRange};
pub use crate::error::{GstError, Result};
pub use crate::node::{Node, NodeId, ROOT};
pub use crate::options::{TreeOptions, Verbosity};
pub use crate::search::Occurrence;
pub use crate::traversal::{DepthTaggedEdges, Edges, Nodes};
pub use crate::tree::GeneralizedSuffixTree;
pub use crate::word_table::{WordId, WordTable};
