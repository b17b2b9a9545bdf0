use crate::error::Result;
use crate::options::{TreeOptions, Verbosity};
use crate::tree::GeneralizedSuffixTree;

/// Collects words and options, then builds the tree in one go.
#[derive(Debug, Default, Clone)]
pub struct TreeBuilder {
    options: TreeOptions,
    words: Vec<String>,
}

impl TreeBuilder {
    pub fn new() -> TreeBuilder {
        TreeBuilder::default()
    }

    pub fn options(mut self, options: TreeOptions) -> TreeBuilder {
        self.options = options;
        self
    }

    pub fn verbosity(mut self, verbosity: Verbosity) -> TreeBuilder {
        self.options.verbosity = verbosity;
        self
    }

    pub fn add_word<W: AsRef<str>>(&mut self, word: W) -> &mut TreeBuilder {
        self.words.push(word.as_ref().to_owned());
        self
    }

    /// Builds the tree; rejected words are skipped as in [GeneralizedSuffixTree::from_words].
    pub fn build(&self) -> Result<GeneralizedSuffixTree> {
        GeneralizedSuffixTree::from_words_with(self.options, &self.words)
    }
}
