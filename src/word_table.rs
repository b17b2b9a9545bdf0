use crate::error::{GstError, Result};

pub type WordId = usize;

/// Append-only table of the words in a tree, each stored as its sequence of `char`s. Words are
/// read by index and character offset and are never concatenated into a shared buffer.
#[derive(Debug, Default, Clone)]
pub struct WordTable {
    words: Vec<Box<[char]>>,
}

impl WordTable {
    pub fn new() -> WordTable {
        WordTable { words: Vec::new() }
    }

    pub fn push(&mut self, word: &[char]) -> WordId {
        self.words.push(word.into());
        self.words.len() - 1
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, word: WordId) -> Option<&[char]> {
        self.words.get(word).map(|w| &w[..])
    }

    pub fn iter(&self) -> impl Iterator<Item = &[char]> {
        self.words.iter().map(|w| &w[..])
    }

    /// Character `pos` of `word`. Panics if either index is out of range: callers inside the
    /// tree only ask for positions their own ranges vouch for.
    pub fn char_at(&self, word: WordId, pos: usize) -> char {
        self.words[word][pos]
    }

    /// Length of `word` in characters.
    pub fn word_len(&self, word: WordId) -> usize {
        self.words[word].len()
    }

    /// The characters of `word` in `[begin, end]`, end inclusive.
    pub fn range(&self, word: WordId, begin: usize, end: usize) -> Result<&[char]> {
        let w = self.get(word).ok_or(GstError::UnknownWord(word))?;
        if begin > end || end >= w.len() {
            return Err(GstError::IndexOutOfRange { word, begin, end, len: w.len() });
        }

        Ok(&w[begin..=end])
    }

    /// Checks that `word` can join the table: non-empty, ending in a character that occurs
    /// nowhere else in the table, and not containing any other word's terminator.
    pub fn check_insertable(&self, word: &[char]) -> Result<()> {
        let (&terminator, body) = word.split_last().ok_or(GstError::EmptyWord)?;
        if body.contains(&terminator) {
            return Err(GstError::MissingTerminator { terminator });
        }

        for (i, other) in self.iter().enumerate() {
            if other.contains(&terminator) {
                return Err(GstError::SharedTerminator { terminator, word: i });
            }

            if let Some(&other_terminator) = other.last() {
                if body.contains(&other_terminator) {
                    return Err(GstError::SharedTerminator { terminator: other_terminator, word: i });
                }
            }
        }

        Ok(())
    }
}
