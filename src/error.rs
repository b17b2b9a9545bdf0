use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Errors reported by the generalized suffix tree for invalid input or out of range reads.
///
/// Broken structural invariants (a duplicate child edge, a missing suffix link on a node the
/// active point stands on) are not represented here: they abort with the offending node and
/// edge ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GstError {
    /// The tree was constructed from no words, or from words that were all rejected.
    NoWords,

    /// An empty word was passed to insertion.
    EmptyWord,

    /// The last character of the word also occurs earlier in the same word.
    MissingTerminator { terminator: char },

    /// The word's terminator occurs in another word, or the word contains the terminator of an
    /// already inserted word.
    SharedTerminator { terminator: char, word: usize },

    /// A word index that is not in the word table.
    UnknownWord(usize),

    /// A range `[begin, end]` (end inclusive) that does not fit in the word.
    IndexOutOfRange { word: usize, begin: usize, end: usize, len: usize },
}

impl Display for GstError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::NoWords => write!(f, "A suffix tree must be constructed with at least one non-empty word"),
            Self::EmptyWord => write!(f, "Cannot insert an empty word"),
            Self::MissingTerminator { terminator } => write!(
                f,
                "Word does not end in a unique terminator: {:?} occurs earlier in the word",
                terminator
            ),
            Self::SharedTerminator { terminator, word } => write!(
                f,
                "Terminator {:?} is shared with word #{}",
                terminator, word
            ),
            Self::UnknownWord(word) => write!(f, "Unknown word #{}", word),
            Self::IndexOutOfRange { word, begin, end, len } => write!(
                f,
                "Range [{}, {}] is out of bounds for word #{} of length {}",
                begin, end, word, len
            ),
        }
    }
}

impl Error for GstError {}

/// A `Result` with a [GstError].
pub type Result<T> = std::result::Result<T, GstError>;
