use std::fmt;

use log::trace;

use crate::node::{NodeId, ROOT};
use crate::tree::GeneralizedSuffixTree;
use crate::word_table::WordId;

/// The suffix currently being extended: `word[begin..end)` read from `origin`.
///
/// The point is explicit when it sits exactly on `origin` (`span() < 0`) and implicit when it
/// ends `span() + 1` characters down the edge leaving `origin` with the character at `begin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePoint {
    pub origin: NodeId,
    pub word: WordId,
    pub begin: usize,
    pub end: usize,
}

impl ActivePoint {
    pub fn new(origin: NodeId, word: WordId, begin: usize, end: usize) -> ActivePoint {
        ActivePoint { origin, word, begin, end }
    }

    /// Inclusive end index minus begin index; negative for explicit points.
    pub fn span(&self) -> isize {
        self.end as isize - self.begin as isize - 1
    }

    pub fn is_explicit(&self) -> bool {
        self.span() < 0
    }

    pub fn is_implicit(&self) -> bool {
        self.span() >= 0
    }
}

impl fmt::Display for ActivePoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_explicit() {
            write!(f, "(N{}, Exp-[{}:{}])", self.origin, self.begin, self.end as isize - 1)
        } else {
            write!(f, "(N{}, Imp-[{}:{}])", self.origin, self.begin, self.end - 1)
        }
    }
}

impl GeneralizedSuffixTree {
    /// Moves `active` down every edge it covers completely, so an implicit point always ends
    /// strictly inside the edge it addresses. Edges walked over pick up a range for the active
    /// word.
    pub(crate) fn canonicalize(&mut self, active: &mut ActivePoint) {
        let before = *active;
        while active.is_implicit() {
            let edge = self.active_edge(active);
            let edge_span = self.edges[edge].span(&self.words);
            if edge_span as isize > active.span() {
                break;
            }

            let begin = active.begin;
            if self.edges[edge].record_range(active.word, begin, begin + edge_span) && self.options.verbose() {
                trace!("  E{} now also spells word #{} [{}:{}]", edge, active.word, begin, begin + edge_span);
            }
            active.begin += edge_span + 1;
            active.origin = self.edges[edge].child();
        }

        if *active != before && self.options.verbose() {
            trace!("  Canonicalize: active suffix moved from {} to {}", before, active);
        }
    }

    /// Moves `active` to the next shorter suffix: through the origin's suffix link, or by
    /// dropping the first character when the origin is the root.
    pub(crate) fn advance_to_next_suffix(&mut self, active: &mut ActivePoint) {
        if active.origin == ROOT {
            active.begin += 1;
        } else {
            active.origin = match self.nodes[active.origin].suffix_link() {
                Some(link) => link,
                None => panic!("N{} has no suffix link to follow from {}", active.origin, active),
            };
        }

        self.canonicalize(active);
    }
}
