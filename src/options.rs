/// How much the tree reports about its own construction through the `log` facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Only rejected words are reported.
    Quiet,
    /// Word insertions, splits and suffix links, at `debug` level.
    Normal,
    /// Every phase and active point move as well, at `trace` level.
    Verbose,
}

impl Default for Verbosity {
    fn default() -> Verbosity {
        Verbosity::Quiet
    }
}

/// Construction settings, passed to the tree when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeOptions {
    /// Walk the prefix a new word shares with the tree before running the extension phases.
    pub skip_shared_prefix: bool,
    pub verbosity: Verbosity,
}

impl Default for TreeOptions {
    fn default() -> TreeOptions {
        TreeOptions {
            skip_shared_prefix: true,
            verbosity: Verbosity::Quiet,
        }
    }
}

impl TreeOptions {
    pub fn verbosity(mut self, verbosity: Verbosity) -> TreeOptions {
        self.verbosity = verbosity;
        self
    }

    pub fn skip_shared_prefix(mut self, skip: bool) -> TreeOptions {
        self.skip_shared_prefix = skip;
        self
    }

    pub(crate) fn normal(&self) -> bool {
        self.verbosity >= Verbosity::Normal
    }

    pub(crate) fn verbose(&self) -> bool {
        self.verbosity >= Verbosity::Verbose
    }
}
