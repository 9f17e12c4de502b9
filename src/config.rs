use std::path::PathBuf;

/// Fully resolved input for one search invocation. Built once by the CLI
/// layer and read-only afterwards; the output thread holds it behind an
/// `Arc`.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub query: String,
    pub case_insensitive: bool,
    pub exact_word: bool,
    pub target: Target,
    /// Append formatted results here instead of printing them. The file must
    /// not exist when the search starts.
    pub output: Option<PathBuf>,
    pub mode: OutputMode,
}

/// What the search runs against. A `Path` may name a file or a directory;
/// the engine resolves which with a metadata lookup.
#[derive(Debug, Clone)]
pub enum Target {
    Path(PathBuf),
    Words(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One formatted line per occurrence.
    Matches,
    /// A single total, no occurrence content.
    Count,
    /// Lines around the first occurrence instead of the occurrences
    /// themselves.
    Context { before: bool, after: bool },
}

impl OutputMode {
    pub fn is_count(&self) -> bool {
        matches!(self, OutputMode::Count)
    }
}
