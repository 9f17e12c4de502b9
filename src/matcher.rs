use crate::config::SearchConfig;
use crate::error::Result;
use regex::Regex;
use std::path::{Path, PathBuf};

/// One located match of the query inside one line of text.
///
/// Offsets are byte positions into `line`, end exclusive; for ASCII input
/// they coincide with character positions. `line_number` is 1-based, and for
/// word-list searches it is the 1-based index into the list. `source` is
/// `None` for matches that did not come from a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub line_number: usize,
    pub line: String,
    pub start: usize,
    pub end: usize,
    pub source: Option<PathBuf>,
}

/// Compiles the query into a match pattern. The query is always taken
/// literally; `exact_word` adds word boundaries and `case_insensitive`
/// folds case on both sides.
pub fn build_pattern(config: &SearchConfig) -> Result<Regex> {
    let mut pattern = regex::escape(&config.query);
    if config.exact_word {
        pattern = format!(r"\b{pattern}\b");
    }
    if config.case_insensitive {
        pattern = format!("(?i){pattern}");
    }
    Ok(Regex::new(&pattern)?)
}

/// Returns every non-overlapping match of `pattern` in `line`, left to
/// right.
pub fn match_line(
    pattern: &Regex,
    line: &str,
    line_number: usize,
    source: Option<&Path>,
) -> Vec<Occurrence> {
    pattern
        .find_iter(line)
        .map(|m| Occurrence {
            line_number,
            line: line.to_string(),
            start: m.start(),
            end: m.end(),
            source: source.map(Path::to_path_buf),
        })
        .collect()
}
