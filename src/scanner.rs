use crate::error::Result;
use crate::matcher::{self, Occurrence};
use log::trace;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Searches one file line by line, accumulating every occurrence. Open and
/// read failures are returned to the caller, which decides whether they are
/// fatal (explicit file target) or skippable (directory walk).
pub fn scan_file(path: &Path, pattern: &Regex) -> Result<Vec<Occurrence>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut occurrences = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        occurrences.extend(matcher::match_line(pattern, &line, index + 1, Some(path)));
    }

    trace!("{}: {} occurrence(s)", path.display(), occurrences.len());
    Ok(occurrences)
}

/// Searches an in-memory word list. Line numbers are 1-based indices into
/// the list and no source path is attached.
pub fn scan_words(words: &[String], pattern: &Regex) -> Vec<Occurrence> {
    words
        .iter()
        .enumerate()
        .flat_map(|(index, word)| matcher::match_line(pattern, word, index + 1, None))
        .collect()
}
