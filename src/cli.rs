use crate::config::{OutputMode, SearchConfig, Target};
use crate::error::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Search for a term in a file, a directory tree, or a word list read from
/// standard input.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// File to search in
    #[clap(short, long, value_parser, conflicts_with = "dir")]
    pub file: Option<PathBuf>,

    /// Directory tree to search in
    #[clap(short, long, value_parser)]
    pub dir: Option<PathBuf>,

    /// Term to search for
    #[clap(short, long, value_parser)]
    pub search: String,

    /// Case insensitive matching
    #[clap(short = 'i', long = "ignore-case", default_value_t = false)]
    pub ignore_case: bool,

    /// Match whole words only
    #[clap(short, long, default_value_t = false)]
    pub exact: bool,

    /// Append results to this file instead of printing them; it must not
    /// already exist
    #[clap(short, long, value_parser)]
    pub output: Option<PathBuf>,

    /// Report only the number of matches
    #[clap(short, long, default_value_t = false, conflicts_with_all = ["after", "before"])]
    pub count: bool,

    /// Show the lines after the first match instead of the matches
    #[clap(short, long, default_value_t = false)]
    pub after: bool,

    /// Show the lines before the first match instead of the matches
    #[clap(short, long, default_value_t = false)]
    pub before: bool,

    /// Write the log to this file instead of stderr
    #[clap(long, value_parser)]
    pub log: Option<PathBuf>,

    /// Log at debug level
    #[clap(long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    /// Resolves the parsed flags into a search configuration, prompting on
    /// stdin for a word list when no file or directory target was given.
    pub fn into_config(self) -> Result<SearchConfig> {
        let target = match self.file.or(self.dir) {
            Some(path) => Target::Path(path),
            None => Target::Words(read_word_list()?),
        };

        let mode = if self.count {
            OutputMode::Count
        } else if self.after || self.before {
            OutputMode::Context {
                before: self.before,
                after: self.after,
            }
        } else {
            OutputMode::Matches
        };

        Ok(SearchConfig {
            query: self.search,
            case_insensitive: self.ignore_case,
            exact_word: self.exact,
            target,
            output: self.output,
            mode,
        })
    }
}

/// Reads one whitespace-separated word list from standard input. The prompt
/// goes to stderr so piped stdout stays clean.
fn read_word_list() -> Result<Vec<String>> {
    eprint!("Enter input: ");
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.split_whitespace().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_and_dir_are_mutually_exclusive() {
        let result = Cli::try_parse_from(["textgrep", "-s", "x", "-f", "a.txt", "-d", "trees"]);
        assert!(result.is_err());
    }

    #[test]
    fn count_conflicts_with_context_flags() {
        assert!(Cli::try_parse_from(["textgrep", "-s", "x", "-f", "a.txt", "-c", "-a"]).is_err());
        assert!(Cli::try_parse_from(["textgrep", "-s", "x", "-f", "a.txt", "-c", "-b"]).is_err());
    }

    #[test]
    fn search_term_is_required() {
        assert!(Cli::try_parse_from(["textgrep", "-f", "a.txt"]).is_err());
    }

    #[test]
    fn flags_map_onto_the_config() {
        let cli = Cli::try_parse_from([
            "textgrep", "-s", "word", "-f", "a.txt", "-i", "-e", "-o", "out.txt",
        ])
        .unwrap();
        let config = cli.into_config().unwrap();

        assert_eq!(config.query, "word");
        assert!(config.case_insensitive);
        assert!(config.exact_word);
        assert_eq!(config.output.as_deref(), Some(std::path::Path::new("out.txt")));
        assert!(matches!(config.target, Target::Path(ref p) if p.as_os_str() == "a.txt"));
        assert_eq!(config.mode, OutputMode::Matches);
    }

    #[test]
    fn context_flags_select_context_mode() {
        let cli =
            Cli::try_parse_from(["textgrep", "-s", "x", "-f", "a.txt", "-a", "-b"]).unwrap();
        let config = cli.into_config().unwrap();
        assert_eq!(
            config.mode,
            OutputMode::Context {
                before: true,
                after: true
            }
        );
    }

    #[test]
    fn count_flag_selects_count_mode() {
        let cli = Cli::try_parse_from(["textgrep", "-s", "x", "-d", "trees", "-c"]).unwrap();
        let config = cli.into_config().unwrap();
        assert_eq!(config.mode, OutputMode::Count);
    }
}
