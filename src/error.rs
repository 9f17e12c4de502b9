use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextgrepError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Walkdir error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("output file already exists: {}", .0.display())]
    OutputExists(PathBuf),

    #[error("context lines need a file target, not a word list")]
    ContextNeedsFile,

    #[error("An unexpected error occurred: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TextgrepError>;
