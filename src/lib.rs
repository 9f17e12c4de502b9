pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod output;
pub mod scanner;

pub use cli::Cli;
pub use config::{OutputMode, SearchConfig, Target};
pub use engine::SearchEngine;
pub use error::{Result, TextgrepError};
pub use matcher::Occurrence;
pub use output::{Message, ResultBatch};
