//! The search engine: target resolution, the directory walk that fans file
//! scans out across worker tasks, and the channel plumbing that funnels
//! every result through one output thread.

use crate::config::{SearchConfig, Target};
use crate::error::{Result, TextgrepError};
use crate::matcher;
use crate::output::{self, Message, ResultBatch};
use crate::scanner;
use crossbeam_channel::{unbounded, Sender};
use log::{info, warn};
use parking_lot::Mutex;
use rayon::prelude::*;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use walkdir::WalkDir;

pub struct SearchEngine {
    config: Arc<SearchConfig>,
    pattern: Regex,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Result<Self> {
        let pattern = matcher::build_pattern(&config)?;
        Ok(Self {
            config: Arc::new(config),
            pattern,
        })
    }

    /// Runs the search to completion. Every target kind goes through the
    /// same channel and output thread; this returns only after that thread
    /// has drained the sentinel, so no output is lost on exit.
    pub fn run(&self) -> Result<()> {
        let (tx, rx) = unbounded();
        let consumer = {
            let config = Arc::clone(&self.config);
            thread::spawn(move || output::drain(rx, &config))
        };

        let produced = self.produce(&tx);

        // Exactly one sentinel per search, on success and failure paths
        // alike; the output thread exits only when it sees it.
        let _ = tx.send(Message::Done);
        drop(tx);

        let drained = consumer
            .join()
            .map_err(|_| TextgrepError::Other("output thread panicked".to_string()))?;

        produced?;
        drained
    }

    fn produce(&self, tx: &Sender<Message>) -> Result<()> {
        match &self.config.target {
            Target::Words(words) => {
                let occurrences = scanner::scan_words(words, &self.pattern);
                let _ = tx.send(Message::Batch(ResultBatch {
                    occurrences,
                    total: None,
                }));
                Ok(())
            }
            Target::Path(path) => {
                let metadata = fs::metadata(path)?;
                if metadata.is_dir() {
                    self.search_directory(path, tx)
                } else {
                    // An explicit file target that cannot be read is fatal,
                    // unlike a file discovered during a walk.
                    let occurrences = scanner::scan_file(path, &self.pattern)?;
                    let _ = tx.send(Message::Batch(ResultBatch {
                        occurrences,
                        total: None,
                    }));
                    Ok(())
                }
            }
        }
    }

    /// Walks `root` and scans every non-directory entry on its own worker
    /// task. Walk errors are fatal; a file that cannot be read is logged and
    /// skipped so the rest of the tree still reports its matches.
    fn search_directory(&self, root: &Path, tx: &Sender<Message>) -> Result<()> {
        let mut files: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(root) {
            let entry = entry?;
            if !entry.file_type().is_dir() {
                files.push(entry.into_path());
            }
        }
        info!("searching {} file(s) under {}", files.len(), root.display());

        let count_only = self.config.mode.is_count();
        let total = Mutex::new(0usize);

        // for_each returns only after every scan has finished, on success
        // and error paths alike.
        files.into_par_iter().for_each(|path| {
            match scanner::scan_file(&path, &self.pattern) {
                Ok(occurrences) => {
                    if count_only {
                        *total.lock() += occurrences.len();
                    } else {
                        let _ = tx.send(Message::Batch(ResultBatch {
                            occurrences,
                            total: None,
                        }));
                    }
                }
                Err(e) => warn!("skipping {}: {e}", path.display()),
            }
        });

        if count_only {
            // One summary for the whole walk.
            let _ = tx.send(Message::Batch(ResultBatch {
                occurrences: Vec::new(),
                total: Some(*total.lock()),
            }));
        }
        Ok(())
    }
}
