//! Result aggregation and output: the single-consumer end of the search
//! pipeline, plus the formatting for each output mode.

use crate::config::{OutputMode, SearchConfig};
use crate::error::{Result, TextgrepError};
use crate::matcher::Occurrence;
use crossbeam_channel::Receiver;
use log::debug;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Unit of work flowing from a producer to the consumer: the occurrences of
/// one file (or of the word-list search), plus an optional precomputed total
/// for count mode.
#[derive(Debug)]
pub struct ResultBatch {
    pub occurrences: Vec<Occurrence>,
    pub total: Option<usize>,
}

/// Aggregation-channel protocol. `Done` is the terminal sentinel; exactly
/// one is sent per search, after every producer has finished.
#[derive(Debug)]
pub enum Message {
    Batch(ResultBatch),
    Done,
}

/// Drains the aggregation channel until the sentinel arrives, formatting and
/// writing each batch as it comes in. Runs on its own thread, one per search
/// invocation. An error ends the drain early; the dropped receiver
/// disconnects the channel so producers never block on a dead consumer.
pub fn drain(rx: Receiver<Message>, config: &SearchConfig) -> Result<()> {
    let mut created_output = false;
    for message in rx {
        match message {
            Message::Done => {
                debug!("output channel drained");
                break;
            }
            Message::Batch(batch) => {
                let lines = format_batch(&batch, config)?;
                write_lines(&lines, config, &mut created_output)?;
            }
        }
    }
    Ok(())
}

/// Formats one batch according to the active output mode.
fn format_batch(batch: &ResultBatch, config: &SearchConfig) -> Result<Vec<String>> {
    match config.mode {
        OutputMode::Count => {
            let total = batch.total.unwrap_or(batch.occurrences.len());
            Ok(vec![format!("Number of matches: {total}")])
        }
        OutputMode::Context { before, after } => match batch.occurrences.first() {
            Some(first) => {
                let path = first
                    .source
                    .as_deref()
                    .ok_or(TextgrepError::ContextNeedsFile)?;
                context_lines(path, first.line_number, before, after)
            }
            None => Ok(Vec::new()),
        },
        OutputMode::Matches => Ok(batch.occurrences.iter().map(format_occurrence).collect()),
    }
}

/// Human-readable form of one occurrence. File matches carry their origin;
/// word-list matches only the text.
fn format_occurrence(occurrence: &Occurrence) -> String {
    match &occurrence.source {
        Some(path) => format!(
            "Match in file: {} line {}:{} \"{}\"",
            path.display(),
            occurrence.line_number,
            occurrence.start,
            occurrence.line
        ),
        None => format!("Match found: {}", occurrence.line),
    }
}

/// Re-reads `path` and returns every line strictly before and/or strictly
/// after `line_number`, in file order. The matching line itself is never
/// included.
fn context_lines(path: &Path, line_number: usize, before: bool, after: bool) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut lines = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let current = index + 1;
        if (before && current < line_number) || (after && current > line_number) {
            lines.push(line);
        }
    }
    Ok(lines)
}

fn write_lines(lines: &[String], config: &SearchConfig, created_output: &mut bool) -> Result<()> {
    match &config.output {
        Some(path) => {
            // Whichever batch arrives first must not append to a file the
            // search did not create.
            refuse_existing(path, *created_output)?;
            append_to_file(path, lines)?;
            *created_output = true;
            Ok(())
        }
        None => {
            for line in lines {
                println!("{line}");
            }
            Ok(())
        }
    }
}

/// The one-time pre-existence check. A file this search created itself is
/// not "existing"; one it did not create must not be touched.
fn refuse_existing(path: &Path, created_output: bool) -> Result<()> {
    if !created_output && path.exists() {
        return Err(TextgrepError::OutputExists(path.to_path_buf()));
    }
    Ok(())
}

/// Appends `lines` to the output file, creating it on the first write of
/// the search.
fn append_to_file(path: &Path, lines: &[String]) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    for line in lines {
        writeln!(file, "{line}")?;
    }
    Ok(())
}
