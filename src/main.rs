use clap::Parser;
use colored::*;
use env_logger::{Builder, Env, Target};
use log::debug;
use std::fs;
use std::process;
use textgrep::error::Result;
use textgrep::{Cli, SearchEngine, TextgrepError};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", e.to_string().red());
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    setup_logging(&cli)?;

    let config = cli.into_config()?;
    debug!("resolved configuration: {config:?}");

    SearchEngine::new(config)?.run()
}

fn setup_logging(cli: &Cli) -> Result<()> {
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level));

    if let Some(log_path) = &cli.log {
        if let Some(parent_dir) = log_path.parent() {
            if !parent_dir.exists() {
                fs::create_dir_all(parent_dir)?;
            }
        }
        let log_file = fs::File::create(log_path)?;
        builder.target(Target::Pipe(Box::new(log_file)));
    } else {
        builder.target(Target::Stderr);
    }

    builder
        .try_init()
        .map_err(|e| TextgrepError::Other(e.to_string()))?;
    Ok(())
}
