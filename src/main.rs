//! Wordle Helper - CLI
//!
//! Narrows a word list from guess feedback and suggests what to try next.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_helper::{
    commands::run_simple,
    corpus::{CorpusConfig, FileCorpus},
    engine::Session,
    output::print_report,
};

#[derive(Parser)]
#[command(
    name = "wordle_helper",
    about = "Narrows Wordle candidates from feedback and suggests a next guess",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list, one word per line
    #[arg(short = 'w', long, global = true, default_value = "words.txt")]
    words: PathBuf,

    /// Letter frequency CSV with a header row
    #[arg(short = 'f', long, global = true, default_value = "frequency.csv")]
    frequencies: PathBuf,

    /// Previously used answers, one per line
    #[arg(short = 'u', long, global = true, default_value = "used.txt")]
    used: PathBuf,

    /// Drop previously used answers from the candidates
    #[arg(short = 'x', long, global = true)]
    exclude_used: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive line-by-line mode
    Simple,

    /// Load the word list and print the starting report
    Report,
}

impl Cli {
    fn corpus_config(&self) -> CorpusConfig {
        CorpusConfig {
            words_path: self.words.clone(),
            frequency_path: self.frequencies.clone(),
            used_path: self.used.clone(),
        }
    }
}

fn open_session(cli: &Cli) -> Result<Session<FileCorpus>> {
    let config = cli.corpus_config();
    Session::new(FileCorpus::new(config), cli.exclude_used).with_context(|| {
        format!(
            "could not load word list {} with frequencies {}",
            cli.words.display(),
            cli.frequencies.display()
        )
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command.as_ref() {
        None => {
            println!("Don't run me directly. Try 'wordle_helper simple' for interactive mode.");
            Ok(())
        }
        Some(Commands::Report) => {
            let session = open_session(&cli)?;
            print_report(&session.report())?;
            Ok(())
        }
        Some(Commands::Simple) => {
            let mut session = open_session(&cli)?;
            let stdin = io::stdin().lock();
            run_simple(&mut session, stdin, &mut io::stdout().lock())
        }
    }
}
