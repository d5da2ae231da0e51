//! Hangman - CLI
//!
//! Terminal hangman with TUI and plain CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::run_simple,
    wordlists::{WordSource, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the word before the drawing completes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,
}

/// Build the word source from the -w flag
fn load_word_source(wordlist_mode: &str) -> Result<WordSource> {
    match wordlist_mode {
        "builtin" => Ok(WordSource::builtin()),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read wordlist {path}"))?;
            WordSource::new(words)
                .with_context(|| format!("wordlist {path} has no usable words"))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let source = load_word_source(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&source),
        Commands::Simple => run_simple(&source).map_err(|e| anyhow::anyhow!(e)),
    }
}

fn run_play_command(source: &WordSource) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(source);
    run_tui(app)
}
