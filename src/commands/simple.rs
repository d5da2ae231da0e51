//! Simple interactive CLI mode
//!
//! Text-based hangman without TUI

use crate::game::{GuessError, Round, RoundError, RoundStatus};
use crate::output::{print_loss, print_round, print_win};
use crate::wordlists::WordSource;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(source: &WordSource) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Hangman - Interactive Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the word one letter at a time.");
    println!("Every miss draws another piece of the gallows; ten misses and it's over.\n");
    println!("Commands: 'quit' to exit, 'new' for a new word\n");

    let mut round = Round::new(source.pick_word().clone());

    loop {
        print_round(&round);

        let input = get_user_input("Try a letter")?.to_lowercase();

        // Commands are full words so single letters stay guessable
        match input.as_str() {
            "quit" | "exit" => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
            "new" => {
                round = Round::new(source.pick_word().clone());
                println!("\nNew word picked!\n");
                continue;
            }
            _ => {}
        }

        match round.guess(&input) {
            Err(RoundError::Guess(GuessError::InvalidInput)) => {
                println!("One letter at a time, please.\n");
                continue;
            }
            Err(RoundError::Guess(GuessError::AlreadyGuessed(letter))) => {
                println!("You already tried '{letter}'.\n");
                continue;
            }
            Err(RoundError::Reveal(e)) => return Err(e.to_string()),
            Ok(outcome) => match outcome.status {
                RoundStatus::InProgress => {
                    if outcome.correct {
                        println!("'{}' is in the word!", outcome.letter);
                    } else {
                        println!("No '{}' in this word.", outcome.letter);
                    }
                }
                RoundStatus::Won => {
                    print_win(&round);
                    if !play_again()? {
                        return Ok(());
                    }
                    round = Round::new(source.pick_word().clone());
                }
                RoundStatus::Lost => {
                    print_loss(&round);
                    if !play_again()? {
                        return Ok(());
                    }
                    round = Round::new(source.pick_word().clone());
                }
            },
        }
    }
}

fn play_again() -> Result<bool, String> {
    match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
        "yes" | "y" => {
            println!("\nNew word picked!\n");
            Ok(true)
        }
        _ => {
            println!("\nThanks for playing!\n");
            Ok(false)
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
