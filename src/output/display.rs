//! Display functions for the CLI game mode

use super::formatters::{gallows_lines, letters_line, masked_line, wrong_guess_bar};
use crate::game::{MAX_WRONG_GUESSES, Round};
use colored::Colorize;

/// Print the state of the round: gallows, masked word, guess bookkeeping
pub fn print_round(round: &Round) {
    println!();
    for line in gallows_lines(round.sequencer()) {
        println!("   {line}");
    }

    println!(
        "\n   {}",
        masked_line(&round.masked()).bright_yellow().bold()
    );

    let failed = round.tracker().failed();
    if !failed.is_empty() {
        println!("\n   Missed: {}", letters_line(failed).red());
    }
    println!(
        "   Wrong guesses: {}",
        wrong_guess_bar(failed.len(), MAX_WRONG_GUESSES)
    );
    println!();
}

/// Print the win banner
pub fn print_win(round: &Round) {
    let wrong = round.tracker().failed().len();

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "            Y O U   F O U N D   T H E   W O R D !            "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());

    let verdict = match wrong {
        0 => "Flawless! Not a single miss!",
        1..=3 => "Well played!",
        4..=6 => "That was getting close!",
        _ => "Saved at the last moment!",
    };

    println!(
        "\n  The word was {}",
        round.word().text().bright_yellow().bold()
    );
    println!("  {verdict} ({wrong} wrong guesses)");
    println!("\n{}\n", "═".repeat(60).bright_cyan());
}

/// Print the loss banner, revealing the word
pub fn print_loss(round: &Round) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "                 G A M E   O V E R                 "
            .bright_red()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());

    for line in gallows_lines(round.sequencer()) {
        println!("   {}", line.bright_red());
    }

    println!(
        "\n  The word was {}, try again!",
        round.word().text().bright_yellow().bold()
    );
    println!("\n{}\n", "═".repeat(60).bright_cyan());
}
