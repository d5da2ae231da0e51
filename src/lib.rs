//! Hangman
//!
//! A terminal hangman game: guess the word one letter at a time before the
//! ten-step gallows drawing completes.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::Word;
//! use hangman::game::{Round, RoundStatus};
//!
//! let mut round = Round::new(Word::new("rose").unwrap());
//!
//! let outcome = round.guess("r").unwrap();
//! assert!(outcome.correct);
//! assert_eq!(round.masked(), vec!['R', '_', '_', '_']);
//! assert_eq!(round.status(), RoundStatus::InProgress);
//! ```

// Core domain types
pub mod core;

// Round state machines
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
