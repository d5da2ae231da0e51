//! One round of hangman
//!
//! A `Round` wires one word to one guess tracker and one reveal sequencer and
//! drives them with a single `guess` entry point. The owner (the TUI app or
//! the CLI loop) constructs a fresh `Round` for every play-through.

use super::reveal::{RevealError, RevealSequencer, RevealStep};
use super::tracker::{GuessError, GuessTracker};
use crate::core::{LetterSet, Word, masked_chars};
use std::fmt;

/// Where a round stands after the latest guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// What a single accepted guess did to the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    /// The guessed letter, uppercased
    pub letter: char,
    /// Whether the letter occurs in the word
    pub correct: bool,
    /// The drawing step unlocked by a wrong guess
    pub revealed: Option<RevealStep>,
    /// Round status after this guess
    pub status: RoundStatus,
}

/// Error type for rejected round actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    Guess(GuessError),
    Reveal(RevealError),
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guess(e) => write!(f, "{e}"),
            Self::Reveal(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RoundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Guess(e) => Some(e),
            Self::Reveal(e) => Some(e),
        }
    }
}

impl From<GuessError> for RoundError {
    fn from(e: GuessError) -> Self {
        Self::Guess(e)
    }
}

impl From<RevealError> for RoundError {
    fn from(e: RevealError) -> Self {
        Self::Reveal(e)
    }
}

/// One play-through: word, guess state, and drawing cursor
#[derive(Debug, Clone)]
pub struct Round {
    word: Word,
    tracker: GuessTracker,
    sequencer: RevealSequencer,
}

impl Round {
    /// Start a round for `word` with everything hidden
    #[must_use]
    pub fn new(word: Word) -> Self {
        let mut tracker = GuessTracker::new();
        tracker.start_round(&word);

        Self {
            word,
            tracker,
            sequencer: RevealSequencer::new(),
        }
    }

    /// Submit one guess and advance the round
    ///
    /// A wrong guess reveals the next drawing step. Callers start a new round
    /// once `status` leaves `InProgress`; under that contract the sequencer
    /// cannot exhaust mid-round.
    ///
    /// # Errors
    /// Propagates `GuessError` for illegal input and `RevealError` if a wrong
    /// guess arrives after the drawing is already complete.
    pub fn guess(&mut self, input: &str) -> Result<GuessOutcome, RoundError> {
        let correct = self.tracker.try_letter(input)?;
        let revealed = if correct {
            None
        } else {
            Some(self.sequencer.reveal_next()?)
        };

        Ok(GuessOutcome {
            letter: normalized_letter(input),
            correct,
            revealed,
            status: self.status(),
        })
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.tracker.has_won() {
            RoundStatus::Won
        } else if self.tracker.has_lost() {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub fn tracker(&self) -> &GuessTracker {
        &self.tracker
    }

    #[must_use]
    pub fn sequencer(&self) -> &RevealSequencer {
        &self.sequencer
    }

    /// The masked word display, one char per position
    #[must_use]
    pub fn masked(&self) -> Vec<char> {
        masked_chars(&self.word, self.tracker.correct())
    }

    /// Letters tried so far, both correct and failed
    #[must_use]
    pub fn tried(&self) -> LetterSet {
        self.tracker
            .correct()
            .iter()
            .chain(self.tracker.failed().iter())
            .collect()
    }
}

/// The uppercase letter an accepted guess was normalized to
///
/// Only called after `try_letter` validated the input.
fn normalized_letter(input: &str) -> char {
    input
        .chars()
        .next()
        .map_or('_', |c| c.to_ascii_uppercase())
}
