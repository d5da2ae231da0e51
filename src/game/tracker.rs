//! Guess tracking and win/loss predicates
//!
//! One `GuessTracker` serves one round: it enforces guess legality and keeps
//! the correct/failed letter sets from which the win and loss predicates are
//! computed.

use crate::core::{LetterSet, Word};
use std::fmt;

/// Wrong guesses allowed before the round is lost
///
/// Matches the number of reveal steps in the drawing sequence.
pub const MAX_WRONG_GUESSES: usize = 10;

/// Error type for rejected guesses
///
/// A rejected guess leaves the round untouched; the caller reports it and
/// waits for the next input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Input was not exactly one ASCII letter
    InvalidInput,
    /// The letter was already tried this round, correct or failed
    AlreadyGuessed(char),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "You can try only one letter at a time"),
            Self::AlreadyGuessed(letter) => {
                write!(f, "The letter '{letter}' has already been played")
            }
        }
    }
}

impl std::error::Error for GuessError {}

/// Per-round guess state: letters to find, correct guesses, failed guesses
#[derive(Debug, Default, Clone)]
pub struct GuessTracker {
    letters_to_find: LetterSet,
    correct: LetterSet,
    failed: LetterSet,
}

impl GuessTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a new round for `word`
    ///
    /// Clears both guess sets and records the distinct letters of `word` as
    /// the letters the player must find.
    pub fn start_round(&mut self, word: &Word) {
        self.letters_to_find = word.distinct_letters().collect();
        self.correct.clear();
        self.failed.clear();
    }

    /// Submit one guess
    ///
    /// Returns `true` if the letter occurs in the word. Input is normalized
    /// to uppercase before any check.
    ///
    /// # Errors
    /// - `GuessError::InvalidInput` if `input` is not exactly one ASCII letter
    /// - `GuessError::AlreadyGuessed` if the letter is in either guess set
    ///
    /// On error, neither set is modified.
    pub fn try_letter(&mut self, input: &str) -> Result<bool, GuessError> {
        let mut chars = input.chars();
        let (Some(first), None) = (chars.next(), chars.next()) else {
            return Err(GuessError::InvalidInput);
        };

        if !first.is_ascii_alphabetic() {
            return Err(GuessError::InvalidInput);
        }

        let letter = first.to_ascii_uppercase() as u8;

        if self.has_been_played(letter) {
            return Err(GuessError::AlreadyGuessed(letter as char));
        }

        if self.letters_to_find.contains(letter) {
            self.correct.insert(letter);
            Ok(true)
        } else {
            self.failed.insert(letter);
            Ok(false)
        }
    }

    /// True if the letter has been tried this round, in either set
    #[must_use]
    pub fn has_been_played(&self, letter: u8) -> bool {
        self.correct.contains(letter) || self.failed.contains(letter)
    }

    /// True once every distinct letter of the word has been found
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.correct.len() == self.letters_to_find.len()
    }

    /// True once the allowed wrong guesses are used up
    #[must_use]
    pub fn has_lost(&self) -> bool {
        self.failed.len() >= MAX_WRONG_GUESSES
    }

    /// Correctly guessed letters
    #[must_use]
    pub fn correct(&self) -> &LetterSet {
        &self.correct
    }

    /// Failed guesses
    #[must_use]
    pub fn failed(&self) -> &LetterSet {
        &self.failed
    }

    /// Wrong guesses still available before the round is lost
    #[must_use]
    pub fn wrong_guesses_left(&self) -> usize {
        MAX_WRONG_GUESSES.saturating_sub(self.failed.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_for(word: &str) -> GuessTracker {
        let word = Word::new(word).unwrap();
        let mut tracker = GuessTracker::new();
        tracker.start_round(&word);
        tracker
    }

    #[test]
    fn correct_guess_accepted() {
        let mut tracker = tracker_for("rose");
        assert_eq!(tracker.try_letter("r"), Ok(true));
        assert!(tracker.correct().contains(b'R'));
        assert!(tracker.failed().is_empty());
    }

    #[test]
    fn wrong_guess_recorded_as_failed() {
        let mut tracker = tracker_for("rose");
        assert_eq!(tracker.try_letter("z"), Ok(false));
        assert!(tracker.failed().contains(b'Z'));
        assert!(tracker.correct().is_empty());
    }

    #[test]
    fn guess_is_case_insensitive() {
        let mut tracker = tracker_for("rose");
        assert_eq!(tracker.try_letter("R"), Ok(true));
        assert_eq!(
            tracker.try_letter("r"),
            Err(GuessError::AlreadyGuessed('R'))
        );
    }

    #[test]
    fn multi_char_input_rejected() {
        let mut tracker = tracker_for("rose");
        assert_eq!(tracker.try_letter("ro"), Err(GuessError::InvalidInput));
        assert_eq!(tracker.try_letter(""), Err(GuessError::InvalidInput));
        assert!(tracker.correct().is_empty());
        assert!(tracker.failed().is_empty());
    }

    #[test]
    fn non_letter_input_rejected() {
        let mut tracker = tracker_for("rose");
        assert_eq!(tracker.try_letter("7"), Err(GuessError::InvalidInput));
        assert_eq!(tracker.try_letter("!"), Err(GuessError::InvalidInput));
    }

    #[test]
    fn replayed_correct_letter_rejected_without_mutation() {
        let mut tracker = tracker_for("rose");
        tracker.try_letter("o").unwrap();
        let before_correct = tracker.correct().clone();
        let before_failed = tracker.failed().clone();

        assert_eq!(
            tracker.try_letter("o"),
            Err(GuessError::AlreadyGuessed('O'))
        );
        assert_eq!(tracker.correct(), &before_correct);
        assert_eq!(tracker.failed(), &before_failed);
    }

    #[test]
    fn replayed_failed_letter_rejected() {
        // A missed letter must not burn a second wrong guess
        let mut tracker = tracker_for("rose");
        tracker.try_letter("z").unwrap();
        assert_eq!(
            tracker.try_letter("z"),
            Err(GuessError::AlreadyGuessed('Z'))
        );
        assert_eq!(tracker.failed().len(), 1);
    }

    #[test]
    fn all_distinct_letters_win() {
        let mut tracker = tracker_for("mindy");
        for letter in ["m", "i", "n", "d"] {
            tracker.try_letter(letter).unwrap();
            assert!(!tracker.has_won());
        }
        tracker.try_letter("y").unwrap();
        assert!(tracker.has_won());
        assert!(!tracker.has_lost());
    }

    #[test]
    fn repeated_letters_need_one_guess() {
        let mut tracker = tracker_for("terri");
        tracker.try_letter("t").unwrap();
        tracker.try_letter("e").unwrap();
        tracker.try_letter("r").unwrap();
        assert!(!tracker.has_won());
        tracker.try_letter("i").unwrap();
        assert!(tracker.has_won());
    }

    #[test]
    fn ten_wrong_guesses_lose() {
        let mut tracker = tracker_for("rose");
        for (i, letter) in ["b", "c", "d", "f", "g", "h", "i", "j", "k", "l"]
            .iter()
            .enumerate()
        {
            assert!(!tracker.has_lost(), "lost after only {i} wrong guesses");
            assert_eq!(tracker.try_letter(letter), Ok(false));
        }
        assert!(tracker.has_lost());
        assert!(!tracker.has_won());
        assert_eq!(tracker.wrong_guesses_left(), 0);
    }

    #[test]
    fn nine_wrong_guesses_do_not_lose() {
        let mut tracker = tracker_for("rose");
        for letter in ["b", "c", "d", "f", "g", "h", "i", "j", "k"] {
            tracker.try_letter(letter).unwrap();
        }
        assert!(!tracker.has_lost());
        assert_eq!(tracker.wrong_guesses_left(), 1);
    }

    #[test]
    fn rose_scenario_win_progression() {
        let mut tracker = tracker_for("rose");
        let expected_won = [false, false, false, true];
        for (letter, &won) in ["r", "o", "s", "e"].iter().zip(&expected_won) {
            assert_eq!(tracker.try_letter(letter), Ok(true));
            assert_eq!(tracker.has_won(), won);
        }
    }

    #[test]
    fn start_round_resets_state() {
        let mut tracker = tracker_for("rose");
        tracker.try_letter("r").unwrap();
        tracker.try_letter("z").unwrap();

        tracker.start_round(&Word::new("mindy").unwrap());
        assert!(tracker.correct().is_empty());
        assert!(tracker.failed().is_empty());
        assert_eq!(tracker.try_letter("z"), Ok(false));
    }
}
