//! Masked word display
//!
//! Pure computation of the partially-hidden word: each position shows its
//! letter once guessed, `_` otherwise. Recomputed from (word, correct guesses)
//! on every guess; no state of its own.

use super::{LetterSet, Word};

/// Placeholder shown for letters not yet guessed
pub const PLACEHOLDER: char = '_';

/// Compute the masked rendering of `word` given the correct guesses so far
///
/// Returns one char per word position, in order.
///
/// # Examples
/// ```
/// use hangman::core::{masked_chars, LetterSet, Word};
///
/// let word = Word::new("rose").unwrap();
/// let correct: LetterSet = [b'R', b'S'].into_iter().collect();
/// assert_eq!(masked_chars(&word, &correct), vec!['R', '_', 'S', '_']);
/// ```
#[must_use]
pub fn masked_chars(word: &Word, correct: &LetterSet) -> Vec<char> {
    word.letters()
        .iter()
        .map(|&letter| {
            if correct.contains(letter) {
                letter as char
            } else {
                PLACEHOLDER
            }
        })
        .collect()
}
