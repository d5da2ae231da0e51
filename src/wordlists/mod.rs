//! Word lists for hangman rounds
//!
//! Provides the embedded default list, file loading, and random selection.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::{WordSource, WordSourceError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        use crate::core::Word;

        for &word in WORDS {
            assert!(Word::new(word).is_ok(), "Word '{word}' failed validation");
        }
    }

    #[test]
    fn embedded_words_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for &word in WORDS {
            assert!(seen.insert(word), "Word '{word}' appears twice");
        }
    }
}
