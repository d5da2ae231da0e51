//! Hangman word representation
//!
//! A Word stores the target word in uppercase along with its set of distinct
//! letters for guess checking.

use rustc_hash::FxHashSet;
use std::fmt;

/// The target word for one round, normalized to uppercase
///
/// Stores the word as bytes and the set of distinct letters the player must find.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    distinct: FxHashSet<u8>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is normalized to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("Rose").unwrap();
    /// assert_eq!(word.text(), "ROSE");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("r0se").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let distinct: FxHashSet<u8> = text.bytes().collect();

        Ok(Self { text, distinct })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes (one uppercase ASCII letter per position)
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letter positions in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Words are validated non-empty, so this always returns false
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.distinct.contains(&letter)
    }

    /// Number of distinct letters the player must find to win
    #[inline]
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        self.distinct.len()
    }

    /// Iterate over the distinct letters of the word
    #[inline]
    pub fn distinct_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.distinct.iter().copied()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
