//! Random word selection
//!
//! A `WordSource` owns a validated non-empty word pool and hands out one word
//! per round, uniformly at random.

use super::embedded::WORDS;
use super::loader::words_from_slice;
use crate::core::Word;
use rand::seq::IndexedRandom;
use std::fmt;

/// Error type for word source configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSourceError {
    EmptyList,
}

impl fmt::Display for WordSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyList => write!(f, "Word list contains no usable words"),
        }
    }
}

impl std::error::Error for WordSourceError {}

/// A non-empty pool of candidate words
#[derive(Debug, Clone)]
pub struct WordSource {
    words: Vec<Word>,
}

impl WordSource {
    /// Build a source from a word pool
    ///
    /// # Errors
    /// Returns `WordSourceError::EmptyList` if `words` is empty, so every
    /// constructed source can always pick.
    pub fn new(words: Vec<Word>) -> Result<Self, WordSourceError> {
        if words.is_empty() {
            return Err(WordSourceError::EmptyList);
        }
        Ok(Self { words })
    }

    /// The embedded default word list
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            words: words_from_slice(WORDS),
        }
    }

    /// Pick one word uniformly at random
    ///
    /// # Panics
    /// Will not panic - the pool is validated non-empty at construction.
    #[must_use]
    pub fn pick_word(&self) -> &Word {
        self.words
            .choose(&mut rand::rng())
            .expect("pool validated non-empty")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Sources are validated non-empty, so this always returns false
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
