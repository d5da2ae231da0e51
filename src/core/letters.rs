//! Letter set collections
//!
//! The correct-guess and failed-guess collections for a round. Insertion order
//! is irrelevant; a letter belongs to at most one set at a time, enforced by
//! the guess tracker.

use rustc_hash::FxHashSet;

/// A set of uppercase ASCII letters
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LetterSet {
    letters: FxHashSet<u8>,
}

impl LetterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a letter, returning true if it was not already present
    pub fn insert(&mut self, letter: u8) -> bool {
        self.letters.insert(letter)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.letters.iter().copied()
    }

    /// Letters in alphabetical order, for display
    #[must_use]
    pub fn sorted(&self) -> Vec<u8> {
        let mut letters: Vec<u8> = self.letters.iter().copied().collect();
        letters.sort_unstable();
        letters
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self {
            letters: iter.into_iter().collect(),
        }
    }
}
