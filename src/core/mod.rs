//! Core domain types for hangman
//!
//! This module contains the fundamental domain types with zero external
//! collaborators. All types here are pure, testable, and have clear
//! round-invariant properties.

mod letters;
mod mask;
mod word;

pub use letters::LetterSet;
pub use mask::{PLACEHOLDER, masked_chars};
pub use word::{Word, WordError};
