//! Embedded word list
//!
//! The default round words compiled into the binary.

/// Default hangman words
pub const WORDS: &[&str] = &[
    "terri",
    "flowers",
    "rose",
    "rosemarie",
    "elise",
    "jimenez",
    "newman",
    "candice",
    "maricela",
    "mindy",
];

/// Number of words in WORDS
pub const WORDS_COUNT: usize = 10;
